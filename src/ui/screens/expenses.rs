use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let expenses = &app.snapshot().expenses;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.normal_style())
        .title(Span::styled(
            format!(" Recent Transactions ({}) ", expenses.len()),
            palette.title_style(),
        ));

    if expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", palette.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, b to set a budget",
                palette.dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let rows: Vec<Row> = expenses
        .iter()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|row| {
            let style = if row.index == app.expense_index {
                palette.selected_style()
            } else if row.index % 2 == 1 {
                palette.alt_row_style()
            } else {
                palette.normal_style()
            };

            Row::new(vec![
                Cell::from(theme::icon_glyph(row.icon)),
                Cell::from(Line::from(vec![
                    Span::styled(truncate(&row.item, 40), style.add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(row.category.to_string(), style.add_modifier(Modifier::DIM)),
                ])),
                Cell::from(row.date.as_str()),
                Cell::from(Span::styled(
                    format!("- {}", row.amount_display),
                    theme::expense_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(20),
    ];

    f.render_widget(Table::new(rows, widths).block(block), area);
}
