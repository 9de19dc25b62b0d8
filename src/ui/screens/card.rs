use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::controller::format_amount;
use crate::ui::app::App;
use crate::ui::theme;

/// The budget card: total spent, progress toward the limit, and what is
/// left (or how far over).
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let snap = app.snapshot();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_style())
        .style(theme::card_style())
        .title(Span::styled(
            " QuickBudget Pro ",
            theme::card_style().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // label
            Constraint::Length(1), // total
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
            Constraint::Length(1), // remaining / limit
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(" Total Spent", theme::card_style())),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", format_amount(snap.total_spent)),
            theme::card_style().add_modifier(Modifier::BOLD),
        )),
        rows[1],
    );

    let bar_color = if snap.is_over_budget {
        theme::RED
    } else {
        theme::TEAL
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(bar_color).bg(theme::BRAND))
        .ratio(snap.progress_ratio)
        .label(Span::styled(
            format!("{:.0}%", snap.progress_ratio * 100.0),
            theme::card_style().add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, rows[3]);

    let (left, left_style) = if snap.is_over_budget {
        (
            format!(
                " Over Budget by {}",
                format_amount(snap.remaining_or_overage.abs())
            ),
            Style::default()
                .fg(theme::SOFT_RED)
                .bg(theme::BRAND)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!(" {} Left", format_amount(snap.remaining_or_overage)),
            theme::card_style(),
        )
    };
    let right = format!("Budget {} ", format_amount(snap.limit));
    let pad = (rows[4].width as usize).saturating_sub(left.chars().count() + right.chars().count());

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(pad), theme::card_style()),
            Span::styled(right, theme::card_style()),
        ])),
        rows[4],
    );
}
