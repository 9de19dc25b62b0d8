use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::form::{Field, Form};
use super::theme::{self, Palette};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = f.area();
    f.render_widget(Block::default().style(palette.normal_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(7), // Budget card
            Constraint::Min(4),    // Expenses
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(area);

    render_title_bar(f, chunks[0], app);
    super::screens::card::render(f, chunks[1], app);
    super::screens::expenses::render(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
    render_command_bar(f, chunks[4], app);

    if let Some(form) = &app.form {
        render_form(f, area, form, palette);
    }

    if app.show_help {
        render_help_overlay(f, area, palette);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let right = format!("{} theme (t) ", app.theme);
    let left = " QuickBudget";
    let pad = (area.width as usize).saturating_sub(left.len() + right.len());
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, palette.title_style()),
        Span::styled(" ".repeat(pad), palette.normal_style()),
        Span::styled(right, palette.dim_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(Color::White)
            .bg(theme::BRAND)
            .add_modifier(Modifier::BOLD),
        InputMode::Form => Style::default()
            .fg(theme::BRAND)
            .bg(theme::TEAL)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(Color::White)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let mut info = format!(" {} expenses", app.snapshot().expenses.len());
    if let Some(index) = app.controller.pending_edit() {
        info.push_str(&format!(" | editing #{}", index + 1));
    }

    let right = match app.input_mode {
        InputMode::Normal => " a add | e edit | d delete | b budget | ? help ",
        InputMode::Form => " Tab next | ←/→ category | Enter save | Esc cancel ",
        InputMode::Confirm => " y confirm | any key cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, palette.status_bar_style()),
        Span::styled(" ".repeat(pad), palette.status_bar_style()),
        Span::styled(right, palette.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let content = match app.input_mode {
        InputMode::Confirm => Line::from(vec![
            Span::styled(
                format!(" {}", app.confirm_message),
                palette.normal_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        _ if app.status_message.is_empty() => Line::from(Span::styled(
            " Press a to add an expense, ? for help",
            palette.dim_style(),
        )),
        _ => Line::from(Span::styled(
            format!(" {}", app.status_message),
            palette.normal_style(),
        )),
    };
    f.render_widget(Paragraph::new(content), area);
}

fn render_form(f: &mut Frame, area: Rect, form: &Form, palette: &Palette) {
    let fields = form.fields();
    let mut lines = vec![Line::from("")];
    let mut cursor = None;

    for field in fields {
        let focused = *field == form.focus;
        lines.push(Line::from(Span::styled(
            format!(" {}", field.label()),
            palette.dim_style(),
        )));
        let value_style = if focused {
            palette.selected_style()
        } else {
            palette.alt_row_style()
        };
        let value = match field {
            Field::Category => format!(" ◀ {} ▶ ", form.value(*field)),
            _ => format!(" {} ", form.value(*field)),
        };
        if focused && *field != Field::Category {
            cursor = Some((lines.len() as u16, 1 + form.value(*field).chars().count() as u16));
        }
        lines.push(Line::from(vec![Span::raw(" "), Span::styled(value, value_style)]));
        lines.push(Line::from(""));
    }

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = 50.min(area.width);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BRAND))
            .style(palette.normal_style())
            .title(Span::styled(form.title(), palette.title_style())),
    );
    f.render_widget(popup, popup_area);

    if let Some((row, col)) = cursor {
        // border + leading space + value padding
        let cx = (popup_area.x + 2 + col).min(popup_area.right().saturating_sub(2));
        let cy = popup_area.y + 1 + row;
        f.set_cursor_position((cx, cy));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let section = |title: &'static str| Line::from(Span::styled(title, palette.title_style()));
    let entry = |text: &'static str| Line::from(Span::styled(text, palette.normal_style()));

    let help_text = vec![
        section(" QuickBudget Help "),
        Line::from(""),
        section(" Navigation"),
        entry("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        entry("  t                Toggle theme          q/Ctrl-c   Quit"),
        Line::from(""),
        section(" Expenses"),
        entry("  a                Add expense           e/Enter    Edit selected"),
        entry("  d                Delete selected       b          Set budget"),
        Line::from(""),
        section(" Forms"),
        entry("  Tab/Shift-Tab    Next/previous field   ←/→        Change category"),
        entry("  Enter            Save                  Esc        Cancel"),
        Line::from(""),
        Line::from(Span::styled(" Press any key to close ", palette.dim_style())),
    ];

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BRAND))
            .style(palette.normal_style()),
    );
    f.render_widget(help, popup_area);
}
