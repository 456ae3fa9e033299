use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, ExpenseForm, FormField, InputMode};
use super::commands;
use super::theme;
use super::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Expense list
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    render_expense_list(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if let Some(form) = &app.form {
        if app.input_mode == InputMode::Editing {
            render_form(f, f.area(), form);
        }
    }

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let left = Span::styled(" ExpenseTUI ", theme::table_header());
    let total = Span::styled(
        format!(" Total: {} ", format_amount(app.total)),
        theme::bold(theme::YELLOW).bg(theme::BASE),
    );
    let count = Span::styled(
        format!(" {} this month ", app.rows.len()),
        theme::dim().bg(theme::BASE),
    );

    let bar = Paragraph::new(Line::from(vec![left, total, count]))
        .style(Style::default().bg(theme::BASE));
    f.render_widget(bar, area);
}

fn render_expense_list(f: &mut Frame, area: Rect, app: &App) {
    if app.rows.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses", theme::dim())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or :add Coffee 3.50",
                theme::dim(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Expenses (0) ", theme::bold(theme::MUTED)));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::table_header()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let (amount_str, amount_style) = if expense.is_refund() {
                (
                    format!("+{}", format_amount(expense.abs_amount())),
                    theme::refunded(),
                )
            } else {
                (format_amount(expense.amount), theme::spent())
            };

            let style = if i == app.cursor {
                theme::cursor_row()
            } else {
                theme::row(i % 2 == 1)
            };

            Row::new(vec![
                Cell::from(expense.date.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(truncate(&expense.category, 40)),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Expenses ({}) ", app.rows.len()),
                theme::bold(theme::BLUE),
            )),
    );
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = theme::badge(match app.input_mode {
        InputMode::Normal => theme::BLUE,
        InputMode::Command | InputMode::Editing => theme::GREEN,
        InputMode::Confirm => theme::RED,
    });

    let info = format!(" {} expenses | {}", app.rows.len(), format_amount(app.total));

    let right = match app.input_mode {
        InputMode::Editing => " Tab next field | Enter save | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancels ",
        _ => " a add | e edit | D delete | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar()),
        Span::styled(" ".repeat(pad), theme::status_bar()),
        Span::styled(right, theme::status_bar()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::BLUE)),
                Span::styled(&app.command_input, theme::command_bar()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        _ => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim(),
                ))
            } else {
                Line::from(Span::styled(&app.status_message, theme::command_bar()))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::CRUST));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_form(f: &mut Frame, area: Rect, form: &ExpenseForm) {
    let title = if form.editing.is_some() {
        " Edit Expense "
    } else {
        " Add Expense "
    };

    let fields = [
        (FormField::Category, form.category.as_str()),
        (FormField::Amount, form.amount.as_str()),
        (FormField::Date, form.date.as_str()),
    ];

    let mut lines = vec![Line::from("")];
    for (field, value) in fields {
        let label_style = if field == form.field {
            theme::bold(theme::BLUE)
        } else {
            theme::dim()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<9} ", field.label()), label_style),
            Span::styled(value.to_string(), theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Amount accepts 3.50 or 3,50 · empty date = now ",
        theme::dim(),
    )));

    let popup_width = 52.min(area.width.saturating_sub(4));
    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BLUE))
            .style(Style::default().bg(theme::BASE))
            .title(Span::styled(title, theme::bold(theme::BLUE))),
    );
    f.render_widget(popup, popup_area);

    // Cursor at the end of the active field's value
    let field_row = match form.field {
        FormField::Category => 0,
        FormField::Amount => 1,
        FormField::Date => 2,
    };
    let value_len = match form.field {
        FormField::Category => form.category.chars().count(),
        FormField::Amount => form.amount.chars().count(),
        FormField::Date => form.date.chars().count(),
    } as u16;
    f.set_cursor_position((popup_area.x + 12 + value_len, popup_area.y + 2 + field_row));
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(" ExpenseTUI Help ", theme::bold(theme::BLUE))),
        Line::from(""),
        Line::from(Span::styled(" Navigation", theme::bold(theme::YELLOW))),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            theme::text(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Half page down/up     Ctrl-q     Quit",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Actions", theme::bold(theme::YELLOW))),
        Line::from(Span::styled(
            "  a               Add expense            e/Enter    Edit selected",
            theme::text(),
        )),
        Line::from(Span::styled(
            "  D               Delete selected        :          Command mode",
            theme::text(),
        )),
        Line::from(Span::styled(
            "  Esc             Cancel/Back            ?          This help",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::bold(theme::YELLOW))),
    ];

    // Build command list dynamically from the registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::text(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BLUE))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
