use ratatui::style::{Color, Modifier, Style};

// Catppuccin Mocha subset
pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const CRUST: Color = Color::Rgb(24, 24, 37);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const MUTED: Color = Color::Rgb(127, 132, 156);
pub(crate) const BLUE: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);

pub(crate) fn bold(fg: Color) -> Style {
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Inverted chip, used for the mode indicator and the title.
pub(crate) fn badge(bg: Color) -> Style {
    Style::default().fg(BASE).bg(bg).add_modifier(Modifier::BOLD)
}

pub(crate) fn text() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim() -> Style {
    Style::default().fg(MUTED)
}

pub(crate) fn table_header() -> Style {
    bold(TEXT).bg(BASE)
}

pub(crate) fn cursor_row() -> Style {
    Style::default().fg(BASE).bg(BLUE)
}

/// Zebra striping for non-cursor rows.
pub(crate) fn row(alt: bool) -> Style {
    if alt {
        text().bg(SURFACE)
    } else {
        text()
    }
}

pub(crate) fn spent() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn refunded() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn command_bar() -> Style {
    Style::default().fg(TEXT).bg(CRUST)
}

pub(crate) fn status_bar() -> Style {
    Style::default().fg(MUTED).bg(SURFACE)
}
