use ratatui::style::{Color, Modifier, Style};

use crate::controller::Icon;

pub(crate) const BRAND: Color = Color::Rgb(46, 49, 146);
pub(crate) const TEAL: Color = Color::Rgb(0, 210, 186);
pub(crate) const RED: Color = Color::Rgb(255, 82, 82);
pub(crate) const SOFT_RED: Color = Color::Rgb(255, 138, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub(crate) fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "LIGHT"),
            Self::Dark => write!(f, "DARK"),
        }
    }
}

pub(crate) struct Palette {
    pub(crate) bg: Color,
    pub(crate) surface: Color,
    pub(crate) text: Color,
    pub(crate) text_dim: Color,
    pub(crate) title: Color,
    pub(crate) border: Color,
}

static LIGHT: Palette = Palette {
    bg: Color::Rgb(245, 247, 250),
    surface: Color::Rgb(238, 240, 247),
    text: Color::Rgb(51, 51, 51),
    text_dim: Color::Rgb(128, 128, 128),
    title: BRAND,
    border: Color::Rgb(176, 190, 197),
};

static DARK: Palette = Palette {
    bg: Color::Rgb(26, 26, 26),
    surface: Color::Rgb(44, 44, 48),
    text: Color::Rgb(230, 230, 230),
    text_dim: Color::Rgb(150, 150, 150),
    title: Color::White,
    border: Color::Rgb(90, 90, 100),
};

impl Palette {
    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.bg)
    }

    pub(crate) fn alt_row_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub(crate) fn selected_style(&self) -> Style {
        Style::default().fg(Color::White).bg(BRAND)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub(crate) fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.surface)
    }
}

pub(crate) fn card_style() -> Style {
    Style::default().fg(Color::White).bg(BRAND)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub(crate) fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Restaurant => "🍔",
        Icon::Vehicle => "🚗",
        Icon::Utility => "💡",
        Icon::Bag => "🛒",
    }
}
