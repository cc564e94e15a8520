//! Palette definitions for each selectable start-page theme.

use iced::{Color, Theme};
use serene_core::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    /// Translucent card drawn over a custom wallpaper.
    pub(crate) overlay: Color,
    pub(crate) skeleton: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) secondary_text: Color,
    pub(crate) ghost_hover: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) info: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) border: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: ThemeName, system_dark: bool) -> Self {
        match theme {
            ThemeName::Default if !system_dark => Self::light(),
            ThemeName::Default | ThemeName::Dark => Self::dark(),
            ThemeName::Forest => Self {
                background: Color::from_rgb(0.06, 0.11, 0.08),
                surface: Color::from_rgb(0.09, 0.15, 0.11),
                surface_muted: Color::from_rgb(0.12, 0.19, 0.14),
                primary: Color::from_rgb(0.42, 0.75, 0.45),
                primary_hover: Color::from_rgb(0.50, 0.84, 0.53),
                primary_text: Color::from_rgb(0.03, 0.08, 0.04),
                secondary_text: Color::from_rgb(0.70, 0.84, 0.71),
                ghost_hover: Color::from_rgba(0.42, 0.75, 0.45, 0.18),
                text_primary: Color::from_rgb(0.90, 0.95, 0.90),
                text_secondary: Color::from_rgb(0.64, 0.76, 0.65),
                text_muted: Color::from_rgb(0.44, 0.55, 0.45),
                border: Color::from_rgba(0.42, 0.75, 0.45, 0.30),
                ..Self::dark()
            },
            ThemeName::Ocean => Self {
                background: Color::from_rgb(0.04, 0.08, 0.14),
                surface: Color::from_rgb(0.07, 0.12, 0.20),
                surface_muted: Color::from_rgb(0.10, 0.16, 0.25),
                primary: Color::from_rgb(0.30, 0.66, 0.92),
                primary_hover: Color::from_rgb(0.40, 0.74, 0.98),
                primary_text: Color::from_rgb(0.02, 0.05, 0.10),
                secondary_text: Color::from_rgb(0.68, 0.80, 0.92),
                ghost_hover: Color::from_rgba(0.30, 0.66, 0.92, 0.18),
                text_primary: Color::from_rgb(0.90, 0.94, 0.98),
                text_secondary: Color::from_rgb(0.62, 0.72, 0.84),
                text_muted: Color::from_rgb(0.42, 0.50, 0.62),
                border: Color::from_rgba(0.30, 0.66, 0.92, 0.30),
                ..Self::dark()
            },
            ThemeName::Sunset => Self {
                background: Color::from_rgb(0.16, 0.08, 0.10),
                surface: Color::from_rgb(0.22, 0.11, 0.13),
                surface_muted: Color::from_rgb(0.27, 0.14, 0.16),
                primary: Color::from_rgb(0.98, 0.58, 0.36),
                primary_hover: Color::from_rgb(1.00, 0.66, 0.45),
                primary_text: Color::from_rgb(0.14, 0.05, 0.03),
                secondary_text: Color::from_rgb(0.96, 0.78, 0.70),
                ghost_hover: Color::from_rgba(0.98, 0.58, 0.36, 0.18),
                text_primary: Color::from_rgb(0.99, 0.93, 0.90),
                text_secondary: Color::from_rgb(0.84, 0.68, 0.64),
                text_muted: Color::from_rgb(0.62, 0.48, 0.46),
                border: Color::from_rgba(0.98, 0.58, 0.36, 0.30),
                ..Self::dark()
            },
            ThemeName::Custom => Self {
                background: Color::from_rgb(0.05, 0.05, 0.06),
                overlay: Color::from_rgba(0.08, 0.08, 0.10, 0.80),
                ..Self::dark()
            },
        }
    }

    fn light() -> Self {
        Self {
            background: Color::from_rgb(0.97, 0.97, 0.96),
            surface: Color::from_rgb(1.00, 1.00, 1.00),
            surface_muted: Color::from_rgb(0.93, 0.93, 0.92),
            overlay: Color::from_rgba(1.00, 1.00, 1.00, 0.80),
            skeleton: Color::from_rgb(0.88, 0.88, 0.87),
            primary: Color::from_rgb(0.20, 0.22, 0.28),
            primary_hover: Color::from_rgb(0.28, 0.30, 0.38),
            primary_text: Color::from_rgb(0.98, 0.98, 0.98),
            secondary_text: Color::from_rgb(0.30, 0.32, 0.38),
            ghost_hover: Color::from_rgba(0.20, 0.22, 0.28, 0.08),
            success: Color::from_rgb(0.18, 0.60, 0.36),
            danger: Color::from_rgb(0.82, 0.24, 0.24),
            info: Color::from_rgb(0.20, 0.46, 0.78),
            text_primary: Color::from_rgb(0.10, 0.11, 0.14),
            text_secondary: Color::from_rgb(0.36, 0.38, 0.44),
            text_muted: Color::from_rgb(0.56, 0.58, 0.62),
            border: Color::from_rgb(0.86, 0.86, 0.85),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::from_rgb(0.06, 0.06, 0.08),
            surface: Color::from_rgb(0.10, 0.10, 0.12),
            surface_muted: Color::from_rgb(0.14, 0.14, 0.17),
            overlay: Color::from_rgba(0.10, 0.10, 0.12, 0.80),
            skeleton: Color::from_rgb(0.18, 0.18, 0.21),
            primary: Color::from_rgb(0.90, 0.90, 0.92),
            primary_hover: Color::from_rgb(1.00, 1.00, 1.00),
            primary_text: Color::from_rgb(0.06, 0.06, 0.08),
            secondary_text: Color::from_rgb(0.72, 0.72, 0.78),
            ghost_hover: Color::from_rgba(1.00, 1.00, 1.00, 0.08),
            success: Color::from_rgb(0.30, 0.78, 0.48),
            danger: Color::from_rgb(0.90, 0.34, 0.34),
            info: Color::from_rgb(0.42, 0.66, 0.96),
            text_primary: Color::from_rgb(0.94, 0.94, 0.96),
            text_secondary: Color::from_rgb(0.66, 0.66, 0.72),
            text_muted: Color::from_rgb(0.46, 0.46, 0.52),
            border: Color::from_rgba(1.00, 1.00, 1.00, 0.12),
        }
    }
}

/// Built-in iced theme used for widget defaults underneath the palette.
pub(crate) fn iced_theme(theme: ThemeName, system_dark: bool) -> Theme {
    match theme {
        ThemeName::Default if !system_dark => Theme::Light,
        ThemeName::Default | ThemeName::Dark | ThemeName::Custom => Theme::Dark,
        ThemeName::Forest => Theme::GruvboxDark,
        ThemeName::Ocean => Theme::Nord,
        ThemeName::Sunset => Theme::CatppuccinMocha,
    }
}
