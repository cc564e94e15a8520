use iced::border::{Border, Radius};
use iced::widget::{button, container, progress_bar, text_input};
use iced::{Background, Color, Shadow, Vector};

use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

pub(super) fn primary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let base = darken(palette.primary, 0.92);
    let mut style = button::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: base,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        text_color: palette.primary_text,
        shadow: Shadow {
            offset: Vector::new(0.0, 1.0),
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette.primary_hover));
            style.border.color = palette.primary_hover;
        }
        button::Status::Pressed => {
            let pressed = darken(palette.primary, 0.8);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Disabled => {
            let disabled_base = with_alpha(base, 0.5);
            style.background = Some(Background::Color(disabled_base));
            style.border.color = disabled_base;
            style.text_color = with_alpha(palette.primary_text, 0.6);
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            radius: Radius::from(8.0),
            ..Border::default()
        },
        text_color: palette.secondary_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.ghost_hover));
            style.text_color = palette.text_primary;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.secondary_text, 0.5);
        }
        button::Status::Active => {}
    }

    style
}

/// Pill used for mutually exclusive choices such as pomodoro modes and themes.
pub(super) fn choice_button_style(
    palette: Palette,
    selected: bool,
    status: button::Status,
) -> button::Style {
    if selected {
        let mut style = primary_button_style(palette, status);
        style.border.radius = Radius::from(16.0);
        return style;
    }

    let mut style = ghost_button_style(palette, status);
    style.border = Border {
        color: palette.border,
        width: 1.0,
        radius: Radius::from(16.0),
    };
    style
}

pub(super) fn danger_icon_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = ghost_button_style(palette, status);
    style.text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.danger,
        _ => palette.text_muted,
    };
    style
}

pub(super) fn text_input_style(palette: Palette, status: text_input::Status) -> text_input::Style {
    let mut style = text_input::Style {
        background: Background::Color(palette.surface_muted),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(8.0),
        },
        icon: palette.text_secondary,
        placeholder: palette.text_muted,
        value: palette.text_primary,
        selection: with_alpha(palette.primary, 0.35),
    };

    match status {
        text_input::Status::Focused { is_hovered } => {
            style.border.color = if is_hovered {
                palette.primary_hover
            } else {
                palette.primary
            };
        }
        text_input::Status::Hovered => {
            style.border.color = palette.primary_hover;
        }
        text_input::Status::Disabled => {
            style.background = Background::Color(with_alpha(palette.surface_muted, 0.6));
            style.border.color = with_alpha(palette.border, 0.3);
            style.value = with_alpha(palette.text_primary, 0.6);
            style.placeholder = with_alpha(palette.text_muted, 0.5);
            style.icon = with_alpha(palette.text_secondary, 0.5);
        }
        text_input::Status::Active => {}
    }

    style
}

/// Section card; goes translucent when a wallpaper sits behind it.
pub(super) fn card_style(palette: Palette, over_wallpaper: bool) -> container::Style {
    let fill = if over_wallpaper {
        palette.overlay
    } else {
        palette.surface
    };

    container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(12.0),
        },
        text_color: Some(palette.text_primary),
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.12),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

pub(super) fn skeleton_block_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.skeleton)),
        border: Border {
            radius: Radius::from(8.0),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub(super) fn background_style(palette: Palette, over_wallpaper: bool) -> container::Style {
    container::Style {
        background: (!over_wallpaper).then_some(Background::Color(palette.background)),
        text_color: Some(palette.text_primary),
        ..container::Style::default()
    }
}

pub(super) fn backdrop_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(Color::BLACK, 0.6))),
        ..container::Style::default()
    }
}

pub(super) fn dialog_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(14.0),
        },
        text_color: Some(palette.text_primary),
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.35),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

pub(super) fn progress_style(palette: Palette) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(palette.surface_muted),
        bar: Background::Color(palette.primary),
        border: Border {
            radius: Radius::from(4.0),
            ..Border::default()
        },
    }
}
