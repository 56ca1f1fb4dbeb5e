// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (ad "Continue", contact).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, glow) = match status {
        button::Status::Hovered => (palette::NEON_CYAN, shadow::GLOW),
        button::Status::Pressed => (palette::NEON_BLUE, shadow::NONE),
        _ => (palette::NEON_BLUE, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Hovered {
            palette::SURFACE_900
        } else {
            WHITE
        },
        border: Border {
            color: palette::NEON_CYAN,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: glow,
        snap: true,
    }
}

/// Translucent buttons drawn over images (viewer controls).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: alpha,
                    ..palette::NEON_CYAN
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Icon-only toolbar buttons tinted with `accent`.
pub fn toolbar(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color { a: fill, ..accent })),
            text_color: accent,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Grid and sidebar cards; `selected` highlights the active category.
pub fn card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let border_color = if selected || hovered {
            palette::NEON_CYAN
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::NEON_BLUE
            }
        };

        button::Style {
            background: Some(Background::Color(if hovered {
                palette::SURFACE_600
            } else {
                palette::SURFACE_700
            })),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: if selected {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::LG.into(),
            },
            shadow: if hovered { shadow::GLOW } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Plain text link-like button.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: if status == button::Status::Hovered {
            WHITE
        } else {
            color
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Thumbnail in the detail gallery.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(palette::SURFACE_800)),
        text_color: WHITE,
        border: Border {
            color: if selected || status == button::Status::Hovered {
                palette::NEON_GREEN
            } else {
                palette::SURFACE_600
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
