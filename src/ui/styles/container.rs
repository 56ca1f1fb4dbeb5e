// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn glass(color: Color) -> Background {
    Background::Color(Color {
        a: opacity::SURFACE,
        ..color
    })
}

/// Window background behind everything.
pub fn app(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Toolbar and taskbar strips.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(glass(palette::SURFACE_800)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::NEON_BLUE
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Rounded glass panel (sidebar blocks, detail sections).
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(glass(palette::SURFACE_700)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::NEON_PURPLE
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window layer behind modal overlays.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Ad popup frame.
pub fn popup(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_800)),
        border: Border {
            color: palette::NEON_BLUE,
            width: border::WIDTH_MD,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

/// Ad title banner.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, palette::NEON_BLUE)
                .add_stop(1.0, palette::NEON_PURPLE)
                .into(),
        )),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
