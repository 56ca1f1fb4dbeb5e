// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizes and type scale shared by every storefront view.

## Organization

- **Palette**: Dark glass surfaces and neon accents
- **Opacity**: Overlay and surface levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**

## Examples

```
use laptop_catalog::ui::design_tokens::{palette, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Surfaces (deep navy glass)
    pub const SURFACE_900: Color = Color::from_rgb(0.035, 0.043, 0.09);
    pub const SURFACE_800: Color = Color::from_rgb(0.06, 0.07, 0.14);
    pub const SURFACE_700: Color = Color::from_rgb(0.09, 0.1, 0.2);
    pub const SURFACE_600: Color = Color::from_rgb(0.13, 0.15, 0.27);

    pub const TEXT_MUTED: Color = Color::from_rgb(0.7, 0.72, 0.8);

    // Neon accents
    pub const NEON_CYAN: Color = Color::from_rgb(0.0, 0.96, 1.0);
    pub const NEON_BLUE: Color = Color::from_rgb(0.0, 0.5, 1.0);
    pub const NEON_GREEN: Color = Color::from_rgb(0.224, 1.0, 0.078);
    pub const NEON_PINK: Color = Color::from_rgb(1.0, 0.063, 0.941);
    pub const NEON_PURPLE: Color = Color::from_rgb(0.62, 0.3, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Full-window backdrop behind modal overlays.
    pub const BACKDROP: f32 = 0.9;

    /// Glass panels (toolbar, sidebar, cards).
    pub const SURFACE: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Square icon-only buttons (home, back, close).
    pub const ICON_BUTTON: f32 = 44.0;

    pub const SEARCH_WIDTH: f32 = 300.0;
    pub const SIDEBAR_WIDTH: f32 = 288.0;

    pub const CARD_WIDTH: f32 = 220.0;
    pub const CARD_HEIGHT: f32 = 170.0;

    pub const DETAIL_IMAGE_HEIGHT: f32 = 320.0;
    pub const THUMBNAIL: f32 = 72.0;

    pub const AD_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading, product name in the detail view.
    pub const TITLE_LG: f32 = 28.0;

    /// Brand name, section titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles, overlay controls.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;

    /// Large decorative glyphs (empty state, folder icon).
    pub const DISPLAY: f32 = 48.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Neon glow around hovered cards.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.6,
            ..palette::NEON_CYAN
        },
        offset: Vector::ZERO,
        blur_radius: 14.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::CARD_WIDTH < sizing::SIDEBAR_WIDTH);
    assert!(sizing::THUMBNAIL < sizing::DETAIL_IMAGE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
