// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the map and its panels.

## Organization

- **Palette**: Base colors and map feature colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and marker sizes
- **Typography**: Font size scale
- **Border**: Border width scale, including country outlines
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use wonder_atlas::ui::design_tokens::{opacity, palette};
use iced::Color;

let country_fill = Color {
    a: opacity::COUNTRY_FILL,
    ..palette::COUNTRY_FILL
};
assert_eq!(country_fill.a, 0.7);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Map features
    /// `#ccc`, countries without a choropleth value.
    pub const COUNTRY_FILL: Color = Color::from_rgb(0.8, 0.8, 0.8);
    /// `#000`
    pub const COUNTRY_BORDER: Color = Color::BLACK;
    /// `#666`
    pub const COUNTRY_HOVER: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// `#FFA500`
    pub const COUNTRY_SELECTED: Color = Color::from_rgb(1.0, 0.647, 0.0);
    /// Gold marker for man-made wonders.
    pub const WONDER_MARKER: Color = Color::from_rgb(1.0, 0.843, 0.0);
    /// Green marker for natural wonders.
    pub const NATURAL_WONDER_MARKER: Color = Color::from_rgb(0.0, 0.502, 0.0);
    /// Canvas background when no base map is drawn.
    pub const OCEAN: Color = Color::from_rgb(0.83, 0.89, 0.94);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;

    /// Country polygons, so the base map shows through.
    pub const COUNTRY_FILL: f32 = 0.7;

    /// Wonder marker fill.
    pub const MARKER: f32 = 0.8;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const HEADER_HEIGHT: f32 = 48.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const COUNTRY_PANEL_WIDTH: f32 = 300.0;
    pub const POPUP_WIDTH: f32 = 340.0;
    pub const POPUP_IMAGE_HEIGHT: f32 = 180.0;
    pub const POPUP_MAX_HEIGHT: f32 = 520.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const LEGEND_SWATCH: f32 = 14.0;
    pub const ZOOM_BUTTON: f32 = 32.0;

    /// Wonder marker radius, also the click hit radius.
    pub const MARKER_RADIUS: f32 = 6.0;
    /// Side of a wonder picture marker.
    pub const MARKER_ICON: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, popup heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers, legend title
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Attribution, scale bar, legend labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields, country outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents, hovered country
    pub const WIDTH_MD: f32 = 2.0;

    /// Selected country outline.
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::COUNTRY_FILL > 0.0 && opacity::COUNTRY_FILL < 1.0);
    assert!(opacity::MARKER > 0.0 && opacity::MARKER < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Radius validation
    assert!(radius::NONE == 0.0);
    assert!(radius::MD > radius::SM);
    assert!(radius::SM > radius::NONE);

    // Border validation
    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn highlight_colors_match_map_style() {
        let close = |a: Color, b: Color| {
            (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3
        };
        assert!(close(palette::COUNTRY_FILL, Color::from_rgb8(0xcc, 0xcc, 0xcc)));
        assert!(close(palette::COUNTRY_HOVER, Color::from_rgb8(0x66, 0x66, 0x66)));
        assert_eq!(palette::COUNTRY_SELECTED.r, 1.0);
        assert_eq!(palette::COUNTRY_SELECTED.b, 0.0);
    }
}
