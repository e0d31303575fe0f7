//! Light/dark theme palette and ink remapping.

use inkslate_core::SerializableColor;
use peniko::Color;

/// Render theme. Elements store their authored colors; the theme decides
/// the surrounding palette and remaps default ink so strokes stay visible
/// on both backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored stroke color for display. Default dark ink flips
    /// to light ink on the dark background and vice versa; any other
    /// authored color passes through untouched.
    pub fn ink(self, color: SerializableColor) -> Color {
        let resolved = match self {
            Theme::Dark
                if color == SerializableColor::INK || color == SerializableColor::black() =>
            {
                SerializableColor::PAPER
            }
            Theme::Light
                if color == SerializableColor::PAPER || color == SerializableColor::white() =>
            {
                SerializableColor::INK
            }
            _ => color,
        };
        resolved.into()
    }

    pub fn canvas(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba8(0xf8, 0xfa, 0xfc, 255),
            Theme::Dark => Color::from_rgba8(0x0f, 0x17, 0x2a, 255),
        }
    }

    /// Grid line color for the 20px background pattern.
    pub fn grid(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba8(0xe2, 0xe8, 0xf0, 255),
            Theme::Dark => Color::from_rgba8(0x33, 0x33, 0x33, 255),
        }
    }

    /// Translucent backdrop behind table grids so cell text stays legible
    /// over other elements.
    pub fn table_fill(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba8(255, 255, 255, 204),
            Theme::Dark => Color::from_rgba8(0x33, 0x41, 0x55, 77),
        }
    }

    /// Fill of the ruler's measurement label box.
    pub fn label_fill(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba8(255, 255, 255, 255),
            Theme::Dark => Color::from_rgba8(0x1e, 0x29, 0x3b, 255),
        }
    }

    pub fn cell_text(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba8(0, 0, 0, 255),
            Theme::Dark => Color::from_rgba8(255, 255, 255, 255),
        }
    }
}
