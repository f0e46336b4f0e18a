// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal color assignment over a fixed palette.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use piewheel_store::Record;

/// A fixed wheel of segment colors, addressed modulo its length.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: &'static [Color],
}

/// The default 12-color pastel wheel used for segments.
const WHEEL: [Color; 12] = [
    Color::from_rgb8(0x8d, 0xd3, 0xc7),
    Color::from_rgb8(0xff, 0xff, 0xb3),
    Color::from_rgb8(0xbe, 0xba, 0xda),
    Color::from_rgb8(0xfb, 0x80, 0x72),
    Color::from_rgb8(0x80, 0xb1, 0xd3),
    Color::from_rgb8(0xfd, 0xb4, 0x62),
    Color::from_rgb8(0xb3, 0xde, 0x69),
    Color::from_rgb8(0xfc, 0xcd, 0xe5),
    Color::from_rgb8(0xd9, 0xd9, 0xd9),
    Color::from_rgb8(0xbc, 0x80, 0xbd),
    Color::from_rgb8(0xcc, 0xeb, 0xc5),
    Color::from_rgb8(0xff, 0xed, 0x6f),
];

impl Palette {
    /// The default pastel wheel.
    #[must_use]
    pub const fn wheel() -> Self {
        Self { colors: &WHEEL }
    }

    /// Creates a palette from a static color slice.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    #[must_use]
    pub const fn from_colors(colors: &'static [Color]) -> Self {
        assert!(!colors.is_empty(), "palette must have at least one color");
        Self { colors }
    }

    /// Returns the color for the given ordinal slot, wrapping around.
    #[must_use]
    pub fn slot(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Returns the number of distinct colors before wrapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `false`; palettes are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::wheel()
    }
}

/// Ordinal name → color mapping rebuilt from the current record list.
///
/// The domain is the set of distinct names currently present, in order of
/// first appearance; each name takes the palette slot matching its domain
/// position. Because the domain is recomputed on every update, assignments
/// may shift when the set of names changes, exactly as an ordinal scale over
/// a changing domain would.
///
/// ```rust
/// use piewheel_layout::ColorScale;
/// use piewheel_store::Record;
///
/// let mut scale = ColorScale::default();
/// scale.assign(&[
///     Record::new("a", "Food", 10.0),
///     Record::new("b", "Rent", 30.0),
///     Record::new("c", "Food", 5.0),
/// ]);
///
/// // Shared names share a color; the domain is deduplicated.
/// assert_eq!(scale.color_of("Food"), scale.color_of("Food"));
/// assert_eq!(scale.domain().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColorScale {
    palette: Palette,
    domain: Vec<String>,
}

impl ColorScale {
    /// Creates a scale over the given palette with an empty domain.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            domain: Vec::new(),
        }
    }

    /// Rebuilds the domain from the distinct names in `records`, in order of
    /// first appearance.
    pub fn assign(&mut self, records: &[Record]) {
        self.domain.clear();
        for record in records {
            if !self.domain.iter().any(|n| *n == record.name) {
                self.domain.push(record.name.clone());
            }
        }
    }

    /// Returns the color assigned to `name`, if it is in the domain.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.domain
            .iter()
            .position(|n| n == name)
            .map(|slot| self.palette.slot(slot))
    }

    /// Iterates the domain as `(name, color)` pairs in slot order.
    ///
    /// This is the source of truth for the legend.
    pub fn domain(&self) -> impl Iterator<Item = (&str, Color)> {
        self.domain
            .iter()
            .enumerate()
            .map(|(slot, name)| (name.as_str(), self.palette.slot(slot)))
    }
}

/// Linearly blends two colors componentwise in 8-bit RGBA space.
///
/// `t` is clamped to `[0, 1]`. This matches how the chart fades a segment's
/// fill toward the highlight color on hover.
#[must_use]
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = from.to_rgba8();
    let b = to.to_rgba8();
    let mix = |x: u8, y: u8| {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "blended channel is clamped into u8 range before the cast"
        )]
        {
            (f64::from(x) + (f64::from(y) - f64::from(x)) * t).clamp(0.0, 255.0) as u8
        }
    };
    Color::from_rgba8(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(a.a, b.a),
    )
}
