//! Fundamental types for the radar chart and page content.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum number of axes for a radar chart to make sense
pub const MIN_CATEGORIES: usize = 3;

/// RGBA color. Channels are 0..=255, alpha is 0.0..=1.0.
///
/// Serialized as a CSS color string so configuration files can use the
/// same notation as stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) },
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        let invalid = || Error::InvalidColor(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
                [r1, r0, g1, g0, b1, b0] => {
                    Ok(Self::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
                }
                _ => Err(invalid()),
            };
        }

        let (body, expects_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        match (parts.as_slice(), expects_alpha) {
            ([r, g, b], false) => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            ([r, g, b, a], true) => {
                let alpha = a.parse::<f64>().map_err(|_| invalid())?;
                Ok(Self::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
            }
            _ => Err(invalid()),
        }
    }

    /// CSS serialization: hex when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// One axis of the radar chart. Its position in the category list
/// determines its angle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    pub label: String,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// A named set of per-category values drawn as one polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Color,
    /// One value per category, nominally in [0, 1]
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }

    pub fn clamped_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().map(clamp_unit)
    }

    /// Translucent fill used for the polygon body
    pub fn fill_color(&self, alpha: f64) -> Color {
        self.color.with_alpha(alpha)
    }

    /// Opaque color used for the outline, markers and legend swatch
    pub fn stroke_color(&self) -> Color {
        self.color.with_alpha(1.0)
    }
}

/// Clamp into [0, 1], mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Everything the radar renderer draws besides styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub categories: Vec<Category>,
    pub series: Vec<Series>,
    /// Source citation printed in the bottom corner
    #[serde(default)]
    pub caption: Option<String>,
}

impl ChartData {
    pub fn new(categories: Vec<Category>, series: Vec<Series>) -> Self {
        Self {
            categories,
            series,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn axis_count(&self) -> usize {
        self.categories.len()
    }

    /// Check the structural invariants the renderer relies on
    pub fn validate(&self) -> Result<()> {
        let axes = self.categories.len();
        if axes < MIN_CATEGORIES {
            return Err(Error::TooFewCategories {
                required: MIN_CATEGORIES,
                actual: axes,
            });
        }

        let mut seen = HashSet::with_capacity(axes);
        for category in &self.categories {
            if !seen.insert(category.label.as_str()) {
                return Err(Error::DuplicateCategory(category.label.clone()));
            }
        }

        if self.series.is_empty() {
            return Err(Error::NoSeries);
        }

        for series in &self.series {
            if series.values.len() != axes {
                return Err(Error::SeriesLengthMismatch {
                    series: series.name.clone(),
                    expected: axes,
                    actual: series.values.len(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: Vec<f64>) -> ChartData {
        ChartData::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![Series::new("s", Color::rgb(255, 0, 0), values)],
        )
    }

    #[test]
    fn test_color_parse_hex() {
        assert_eq!(Color::parse("#10b981").unwrap(), Color::rgb(0x10, 0xb9, 0x81));
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
    }

    #[test]
    fn test_color_parse_rgba() {
        let c = Color::parse("rgba(16, 185, 129, 0.2)").unwrap();
        assert_eq!((c.r, c.g, c.b), (16, 185, 129));
        assert!((c.a - 0.2).abs() < 1e-12);
        assert!(Color::parse("rgba(16, 185, 129)").is_err());
        assert!(Color::parse("hsl(0, 0%, 0%)").is_err());
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(0x64, 0x74, 0x8b).to_css(), "#64748b");
        assert_eq!(
            Color::rgb(100, 116, 139).with_alpha(0.2).to_css(),
            "rgba(100, 116, 139, 0.2)"
        );
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(16, 185, 129)).unwrap();
        assert_eq!(json, "\"#10b981\"");
        let back: Color = serde_json::from_str("\"rgba(1, 2, 3, 0.5)\"").unwrap();
        assert_eq!(back, Color::rgba(1, 2, 3, 0.5));
    }

    #[test]
    fn test_value_clamp() {
        let series = Series::new("s", Color::WHITE, vec![1.5, -0.2, f64::NAN, 0.4]);
        let values: Vec<f64> = series.clamped_values().collect();
        assert_eq!(values, vec![1.0, 0.0, 0.0, 0.4]);
    }

    #[test]
    fn test_validate() {
        assert!(sample(vec![1.0, 0.0, 0.5]).validate().is_ok());

        assert!(matches!(
            sample(vec![1.0, 0.0]).validate(),
            Err(Error::SeriesLengthMismatch { expected: 3, actual: 2, .. })
        ));

        let mut two_axes = sample(vec![1.0, 0.0]);
        two_axes.categories.pop();
        assert!(matches!(
            two_axes.validate(),
            Err(Error::TooFewCategories { required: 3, actual: 2 })
        ));

        let mut duplicated = sample(vec![1.0, 0.0, 0.5]);
        duplicated.categories[2] = "A".into();
        assert_eq!(duplicated.validate(), Err(Error::DuplicateCategory("A".into())));

        let mut empty = sample(vec![1.0, 0.0, 0.5]);
        empty.series.clear();
        assert_eq!(empty.validate(), Err(Error::NoSeries));
    }
}
