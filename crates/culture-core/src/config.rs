//! Site configuration: chart styling and animation timings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Color;

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Radar chart styling
    pub chart: ChartStyle,

    /// Animation and scroll behaviour
    pub animation: AnimationConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.chart.validate()?;
        self.animation.validate()
    }
}

/// Every constant the radar renderer uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Margin kept free on every side of the chart (logical px)
    pub padding: f64,

    /// Number of concentric grid rings
    pub levels: usize,

    pub background: Color,
    pub grid_fill: Color,
    pub grid_stroke: Color,
    pub grid_line_width: f64,
    pub spoke_stroke: Color,

    pub label_color: Color,
    pub label_font: String,

    /// Distance of axis labels beyond the outer ring (logical px)
    pub label_offset: f64,

    pub series_line_width: f64,

    /// Alpha of the polygon fill; outlines and markers stay opaque
    pub series_fill_alpha: f64,

    pub marker_radius: f64,

    pub legend_swatch_size: f64,
    pub legend_row_height: f64,
    pub legend_text_offset: f64,
    pub legend_font: String,

    pub caption_font: String,

    /// Distance of the caption baseline from the bottom edge
    pub caption_bottom_margin: f64,

    /// Intersection ratio that triggers the one-shot render
    pub visibility_threshold: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: 40.0,
            levels: 5,
            background: Color::WHITE,
            grid_fill: Color::rgb(0xf8, 0xfa, 0xfc),
            grid_stroke: Color::rgb(0xe2, 0xe8, 0xf0),
            grid_line_width: 1.0,
            spoke_stroke: Color::rgb(0xcb, 0xd5, 0xe1),
            label_color: Color::rgb(0x33, 0x41, 0x55),
            label_font: "bold 12px Inter, sans-serif".to_string(),
            label_offset: 20.0,
            series_line_width: 2.0,
            series_fill_alpha: 0.2,
            marker_radius: 4.0,
            legend_swatch_size: 16.0,
            legend_row_height: 24.0,
            legend_text_offset: 24.0,
            legend_font: "14px Inter, sans-serif".to_string(),
            caption_font: "italic 12px Inter, sans-serif".to_string(),
            caption_bottom_margin: 10.0,
            visibility_threshold: 0.1,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 {
            return Err(Error::Config("chart.levels must be at least 1".into()));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(Error::Config(format!("chart.padding must be >= 0, got {}", self.padding)));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(Error::Config(format!(
                "chart.visibility_threshold must be in [0, 1], got {}",
                self.visibility_threshold
            )));
        }
        Ok(())
    }
}

/// Timings for the decorative animations (seconds unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fade_duration: f64,

    /// Slide distance of fade-in elements (logical px)
    pub fade_offset: f64,

    pub chart_fade_duration: f64,
    pub section_fade_duration: f64,
    pub stagger_step: f64,
    pub counter_duration: f64,
    pub counter_bounce: f64,
    pub particle_count: usize,

    /// Distance below the viewport top used to pick the active section (px)
    pub scroll_probe_offset: f64,

    pub section_visibility_threshold: f64,

    /// Tick interval of the animation clock (ms)
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_duration: 0.6,
            fade_offset: 20.0,
            chart_fade_duration: 0.8,
            section_fade_duration: 1.0,
            stagger_step: 0.2,
            counter_duration: 2.0,
            counter_bounce: 0.1,
            particle_count: 15,
            scroll_probe_offset: 100.0,
            section_visibility_threshold: 0.1,
            frame_interval_ms: 16,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.counter_duration > 0.0) {
            return Err(Error::Config("animation.counter_duration must be positive".into()));
        }
        if !(0.0..1.0).contains(&self.counter_bounce) {
            return Err(Error::Config("animation.counter_bounce must be in [0, 1)".into()));
        }
        if self.frame_interval_ms == 0 {
            return Err(Error::Config("animation.frame_interval_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.section_visibility_threshold) {
            return Err(Error::Config(format!(
                "animation.section_visibility_threshold must be in [0, 1], got {}",
                self.section_visibility_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SiteConfig::default().validate().is_ok());
        assert_eq!(ChartStyle::default().levels, 5);
        assert_eq!(ChartStyle::default().grid_stroke.to_css(), "#e2e8f0");
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r##"{ "chart": { "levels": 4, "background": "#0f172a" } }"##,
        )
        .unwrap();
        assert_eq!(config.chart.levels, 4);
        assert_eq!(config.chart.background, Color::rgb(0x0f, 0x17, 0x2a));
        assert_eq!(config.chart.padding, 40.0);
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn test_invalid_override() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "chart": { "levels": 0 } }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "chart": { "grid_fill": "teal" } }"#),
            Err(Error::Serialization(_))
        ));
        assert!(SiteConfig::from_json(r#"{ "animation": { "counter_bounce": 1.5 } }"#).is_err());
    }

    #[test]
    fn test_section_threshold_out_of_range_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "animation": { "section_visibility_threshold": 1.5 } }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "animation": { "section_visibility_threshold": -0.2 } }"#),
            Err(Error::Config(_))
        ));
        assert!(SiteConfig::from_json(r#"{ "animation": { "section_visibility_threshold": 0.5 } }"#).is_ok());
    }
}
