//! Drawing surface abstraction.
//!
//! [`RenderSurface`] mirrors the subset of the HTML canvas 2D API the radar
//! chart needs. Coordinates passed to it are logical pixels; implementations
//! scale them by the device pixel ratio given to [`RenderSurface::configure`].

use nalgebra::Point2;

use crate::error::Result;
use crate::geometry::SurfaceSize;
use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

impl TextBaseline {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// A 2D raster target
pub trait RenderSurface {
    /// Size the backing store for `size` and map logical units onto it
    fn configure(&mut self, size: SurfaceSize) -> Result<()>;

    /// Fill the whole surface with an opaque color
    fn clear(&mut self, color: Color) -> Result<()>;

    fn set_fill_color(&mut self, color: Color) -> Result<()>;
    fn set_stroke_color(&mut self, color: Color) -> Result<()>;
    fn set_line_width(&mut self, width: f64) -> Result<()>;
    fn set_font(&mut self, font: &str) -> Result<()>;
    fn set_text_align(&mut self, align: TextAlign) -> Result<()>;
    fn set_text_baseline(&mut self, baseline: TextBaseline) -> Result<()>;

    fn save(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;

    fn begin_path(&mut self) -> Result<()>;
    fn move_to(&mut self, point: Point2<f64>) -> Result<()>;
    fn line_to(&mut self, point: Point2<f64>) -> Result<()>;
    fn close_path(&mut self) -> Result<()>;
    fn arc(&mut self, center: Point2<f64>, radius: f64, start: f64, end: f64) -> Result<()>;
    fn rect(&mut self, origin: Point2<f64>, width: f64, height: f64) -> Result<()>;

    fn fill(&mut self) -> Result<()>;
    fn stroke(&mut self) -> Result<()>;
    fn fill_text(&mut self, text: &str, anchor: Point2<f64>) -> Result<()>;

    /// Trace a closed polygon through `points` as a new path
    fn polygon(&mut self, points: &[Point2<f64>]) -> Result<()> {
        self.begin_path()?;
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first)?;
            for point in rest {
                self.line_to(*point)?;
            }
        }
        self.close_path()
    }
}

/// One recorded call on a [`CommandRecorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Configure(SurfaceSize),
    Clear(Color),
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    Save,
    Restore,
    BeginPath,
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    ClosePath,
    Arc {
        center: Point2<f64>,
        radius: f64,
        start: f64,
        end: f64,
    },
    Rect {
        origin: Point2<f64>,
        width: f64,
        height: f64,
    },
    Fill,
    Stroke,
    FillText {
        text: String,
        anchor: Point2<f64>,
    },
}

/// Surface that records every call instead of rasterizing it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True if any recorded coordinate is NaN or infinite
    pub fn has_non_finite(&self) -> bool {
        let bad = |p: &Point2<f64>| !(p.x.is_finite() && p.y.is_finite());
        self.commands.iter().any(|c| match c {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => bad(p),
            DrawCommand::Arc { center, radius, .. } => bad(center) || !radius.is_finite(),
            DrawCommand::Rect { origin, .. } => bad(origin),
            DrawCommand::FillText { anchor, .. } => bad(anchor),
            _ => false,
        })
    }

    fn push(&mut self, command: DrawCommand) -> Result<()> {
        self.commands.push(command);
        Ok(())
    }
}

impl RenderSurface for CommandRecorder {
    fn configure(&mut self, size: SurfaceSize) -> Result<()> {
        self.push(DrawCommand::Configure(size))
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.push(DrawCommand::Clear(color))
    }

    fn set_fill_color(&mut self, color: Color) -> Result<()> {
        self.push(DrawCommand::FillColor(color))
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        self.push(DrawCommand::StrokeColor(color))
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.push(DrawCommand::LineWidth(width))
    }

    fn set_font(&mut self, font: &str) -> Result<()> {
        self.push(DrawCommand::Font(font.to_string()))
    }

    fn set_text_align(&mut self, align: TextAlign) -> Result<()> {
        self.push(DrawCommand::TextAlign(align))
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) -> Result<()> {
        self.push(DrawCommand::TextBaseline(baseline))
    }

    fn save(&mut self) -> Result<()> {
        self.push(DrawCommand::Save)
    }

    fn restore(&mut self) -> Result<()> {
        self.push(DrawCommand::Restore)
    }

    fn begin_path(&mut self) -> Result<()> {
        self.push(DrawCommand::BeginPath)
    }

    fn move_to(&mut self, point: Point2<f64>) -> Result<()> {
        self.push(DrawCommand::MoveTo(point))
    }

    fn line_to(&mut self, point: Point2<f64>) -> Result<()> {
        self.push(DrawCommand::LineTo(point))
    }

    fn close_path(&mut self) -> Result<()> {
        self.push(DrawCommand::ClosePath)
    }

    fn arc(&mut self, center: Point2<f64>, radius: f64, start: f64, end: f64) -> Result<()> {
        self.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        })
    }

    fn rect(&mut self, origin: Point2<f64>, width: f64, height: f64) -> Result<()> {
        self.push(DrawCommand::Rect {
            origin,
            width,
            height,
        })
    }

    fn fill(&mut self) -> Result<()> {
        self.push(DrawCommand::Fill)
    }

    fn stroke(&mut self) -> Result<()> {
        self.push(DrawCommand::Stroke)
    }

    fn fill_text(&mut self, text: &str, anchor: Point2<f64>) -> Result<()> {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_path() {
        let mut recorder = CommandRecorder::new();
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        recorder.polygon(&points).unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(points[0]),
                DrawCommand::LineTo(points[1]),
                DrawCommand::LineTo(points[2]),
                DrawCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_non_finite_detection() {
        let mut recorder = CommandRecorder::new();
        recorder.line_to(Point2::new(1.0, 2.0)).unwrap();
        assert!(!recorder.has_non_finite());
        recorder.line_to(Point2::new(f64::NAN, 2.0)).unwrap();
        assert!(recorder.has_non_finite());
    }

    #[test]
    fn test_css_keywords() {
        assert_eq!(TextAlign::Right.as_css(), "right");
        assert_eq!(TextBaseline::Middle.as_css(), "middle");
    }
}
