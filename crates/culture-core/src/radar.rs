//! Multi-series radar (spider) chart renderer.
//!
//! A render pass is stateless: it validates the data, fits the geometry to
//! the surface and redraws everything from scratch in a fixed layer order
//! (background, grid rings, spokes and labels, series polygons, markers,
//! legend, caption). Invalid input is rejected before the first drawing call.

use std::f64::consts::TAU;

use nalgebra::Point2;

use crate::config::ChartStyle;
use crate::content;
use crate::error::Result;
use crate::geometry::{ChartGeometry, SurfaceSize};
use crate::surface::{RenderSurface, TextAlign, TextBaseline};
use crate::types::ChartData;

/// What one render pass drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub rings: usize,
    pub spokes: usize,
    pub labels: usize,
    pub polygons: usize,
    pub markers: usize,
    pub legend_entries: usize,
    pub caption: bool,
}

pub struct RadarChartRenderer {
    data: ChartData,
    style: ChartStyle,
}

impl RadarChartRenderer {
    pub fn new(data: ChartData, style: ChartStyle) -> Self {
        Self { data, style }
    }

    /// The collaborative vs. hierarchical culture comparison shown on the page
    pub fn culture_comparison(style: ChartStyle) -> Self {
        Self::new(content::culture_chart(), style)
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Validate inputs and compute the geometry without touching a surface
    pub fn prepare(&self, size: SurfaceSize) -> Result<ChartGeometry> {
        self.data.validate()?;
        ChartGeometry::fit(size, self.style.padding, self.style.levels)
    }

    /// Draw the full chart onto `surface`
    pub fn render<S>(&self, surface: &mut S, size: SurfaceSize) -> Result<RenderReport>
    where
        S: RenderSurface + ?Sized,
    {
        let geometry = self.prepare(size)?;

        surface.configure(size)?;
        surface.clear(self.style.background)?;

        let mut report = RenderReport {
            rings: self.draw_grid(surface, &geometry)?,
            ..RenderReport::default()
        };
        (report.spokes, report.labels) = self.draw_axes(surface, &geometry)?;
        report.polygons = self.draw_series(surface, &geometry)?;
        report.markers = self.draw_markers(surface, &geometry)?;
        report.legend_entries = self.draw_legend(surface)?;
        report.caption = self.draw_caption(surface, size)?;

        Ok(report)
    }

    /// Render, logging instead of returning failures.
    ///
    /// Degenerate input is a silent no-op; surface failures leave whatever
    /// was drawn so far and are logged as warnings.
    pub fn render_best_effort<S>(&self, surface: &mut S, size: SurfaceSize) -> Option<RenderReport>
    where
        S: RenderSurface + ?Sized,
    {
        match self.render(surface, size) {
            Ok(report) => {
                tracing::debug!(?report, width = size.width, height = size.height, "radar chart rendered");
                Some(report)
            }
            Err(e) if e.is_degenerate() => {
                tracing::debug!("radar chart skipped: {}", e);
                None
            }
            Err(e) => {
                tracing::warn!("radar chart render aborted: {}", e);
                None
            }
        }
    }

    fn draw_grid<S>(&self, surface: &mut S, geometry: &ChartGeometry) -> Result<usize>
    where
        S: RenderSurface + ?Sized,
    {
        let axes = self.data.axis_count();
        surface.set_stroke_color(self.style.grid_stroke)?;
        surface.set_fill_color(self.style.grid_fill)?;
        surface.set_line_width(self.style.grid_line_width)?;

        // Outermost first so inner rings layer on top
        for level in (1..=geometry.levels).rev() {
            surface.polygon(&geometry.ring_vertices(level, axes))?;
            surface.fill()?;
            surface.stroke()?;
        }

        Ok(geometry.levels)
    }

    fn draw_axes<S>(&self, surface: &mut S, geometry: &ChartGeometry) -> Result<(usize, usize)>
    where
        S: RenderSurface + ?Sized,
    {
        let axes = self.data.axis_count();
        surface.set_stroke_color(self.style.spoke_stroke)?;
        surface.begin_path()?;

        for (i, category) in self.data.categories.iter().enumerate() {
            surface.move_to(geometry.center)?;
            surface.line_to(geometry.spoke_end(i, axes))?;

            surface.save()?;
            surface.set_fill_color(self.style.label_color)?;
            surface.set_font(&self.style.label_font)?;
            surface.set_text_align(TextAlign::Center)?;
            surface.set_text_baseline(TextBaseline::Middle)?;
            surface.fill_text(
                &category.label,
                geometry.label_anchor(i, axes, self.style.label_offset),
            )?;
            surface.restore()?;
        }

        surface.stroke()?;
        Ok((axes, axes))
    }

    fn draw_series<S>(&self, surface: &mut S, geometry: &ChartGeometry) -> Result<usize>
    where
        S: RenderSurface + ?Sized,
    {
        let axes = self.data.axis_count();
        for series in &self.data.series {
            surface.set_fill_color(series.fill_color(self.style.series_fill_alpha))?;
            surface.set_stroke_color(series.stroke_color())?;
            surface.set_line_width(self.style.series_line_width)?;

            surface.polygon(&geometry.polygon(series.clamped_values(), axes))?;
            surface.fill()?;
            surface.stroke()?;
        }
        Ok(self.data.series.len())
    }

    fn draw_markers<S>(&self, surface: &mut S, geometry: &ChartGeometry) -> Result<usize>
    where
        S: RenderSurface + ?Sized,
    {
        let axes = self.data.axis_count();
        let mut markers = 0;
        for series in &self.data.series {
            surface.set_fill_color(series.stroke_color())?;
            for vertex in geometry.polygon(series.clamped_values(), axes) {
                surface.begin_path()?;
                surface.arc(vertex, self.style.marker_radius, 0.0, TAU)?;
                surface.fill()?;
                markers += 1;
            }
        }
        Ok(markers)
    }

    fn draw_legend<S>(&self, surface: &mut S) -> Result<usize>
    where
        S: RenderSurface + ?Sized,
    {
        let style = &self.style;
        let x = style.padding;
        let swatch = style.legend_swatch_size;

        surface.set_font(&style.legend_font)?;
        surface.set_text_align(TextAlign::Left)?;
        surface.set_text_baseline(TextBaseline::Middle)?;

        for (row, series) in self.data.series.iter().enumerate() {
            let y = style.padding + row as f64 * style.legend_row_height;

            surface.set_fill_color(series.stroke_color())?;
            surface.begin_path()?;
            surface.rect(Point2::new(x, y), swatch, swatch)?;
            surface.fill()?;

            surface.set_fill_color(style.label_color)?;
            surface.fill_text(
                &series.name,
                Point2::new(x + style.legend_text_offset, y + swatch / 2.0),
            )?;
        }

        Ok(self.data.series.len())
    }

    fn draw_caption<S>(&self, surface: &mut S, size: SurfaceSize) -> Result<bool>
    where
        S: RenderSurface + ?Sized,
    {
        let Some(caption) = self.data.caption.as_deref() else {
            return Ok(false);
        };

        surface.set_fill_color(self.style.label_color)?;
        surface.set_font(&self.style.caption_font)?;
        surface.set_text_align(TextAlign::Right)?;
        surface.set_text_baseline(TextBaseline::Bottom)?;
        surface.fill_text(
            caption,
            Point2::new(
                size.width - self.style.padding,
                size.height - self.style.caption_bottom_margin,
            ),
        )?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::surface::{CommandRecorder, DrawCommand};
    use crate::types::{Color, Series};

    fn abc_chart(values: Vec<f64>) -> RadarChartRenderer {
        let data = ChartData::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![Series::new("red", Color::rgb(255, 0, 0), values)],
        );
        RadarChartRenderer::new(data, ChartStyle::default())
    }

    struct BrokenSurface {
        inner: CommandRecorder,
        fail_after: usize,
    }

    impl BrokenSurface {
        fn tick(&mut self) -> Result<()> {
            if self.inner.len() >= self.fail_after {
                Err(Error::Surface("context lost".into()))
            } else {
                Ok(())
            }
        }
    }

    macro_rules! forward {
        ($($name:ident($($arg:ident: $ty:ty),*);)*) => {
            $(fn $name(&mut self, $($arg: $ty),*) -> Result<()> {
                self.tick()?;
                self.inner.$name($($arg),*)
            })*
        };
    }

    impl RenderSurface for BrokenSurface {
        forward! {
            configure(size: SurfaceSize);
            clear(color: Color);
            set_fill_color(color: Color);
            set_stroke_color(color: Color);
            set_line_width(width: f64);
            set_font(font: &str);
            set_text_align(align: TextAlign);
            set_text_baseline(baseline: TextBaseline);
            save();
            restore();
            begin_path();
            move_to(point: Point2<f64>);
            line_to(point: Point2<f64>);
            close_path();
            arc(center: Point2<f64>, radius: f64, start: f64, end: f64);
            rect(origin: Point2<f64>, width: f64, height: f64);
            fill();
            stroke();
            fill_text(text: &str, anchor: Point2<f64>);
        }
    }

    #[test]
    fn test_counts_match_input_size() {
        let renderer = RadarChartRenderer::culture_comparison(ChartStyle::default());
        let mut recorder = CommandRecorder::new();
        let report = renderer
            .render(&mut recorder, SurfaceSize::new(640.0, 400.0, 2.0))
            .unwrap();

        assert_eq!(
            report,
            RenderReport {
                rings: 5,
                spokes: 6,
                labels: 6,
                polygons: 2,
                markers: 12,
                legend_entries: 2,
                caption: true,
            }
        );

        // One closed path per ring and per series polygon
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::ClosePath)), 5 + 2);
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::Arc { .. })), 12);
        assert_eq!(recorder.count(|c| matches!(c, DrawCommand::Rect { .. })), 2);
        // Axis labels, legend labels, caption
        assert_eq!(recorder.texts().len(), 6 + 2 + 1);
        assert!(!recorder.has_non_finite());
    }

    #[test]
    fn test_configures_then_clears_first() {
        let renderer = abc_chart(vec![1.0, 0.0, 0.5]);
        let mut recorder = CommandRecorder::new();
        let size = SurfaceSize::new(200.0, 200.0, 3.0);
        renderer.render(&mut recorder, size).unwrap();

        assert_eq!(recorder.commands()[0], DrawCommand::Configure(size));
        assert_eq!(recorder.commands()[1], DrawCommand::Clear(Color::WHITE));
    }

    #[test]
    fn test_markers_at_projected_vertices() {
        let mut style = ChartStyle::default();
        style.padding = 20.0;
        let renderer = RadarChartRenderer::new(abc_chart(vec![1.0, 0.0, 0.5]).data, style);
        let mut recorder = CommandRecorder::new();
        renderer
            .render(&mut recorder, SurfaceSize::logical(200.0, 200.0))
            .unwrap();

        let centers: Vec<Point2<f64>> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { center, radius, .. } => {
                    assert_eq!(*radius, 4.0);
                    Some(*center)
                }
                _ => None,
            })
            .collect();

        assert_eq!(centers.len(), 3);
        assert!((centers[0] - Point2::new(100.0, 20.0)).norm() < 1e-9);
        assert!((centers[1] - Point2::new(100.0, 100.0)).norm() < 1e-9);
        assert!((centers[2].x - 65.36).abs() < 0.01);
        assert!((centers[2].y - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_markers_drawn_after_all_polygons() {
        let renderer = RadarChartRenderer::culture_comparison(ChartStyle::default());
        let mut recorder = CommandRecorder::new();
        renderer
            .render(&mut recorder, SurfaceSize::logical(500.0, 400.0))
            .unwrap();

        let commands = recorder.commands();
        let last_close = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClosePath))
            .unwrap();
        let first_arc = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Arc { .. }))
            .unwrap();
        assert!(first_arc > last_close);
    }

    #[test]
    fn test_labels_in_category_order() {
        let renderer = RadarChartRenderer::culture_comparison(ChartStyle::default());
        let mut recorder = CommandRecorder::new();
        renderer
            .render(&mut recorder, SurfaceSize::logical(500.0, 400.0))
            .unwrap();

        let texts = recorder.texts();
        let labels: Vec<&str> = renderer
            .data()
            .categories
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(&texts[..6], labels.as_slice());
        assert_eq!(texts[6], renderer.data().series[0].name);
        assert_eq!(texts[7], renderer.data().series[1].name);
        assert_eq!(texts[8], "Fonte: MIT Sloan Management Review, 2022");
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = RadarChartRenderer::culture_comparison(ChartStyle::default());
        let size = SurfaceSize::new(720.0, 400.0, 1.5);

        let mut first = CommandRecorder::new();
        let mut second = CommandRecorder::new();
        renderer.render(&mut first, size).unwrap();
        renderer.render(&mut second, size).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_inputs_draw_nothing() {
        let mut recorder = CommandRecorder::new();

        let renderer = abc_chart(vec![1.0, 0.0, 0.5]);
        assert!(matches!(
            renderer.render(&mut recorder, SurfaceSize::logical(0.0, 0.0)),
            Err(Error::EmptySurface { .. })
        ));

        let two_axes = RadarChartRenderer::new(
            ChartData::new(
                vec!["A".into(), "B".into()],
                vec![Series::new("s", Color::WHITE, vec![0.5, 0.5])],
            ),
            ChartStyle::default(),
        );
        assert!(renderer_fails(&two_axes, &mut recorder));

        let short = abc_chart(vec![1.0, 0.0]);
        assert!(renderer_fails(&short, &mut recorder));

        assert!(recorder.is_empty());
    }

    fn renderer_fails(renderer: &RadarChartRenderer, recorder: &mut CommandRecorder) -> bool {
        renderer
            .render(recorder, SurfaceSize::logical(400.0, 400.0))
            .is_err()
            && renderer
                .render_best_effort(recorder, SurfaceSize::logical(400.0, 400.0))
                .is_none()
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let clamped = abc_chart(vec![1.7, -3.0, f64::NAN]);
        let reference = abc_chart(vec![1.0, 0.0, 0.0]);
        let size = SurfaceSize::logical(300.0, 300.0);

        let mut a = CommandRecorder::new();
        let mut b = CommandRecorder::new();
        clamped.render(&mut a, size).unwrap();
        reference.render(&mut b, size).unwrap();

        assert!(!a.has_non_finite());
        assert_eq!(a, b);
    }

    #[test]
    fn test_caption_optional() {
        let renderer = abc_chart(vec![0.2, 0.4, 0.6]);
        let mut recorder = CommandRecorder::new();
        let report = renderer
            .render(&mut recorder, SurfaceSize::logical(300.0, 300.0))
            .unwrap();
        assert!(!report.caption);
        assert_eq!(recorder.texts().len(), 3 + 1);
    }

    #[test]
    fn test_surface_failure_aborts_quietly() {
        let renderer = RadarChartRenderer::culture_comparison(ChartStyle::default());
        let mut surface = BrokenSurface {
            inner: CommandRecorder::new(),
            fail_after: 10,
        };
        let size = SurfaceSize::logical(400.0, 400.0);

        assert_eq!(
            renderer.render(&mut surface, size),
            Err(Error::Surface("context lost".into()))
        );
        assert!(renderer.render_best_effort(&mut surface, size).is_none());
        assert_eq!(surface.inner.len(), 10);
    }
}
