//! 2D canvas backend for the core [`RenderSurface`] trait.

use nalgebra::Point2;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use culture_core::{Color, RenderSurface, SurfaceSize, TextAlign, TextBaseline};

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("2D context not available")]
    ContextUnavailable,

    #[error("getContext(\"2d\") returned a different context type")]
    NotCanvas2d,

    #[error("Canvas call failed: {0}")]
    Js(String),
}

pub type CanvasResult<T> = Result<T, CanvasError>;

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        CanvasError::Js(format!("{:?}", value))
    }
}

impl From<CanvasError> for culture_core::Error {
    fn from(err: CanvasError) -> Self {
        culture_core::Error::Surface(err.to_string())
    }
}

fn js(value: JsValue) -> culture_core::Error {
    CanvasError::from(value).into()
}

/// Canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> CanvasResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(CanvasError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NotCanvas2d)?;

        Ok(Self {
            canvas,
            ctx,
            size: SurfaceSize::logical(0.0, 0.0),
        })
    }

    /// Displayed size of the canvas in CSS pixels at `device_pixel_ratio`
    pub fn measure(&self, device_pixel_ratio: f64) -> SurfaceSize {
        let rect = self.canvas.get_bounding_client_rect();
        SurfaceSize::new(rect.width(), rect.height(), device_pixel_ratio)
    }
}

impl RenderSurface for CanvasSurface {
    fn configure(&mut self, size: SurfaceSize) -> culture_core::Result<()> {
        self.canvas.set_width(size.backing_width());
        self.canvas.set_height(size.backing_height());

        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", size.width))
            .map_err(js)?;
        style
            .set_property("height", &format!("{}px", size.height))
            .map_err(js)?;

        // Resizing resets the context, so the scale is set absolutely
        let dpr = size.device_pixel_ratio;
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(js)?;

        self.size = size;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> culture_core::Result<()> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.size.width, self.size.height);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> culture_core::Result<()> {
        self.ctx.set_fill_style_str(&color.to_css());
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> culture_core::Result<()> {
        self.ctx.set_stroke_style_str(&color.to_css());
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> culture_core::Result<()> {
        self.ctx.set_line_width(width);
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> culture_core::Result<()> {
        self.ctx.set_font(font);
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) -> culture_core::Result<()> {
        self.ctx.set_text_align(align.as_css());
        Ok(())
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) -> culture_core::Result<()> {
        self.ctx.set_text_baseline(baseline.as_css());
        Ok(())
    }

    fn save(&mut self) -> culture_core::Result<()> {
        self.ctx.save();
        Ok(())
    }

    fn restore(&mut self) -> culture_core::Result<()> {
        self.ctx.restore();
        Ok(())
    }

    fn begin_path(&mut self) -> culture_core::Result<()> {
        self.ctx.begin_path();
        Ok(())
    }

    fn move_to(&mut self, point: Point2<f64>) -> culture_core::Result<()> {
        self.ctx.move_to(point.x, point.y);
        Ok(())
    }

    fn line_to(&mut self, point: Point2<f64>) -> culture_core::Result<()> {
        self.ctx.line_to(point.x, point.y);
        Ok(())
    }

    fn close_path(&mut self) -> culture_core::Result<()> {
        self.ctx.close_path();
        Ok(())
    }

    fn arc(
        &mut self,
        center: Point2<f64>,
        radius: f64,
        start: f64,
        end: f64,
    ) -> culture_core::Result<()> {
        self.ctx
            .arc(center.x, center.y, radius, start, end)
            .map_err(js)
    }

    fn rect(&mut self, origin: Point2<f64>, width: f64, height: f64) -> culture_core::Result<()> {
        self.ctx.rect(origin.x, origin.y, width, height);
        Ok(())
    }

    fn fill(&mut self) -> culture_core::Result<()> {
        self.ctx.fill();
        Ok(())
    }

    fn stroke(&mut self) -> culture_core::Result<()> {
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, anchor: Point2<f64>) -> culture_core::Result<()> {
        self.ctx.fill_text(text, anchor.x, anchor.y).map_err(js)
    }
}
