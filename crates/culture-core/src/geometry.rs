//! Polar layout of the radar chart.
//!
//! All coordinates are logical (CSS) pixels with the y axis pointing down,
//! so increasing angles run clockwise on screen and category 0 sits at
//! `-π/2`, straight above the center.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::clamp_unit;

/// Logical size of a raster target plus its device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: normalize_pixel_ratio(device_pixel_ratio),
        }
    }

    pub fn logical(width: f64, height: f64) -> Self {
        Self::new(width, height, 1.0)
    }

    /// True when there is nothing to draw on
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Backing store width in device pixels
    pub fn backing_width(&self) -> u32 {
        (self.width * self.device_pixel_ratio) as u32
    }

    /// Backing store height in device pixels
    pub fn backing_height(&self) -> u32 {
        (self.height * self.device_pixel_ratio) as u32
    }
}

/// Missing, non-finite or sub-unit ratios fall back to 1
pub fn normalize_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio >= 1.0 {
        ratio
    } else {
        1.0
    }
}

/// Angle of axis `index` out of `axes`, in radians
pub fn axis_angle(index: usize, axes: usize) -> f64 {
    -FRAC_PI_2 + index as f64 * TAU / axes as f64
}

/// Unit vector along axis `index`
pub fn axis_direction(index: usize, axes: usize) -> Vector2<f64> {
    let (sin, cos) = axis_angle(index, axes).sin_cos();
    Vector2::new(cos, sin)
}

/// Center, outer radius and ring count for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center: Point2<f64>,
    pub outer_radius: f64,
    pub levels: usize,
}

impl ChartGeometry {
    pub fn new(center: Point2<f64>, outer_radius: f64, levels: usize) -> Self {
        Self {
            center,
            outer_radius,
            levels,
        }
    }

    /// Fit the chart inside `size` minus `padding` on every side
    pub fn fit(size: SurfaceSize, padding: f64, levels: usize) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }
        if levels == 0 {
            return Err(Error::Config("radar chart needs at least one ring level".into()));
        }

        let usable_width = size.width - padding * 2.0;
        let usable_height = size.height - padding * 2.0;
        let outer_radius = usable_width.min(usable_height) / 2.0;
        if !(outer_radius.is_finite() && outer_radius > 0.0) {
            return Err(Error::DegenerateGeometry {
                radius: outer_radius,
            });
        }

        Ok(Self::new(
            Point2::new(size.width / 2.0, size.height / 2.0),
            outer_radius,
            levels,
        ))
    }

    /// Point at `distance` from the center along axis `index`
    pub fn polar(&self, index: usize, axes: usize, distance: f64) -> Point2<f64> {
        self.center + axis_direction(index, axes) * distance
    }

    /// Vertex for `value` on axis `index`; the value is clamped into [0, 1]
    pub fn project(&self, index: usize, axes: usize, value: f64) -> Point2<f64> {
        self.polar(index, axes, self.outer_radius * clamp_unit(value))
    }

    /// Radius of ring `level` (1 = innermost, `levels` = outer ring)
    pub fn ring_radius(&self, level: usize) -> f64 {
        self.outer_radius * level as f64 / self.levels as f64
    }

    /// Corners of the regular polygon for ring `level`
    pub fn ring_vertices(&self, level: usize, axes: usize) -> Vec<Point2<f64>> {
        let radius = self.ring_radius(level);
        (0..axes).map(|i| self.polar(i, axes, radius)).collect()
    }

    /// Outer end of the spoke for axis `index`
    pub fn spoke_end(&self, index: usize, axes: usize) -> Point2<f64> {
        self.polar(index, axes, self.outer_radius)
    }

    /// Where the axis label goes, `offset` pixels beyond the outer ring
    pub fn label_anchor(&self, index: usize, axes: usize, offset: f64) -> Point2<f64> {
        self.polar(index, axes, self.outer_radius + offset)
    }

    /// Polygon vertices for a full series, in category order
    pub fn polygon(&self, values: impl IntoIterator<Item = f64>, axes: usize) -> Vec<Point2<f64>> {
        values
            .into_iter()
            .take(axes)
            .enumerate()
            .map(|(i, v)| self.project(i, axes, v))
            .collect()
    }
}
