//! # Culture-Core
//!
//! Core types and logic for the organizational culture presentation site:
//! chart data, radar geometry and rendering against an abstract raster
//! surface, plus the pure scroll/visibility/animation helpers the frontend
//! drives from browser events.

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod radar;
pub mod scrollspy;
pub mod surface;
pub mod types;
pub mod visibility;

pub use animation::*;
pub use config::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use radar::*;
pub use scrollspy::*;
pub use surface::*;
pub use types::*;
pub use visibility::*;
