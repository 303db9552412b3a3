//! Reusable page components.

pub mod animated_counter;
pub mod culture_chart;
pub mod floating_elements;
pub mod gradient_card;
pub mod navbar;
pub mod section;

pub use animated_counter::{AnimatedCounter, StatCounter};
pub use culture_chart::CultureChart;
pub use floating_elements::FloatingElements;
pub use gradient_card::GradientCard;
pub use navbar::NavBar;
pub use section::{Reveal, RevealFrom, SectionWrapper};
