//! Page components.

pub mod home;

pub use home::Home;
