//! The administrator's operations manual, rendered to PDF.

pub mod book;
pub mod chapters;
pub mod error;
pub mod fonts;
pub mod manual;
pub mod render;

pub use error::ManualError;
pub use manual::{generate_manual, layout_manual, MANUAL_FILENAME};
