//! Core error and domain types, plus text run extraction,
//! for pulling plain slide text out of PPTX files.

pub mod error;
pub mod runs;
pub mod types;

pub use error::{Error, Result};
pub use runs::TextRunExtractor;
pub use types::{looks_like_zip, sort_entries, ExtractedSlide, SlideEntry};
