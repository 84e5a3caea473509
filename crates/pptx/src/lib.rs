//! PPTX (Office Open XML) slide text extraction.
//!
//! Opens a .pptx ZIP archive, reads its slide parts in slide-number order
//! and returns the plain text of each slide.

pub mod parser;

pub use parser::{
    extract_slide_texts, extract_slide_texts_from_path, extract_slide_texts_from_reader,
    SlideTextExtractor,
};
