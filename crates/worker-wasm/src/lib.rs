//! WASM-compatible wrapper for PPTX slide text extraction.
//!
//! This crate exposes slide text extraction to JavaScript hosts, such as a
//! browser page handling a user-selected file or a Cloudflare Worker.

use serde::Serialize;
use slide_text_core::ExtractedSlide;
use slide_text_pptx::SlideTextExtractor;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A single slide as handed to JavaScript.
#[derive(Debug, Serialize)]
pub struct SlideResult {
    /// Slide number parsed from the part name (0 if it had none).
    pub number: usize,
    /// Archive entry the text came from.
    pub part: String,
    /// Space-joined text runs of the slide.
    pub text: String,
}

impl From<ExtractedSlide> for SlideResult {
    fn from(slide: ExtractedSlide) -> Self {
        Self {
            number: slide.index,
            part: slide.name,
            text: slide.text,
        }
    }
}

/// Extract the text of every slide in a PPTX file.
///
/// # Arguments
/// * `data` - The raw bytes of the PPTX file
///
/// # Returns
/// A JavaScript array of strings in slide order, or throws on error.
#[wasm_bindgen(js_name = extractSlideTexts)]
pub fn extract_slide_texts(data: &[u8]) -> Result<JsValue, JsValue> {
    let texts = slide_texts_impl(data).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&texts)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Extract slides with their part names and numbers.
#[wasm_bindgen(js_name = extractSlides)]
pub fn extract_slides(data: &[u8]) -> Result<JsValue, JsValue> {
    let slides = slides_impl(data).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn slide_texts_impl(data: &[u8]) -> Result<Vec<String>, String> {
    SlideTextExtractor::new()
        .extract(data)
        .map_err(|e| e.to_string())
}

fn slides_impl(data: &[u8]) -> Result<Vec<SlideResult>, String> {
    let slides = SlideTextExtractor::new()
        .extract_slides(data)
        .map_err(|e| e.to_string())?;

    Ok(slides.into_iter().map(SlideResult::from).collect())
}
