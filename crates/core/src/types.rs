//! Domain types for slide parts and the text extracted from them.

use serde::Serialize;

/// Archive path prefix shared by all slide parts.
pub const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Extension of a slide part.
pub const SLIDE_SUFFIX: &str = ".xml";

/// ZIP local file header signature (PK\x03\x04).
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Check whether a buffer starts with the ZIP local file header signature.
///
/// This is only a hint for callers that want to warn early; opening the
/// archive is what decides whether the bytes are usable.
pub fn looks_like_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(&ZIP_MAGIC)
}

/// An archive entry holding one slide's markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEntry {
    /// Full entry name inside the archive, e.g. `ppt/slides/slide3.xml`.
    pub name: String,

    /// Slide number parsed from the name. 0 when the name carries no usable number.
    pub index: usize,

    /// Position of the entry in the archive's central directory.
    pub position: usize,
}

impl SlideEntry {
    /// Build a slide entry from an archive entry name and its position in
    /// the central directory.
    ///
    /// Returns `None` for entries outside `ppt/slides/` or without the `.xml`
    /// extension. Names that match but have no parsable number get index 0.
    pub fn from_name(name: &str, position: usize) -> Option<Self> {
        if !name.starts_with(SLIDE_PREFIX) || !name.ends_with(SLIDE_SUFFIX) {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            index: extract_slide_number(name).unwrap_or(0),
            position,
        })
    }
}

/// Sort slide entries by slide number, keeping archive order for ties.
pub fn sort_entries(entries: &mut [SlideEntry]) {
    entries.sort_by_key(|e| (e.index, e.position));
}

/// Text recovered from a single slide part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSlide {
    /// Entry name the text came from.
    pub name: String,

    /// Slide number parsed from the entry name.
    pub index: usize,

    /// All text runs of the slide joined by single spaces.
    pub text: String,
}

impl ExtractedSlide {
    /// Create a slide result for an entry.
    pub fn new(entry: SlideEntry, text: impl Into<String>) -> Self {
        Self {
            name: entry.name,
            index: entry.index,
            text: text.into(),
        }
    }
}

/// Extract the number right before the extension, as in "slide12.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.strip_suffix(SLIDE_SUFFIX).unwrap_or(s);

    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    s[start..].parse().ok()
}
