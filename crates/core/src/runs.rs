//! Text run extraction from slide markup.
//!
//! Slide parts are machine-generated DrawingML, so runs are found with a
//! plain pattern match on `<a:t>...</a:t>` instead of a full XML parse.
//! Anything the pattern does not match is skipped silently.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches one text run. Non-greedy and single-line, like the markup it reads.
static TEXT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a:t>(.*?)</a:t>").unwrap());

/// Matches any tag-like fragment left inside a run.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Matches a single entity or character reference.
static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#[0-9]+|#x[0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);").unwrap());

/// Separator placed between runs of the same slide.
const RUN_SEPARATOR: &str = " ";

/// Pulls text runs out of slide XML.
#[derive(Debug, Clone, Default)]
pub struct TextRunExtractor {
    /// Whether to decode XML entity and character references in run text.
    decode_entities: bool,
}

impl TextRunExtractor {
    /// Create an extractor that returns run text as written in the markup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `&amp;`-style references are decoded in run text.
    pub fn with_entity_decoding(mut self, decode: bool) -> Self {
        self.decode_entities = decode;
        self
    }

    /// Return every text run in document order, with inner tags removed.
    pub fn runs(&self, xml: &str) -> Vec<String> {
        TEXT_RUN_REGEX
            .captures_iter(xml)
            .filter_map(|caps| caps.get(1))
            .map(|m| self.clean_run(m.as_str()))
            .collect()
    }

    /// Return the slide text: all runs joined by a single space.
    ///
    /// A slide without runs yields an empty string.
    pub fn slide_text(&self, xml: &str) -> String {
        self.runs(xml).join(RUN_SEPARATOR)
    }

    fn clean_run(&self, raw: &str) -> String {
        if self.decode_entities {
            // Decode first so escaped markup is still caught by the strip.
            let decoded = decode_references(raw);
            TAG_REGEX.replace_all(&decoded, "").into_owned()
        } else {
            TAG_REGEX.replace_all(raw, "").into_owned()
        }
    }
}

/// Decode each reference on its own. Unknown ones stay as written.
fn decode_references(text: &str) -> Cow<'_, str> {
    ENTITY_REGEX.replace_all(text, |caps: &Captures| {
        let reference = &caps[0];
        match quick_xml::escape::unescape(reference) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                log::debug!("Keeping reference {} undecoded: {}", reference, e);
                reference.to_string()
            }
        }
    })
}
