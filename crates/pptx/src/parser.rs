//! PPTX archive reader implementation.

use slide_text_core::types::sort_entries;
use slide_text_core::{Error, ExtractedSlide, Result, SlideEntry, TextRunExtractor};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Extracts the text of every slide in a PPTX archive.
#[derive(Debug, Clone, Default)]
pub struct SlideTextExtractor {
    runs: TextRunExtractor,
}

impl SlideTextExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether XML entity references in run text are decoded.
    pub fn with_entity_decoding(mut self, decode: bool) -> Self {
        self.runs = self.runs.with_entity_decoding(decode);
        self
    }

    /// Extract one text string per slide, in slide-number order.
    pub fn extract(&self, data: &[u8]) -> Result<Vec<String>> {
        Ok(self
            .extract_slides(data)?
            .into_iter()
            .map(|slide| slide.text)
            .collect())
    }

    /// Extract slide texts from any reader. The source is read fully first.
    pub fn extract_from_reader<R: Read>(&self, reader: R) -> Result<Vec<String>> {
        let data = read_source(reader)?;
        self.extract(&data)
    }

    /// Extract slide texts from a file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let data = std::fs::read(path)?;
        self.extract(&data)
    }

    /// Extract slides together with the entry name and number each came from.
    ///
    /// Fails with [`Error::CorruptArchive`] when the bytes are not a ZIP
    /// archive or a slide part is not valid UTF-8. An archive without slide
    /// parts gives an empty list.
    pub fn extract_slides(&self, data: &[u8]) -> Result<Vec<ExtractedSlide>> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            log::debug!("Failed to open ZIP: {}", e);
            Error::CorruptArchive
        })?;

        let entries = slide_entries(&mut archive)?;
        log::debug!("Found {} slide parts", entries.len());

        let mut slides = Vec::with_capacity(entries.len());
        for entry in entries {
            let xml = read_entry_text(&mut archive, &entry)?;
            let text = self.runs.slide_text(&xml);
            slides.push(ExtractedSlide::new(entry, text));
        }

        Ok(slides)
    }
}

/// Extract one text string per slide with default settings.
pub fn extract_slide_texts(data: &[u8]) -> Result<Vec<String>> {
    SlideTextExtractor::new().extract(data)
}

/// Read a source fully and extract its slide texts with default settings.
pub fn extract_slide_texts_from_reader<R: Read>(reader: R) -> Result<Vec<String>> {
    SlideTextExtractor::new().extract_from_reader(reader)
}

/// Read a file and extract its slide texts with default settings.
pub fn extract_slide_texts_from_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    SlideTextExtractor::new().extract_from_path(path)
}

fn read_source<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

/// Collect the slide parts of an archive, sorted by slide number.
///
/// Entries are walked in central directory order so that slides sharing a
/// number always come out in the same order.
fn slide_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<SlideEntry>> {
    let mut entries = Vec::new();
    for position in 0..archive.len() {
        let file = archive.by_index_raw(position).map_err(|e| {
            log::debug!("Failed to read central directory entry {}: {}", position, e);
            Error::CorruptArchive
        })?;
        if let Some(entry) = SlideEntry::from_name(file.name(), position) {
            entries.push(entry);
        }
    }
    sort_entries(&mut entries);
    Ok(entries)
}

/// Read a slide part from the archive as UTF-8 text.
fn read_entry_text<R: Read + Seek>(archive: &mut ZipArchive<R>, entry: &SlideEntry) -> Result<String> {
    let name = entry.name.as_str();
    let mut file = archive.by_index(entry.position).map_err(|e| {
        log::debug!("Failed to open '{}': {}", name, e);
        Error::CorruptArchive
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content).map_err(|e| {
        log::debug!("Failed to read '{}': {}", name, e);
        Error::CorruptArchive
    })?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn build_archive(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_slide_entries_are_filtered_and_sorted() {
        let data = build_archive(&[
            ("[Content_Types].xml", "<Types/>".as_bytes()),
            ("ppt/slides/slide2.xml", "<a:t>two</a:t>".as_bytes()),
            ("ppt/slides/_rels/slide2.xml.rels", "<Relationships/>".as_bytes()),
            ("ppt/slides/slide10.xml", "<a:t>ten</a:t>".as_bytes()),
            ("ppt/slideLayouts/slideLayout1.xml", "<a:t>layout</a:t>".as_bytes()),
            ("ppt/slides/slide1.xml", "<a:t>one</a:t>".as_bytes()),
        ]);
        let mut archive = ZipArchive::new(Cursor::new(data.as_slice())).unwrap();

        let names: Vec<String> = slide_entries(&mut archive)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "ppt/slides/slide1.xml",
                "ppt/slides/slide2.xml",
                "ppt/slides/slide10.xml",
            ]
        );
    }

    #[test]
    fn test_extract_slides_carries_entry_metadata() {
        let data = build_archive(&[("ppt/slides/slide3.xml", "<a:t>Hi</a:t>".as_bytes())]);

        let slides = SlideTextExtractor::new().extract_slides(&data).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].name, "ppt/slides/slide3.xml");
        assert_eq!(slides[0].index, 3);
        assert_eq!(slides[0].text, "Hi");
    }

    #[test]
    fn test_invalid_utf8_slide_is_corrupt() {
        let data = build_archive(&[
            ("ppt/slides/slide1.xml", "<a:t>fine</a:t>".as_bytes()),
            ("ppt/slides/slide2.xml", b"<\xFF\xFE>".as_slice()),
        ]);

        let err = extract_slide_texts(&data).unwrap_err();
        assert!(matches!(err, Error::CorruptArchive));
    }

    #[test]
    fn test_reader_failure_is_read_error() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
            }
        }

        let err = extract_slide_texts_from_reader(FailingReader).unwrap_err();
        assert!(matches!(err, Error::Read(_)));
    }

    #[test]
    fn test_missing_path_is_read_error() {
        let err = extract_slide_texts_from_path("/definitely/not/here.pptx").unwrap_err();
        assert!(err.is_read());
    }

    #[test]
    fn test_entity_decoding_setting_is_forwarded() {
        let data = build_archive(&[("ppt/slides/slide1.xml", "<a:t>A &amp; B</a:t>".as_bytes())]);

        let raw = SlideTextExtractor::new().extract(&data).unwrap();
        let decoded = SlideTextExtractor::new()
            .with_entity_decoding(true)
            .extract(&data)
            .unwrap();

        assert_eq!(raw, vec!["A &amp; B"]);
        assert_eq!(decoded, vec!["A & B"]);
    }

    #[test]
    fn test_tied_numbers_keep_central_directory_order() {
        let data = build_archive(&[
            ("ppt/slides/slideF.xml", "<a:t>F</a:t>".as_bytes()),
            ("ppt/slides/slide1.xml", "<a:t>one</a:t>".as_bytes()),
            ("ppt/slides/slideA.xml", "<a:t>A</a:t>".as_bytes()),
            ("ppt/slides/slide01.xml", "<a:t>zero-one</a:t>".as_bytes()),
            ("ppt/slides/slideC.xml", "<a:t>C</a:t>".as_bytes()),
        ]);
        let mut archive = ZipArchive::new(Cursor::new(data.as_slice())).unwrap();

        let entries = slide_entries(&mut archive).unwrap();
        let positions: Vec<(usize, usize)> = entries.iter().map(|e| (e.index, e.position)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 2), (0, 4), (1, 1), (1, 3)]);
    }
}
