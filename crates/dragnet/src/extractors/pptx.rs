//! Presentation (PPTX) extraction.
//!
//! A PPTX package is a zip archive with one XML part per slide under
//! `ppt/slides/`. Slides are visited in ascending slide-number order and
//! shapes (`<p:sp>` subtrees) in document order within a slide; each
//! shape's accumulated `<a:t>` run text is searched as one unit, and the
//! first matching shape ends the search.
use std::fs::File;
use std::io::Read;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

pub struct PptxExtractor;

impl TextExtractor for PptxExtractor {
    fn name(&self) -> &'static str {
        "pptx"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let file = File::open(&target.path)?;
        let mut archive = ZipArchive::new(file)?;

        for name in slide_parts_in_order(&archive) {
            let mut xml = String::new();
            {
                let mut entry = archive.by_name(&name)?;
                let mut bytes = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut bytes)?;
                xml.push_str(&String::from_utf8_lossy(&bytes));
            }

            if let Some(found) = search_slide_xml(&xml, pattern)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

/// Slide part names sorted by slide number, so `slide2` precedes
/// `slide10` regardless of archive entry order.
fn slide_parts_in_order<R: Read + std::io::Seek>(archive: &ZipArchive<R>) -> Vec<String> {
    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let digits = name.strip_prefix(SLIDE_PREFIX)?.strip_suffix(SLIDE_SUFFIX)?;
            let number: u32 = digits.parse().ok()?;
            Some((number, name.to_owned()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);
    slides.into_iter().map(|(_, name)| name).collect()
}

/// Walk one slide's XML, searching shape by shape.
fn search_slide_xml(
    xml: &str,
    pattern: &KeywordPattern,
) -> Result<Option<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut shape_depth = 0usize;
    let mut in_text_run = false;
    let mut shape_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"sp" => shape_depth += 1,
                b"t" if shape_depth > 0 => in_text_run = true,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                shape_text.push_str(&String::from_utf8_lossy(t.as_ref()));
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                // Paragraph boundaries within a shape separate lines.
                b"p" if shape_depth > 0 => shape_text.push('\n'),
                b"sp" => {
                    shape_depth = shape_depth.saturating_sub(1);
                    if shape_depth == 0 {
                        if let Some(found) = pattern.find(&shape_text) {
                            return Ok(Some(found.to_owned()));
                        }
                        shape_text.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::parse(format!(
                    "slide XML parsing error: {e}"
                )));
            }
            _ => {}
        }
    }

    Ok(None)
}
