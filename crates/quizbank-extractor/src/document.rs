//! Flatten a .docx document into normalized text lines
//!
//! A .docx file is a ZIP archive of XML parts; `docx-rs` gives a typed tree:
//!
//! ```text
//! Document → Paragraph → Run → Text | Tab | Break
//! ```
//!
//! Each paragraph becomes one string (soft line breaks rendered as `\n`,
//! tabs as `\t`), which is then split into separate lines.

use crate::error::ExtractorError;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use quizbank_domain::clean_text;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the ordered, normalized, non-empty lines of a .docx document
pub fn read_lines(path: &Path) -> Result<Vec<String>, ExtractorError> {
    if !path.exists() {
        return Err(ExtractorError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| ExtractorError::Docx {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    let lines = split_paragraphs(&paragraphs);
    debug!(
        "{}: {} paragraphs, {} lines",
        path.display(),
        paragraphs.len(),
        lines.len()
    );
    Ok(lines)
}

/// Split paragraph texts on soft line breaks and normalize each chunk.
///
/// Blank paragraphs and chunks that normalize to nothing are dropped; order is
/// preserved.
pub fn split_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    paragraphs
        .iter()
        .map(|p| p.as_ref())
        .filter(|text| !text.trim().is_empty())
        .flat_map(|text| text.split(is_line_boundary))
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Characters that end a line inside a paragraph
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}
