//! PDF text extraction — thin wrapper over `pdf-extract` with whitespace
//! normalization and a minimum-content check for image-only PDFs.

use crate::errors::AppError;

/// Extraction below this many characters means the PDF is effectively
/// image-only or empty.
const MIN_EXTRACTED_CHARS: usize = 50;

/// Extracts and normalizes resume text from raw PDF bytes.
///
/// Fails with `AppError::Extraction` for unreadable PDFs and for PDFs with
/// no meaningful extractable text (scanned/image-only resumes).
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))?;

    let text = clean_text(&raw);

    if text.len() < MIN_EXTRACTED_CHARS {
        return Err(AppError::Extraction(
            "the PDF contains insufficient extractable text; ensure it is not image-only"
                .to_string(),
        ));
    }

    Ok(text)
}

/// Collapses runs of newlines to one newline and runs of spaces/tabs to a
/// single space, then trims.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_newline = false;
    let mut pending_space = false;

    for c in text.chars() {
        match c {
            '\n' | '\r' => {
                pending_newline = true;
                pending_space = false;
            }
            ' ' | '\t' => {
                if !pending_newline {
                    pending_space = true;
                }
            }
            _ => {
                if pending_newline {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    pending_newline = false;
                } else if pending_space {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }

    out
}
