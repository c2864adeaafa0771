//! Text Chunker — splits extracted resume text into ordered, roughly
//! fixed-size, sentence-boundary-aware segments.
//!
//! Chunks are strictly contiguous: concatenating them (modulo boundary
//! whitespace trimming) reconstructs the input with no character loss or
//! reordering.

use serde::Serialize;

/// An ordered segment of resume text. Immutable once created; lives only
/// for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chunk {
    pub text: String,
    /// Position in the source text (0-based).
    pub index: usize,
}

/// Chunk-size tiers: shorter text gets smaller chunks.
///
/// Thresholds and targets follow the pipeline defaults of 500 / 1000 / 1200
/// characters at 2k / 10k total-length boundaries.
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    pub short_text_threshold: usize,
    pub long_text_threshold: usize,
    pub small_target: usize,
    pub medium_target: usize,
    pub large_target: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        ChunkerConfig {
            short_text_threshold: 2_000,
            long_text_threshold: 10_000,
            small_target: 500,
            medium_target: 1_000,
            large_target: 1_200,
        }
    }
}

impl ChunkerConfig {
    /// Target chunk length for a text of the given total length.
    pub fn target_for_len(&self, len: usize) -> usize {
        if len < self.short_text_threshold {
            self.small_target
        } else if len < self.long_text_threshold {
            self.medium_target
        } else {
            self.large_target
        }
    }
}

/// Break patterns searched near a chunk boundary, in priority order.
/// Paragraph breaks beat line breaks beat sentence-ending punctuation.
const BREAK_PATTERNS: &[&str] = &["\n\n", "\n", ". ", "! ", "? ", "; "];

/// Splits `text` into ordered chunks near the tier target length, preferring
/// sentence or paragraph boundaries in the back half of each window and
/// falling back to whitespace. Splits mid-word only when a window contains
/// no break point at all.
///
/// Non-empty input always yields at least one chunk; input shorter than one
/// target yields exactly one.
pub fn chunk_text(text: &str, cfg: &ChunkerConfig) -> Vec<Chunk> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let total_len = text.len();
    let target = cfg.target_for_len(total_len);

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < total_len {
        let mut end = start + target;
        if end >= total_len {
            push_chunk(&mut chunks, &text[start..]);
            break;
        }
        // Snap to a char boundary so the window is a valid slice
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let split = find_break(&text[start..end], target).map(|rel| start + rel);
        let split = split.unwrap_or(end);

        push_chunk(&mut chunks, &text[start..split]);
        start = split;
    }

    chunks
}

/// Finds the byte offset (relative to `window`) just past the best break
/// point in the back half of the window, or `None` when the window holds no
/// break point.
fn find_break(window: &str, target: usize) -> Option<usize> {
    // Don't break before half a chunk — keeps segments near the target
    let floor = target / 2;

    for pattern in BREAK_PATTERNS {
        if let Some(pos) = window.rfind(pattern) {
            if pos > floor {
                return Some(pos + pattern.len());
            }
        }
    }

    // Whitespace fallback: avoid severing a word
    if let Some(pos) = window.rfind(char::is_whitespace) {
        if pos > floor {
            // A whitespace char found via rfind starts at a char boundary;
            // advance past it
            let ws_len = window[pos..].chars().next().map(char::len_utf8)?;
            return Some(pos + ws_len);
        }
    }

    None
}

fn push_chunk(chunks: &mut Vec<Chunk>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        chunks.push(Chunk {
            text: trimmed.to_string(),
            index: chunks.len(),
        });
    }
}
