//! Relevance Scorer — ranks resume chunks against a job description by
//! lexical overlap and returns the top-K.
//!
//! This is a deliberate substitute for embedding-based semantic search:
//! a single-pass Jaccard-style coefficient over keyword sets. The LLM does
//! the actual reasoning downstream; this only filters chunks.

use std::collections::HashSet;

use crate::questions::chunker::Chunk;

/// Words carrying no signal for overlap scoring.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

/// Selection thresholds for the scorer.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of chunks to keep.
    pub top_k: usize,
    /// Minimum keyword length; shorter tokens are noise.
    pub min_token_len: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            top_k: 5,
            min_token_len: 4,
        }
    }
}

/// A chunk paired with its relevance score. Transient — discarded after
/// selection.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f64,
}

/// Extracts the set of lowercase alphabetic keywords of at least
/// `min_token_len` characters, minus stopwords.
pub fn extract_keywords(text: &str, min_token_len: usize) -> HashSet<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| w.len() >= min_token_len)
        .map(str::to_lowercase)
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Jaccard coefficient (|∩| / |∪|) between the chunk and JD keyword sets,
/// plus a coverage bonus of 0.3 × |∩| / |JD| when anything overlaps.
/// Capped at 1.0.
pub fn score_chunk(chunk_keywords: &HashSet<String>, jd_keywords: &HashSet<String>) -> f64 {
    if jd_keywords.is_empty() || chunk_keywords.is_empty() {
        return 0.0;
    }

    let overlap = chunk_keywords.intersection(jd_keywords).count();
    let union = chunk_keywords.union(jd_keywords).count();

    if union == 0 {
        return 0.0;
    }

    let mut score = overlap as f64 / union as f64;
    if overlap > 0 {
        score += (overlap as f64 / jd_keywords.len() as f64) * 0.3;
    }

    score.min(1.0)
}

/// Returns the top-K chunks by descending relevance to the job description,
/// ties broken by original position (earlier chunk wins).
///
/// When the JD yields no keywords, or there are no more chunks than K, the
/// chunks are returned in original order, unscored.
pub fn select_relevant_chunks(
    chunks: Vec<Chunk>,
    job_description: &str,
    cfg: &SelectorConfig,
) -> Vec<Chunk> {
    if chunks.len() <= cfg.top_k {
        return chunks;
    }

    let jd_keywords = extract_keywords(job_description, cfg.min_token_len);
    if jd_keywords.is_empty() {
        tracing::warn!("no keywords extracted from job description, returning leading chunks");
        return chunks.into_iter().take(cfg.top_k).collect();
    }

    let mut scored: Vec<ScoredChunk> = chunks
        .into_iter()
        .map(|chunk| {
            let keywords = extract_keywords(&chunk.text, cfg.min_token_len);
            let score = score_chunk(&keywords, &jd_keywords);
            ScoredChunk { chunk, score }
        })
        .collect();

    // Descending score; equal scores keep source order (earlier index wins)
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.chunk.index.cmp(&b.chunk.index))
    });

    scored
        .into_iter()
        .take(cfg.top_k)
        .map(|s| s.chunk)
        .collect()
}
