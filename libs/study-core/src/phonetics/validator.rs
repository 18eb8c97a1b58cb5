//! Fuzzy validation of submitted zhuyin transcriptions against a
//! character's canonical readings.

use super::lookup::{CharacterEntry, ReadingLookup};
use super::{similarity, strip_tones};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Verdict on one submitted transcription.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_correct: bool,
    /// Canonical reading the input was matched against, absent when the
    /// character had no candidates at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_reading: Option<String>,
    /// 1.0 exact, 0.8 tone-stripped, otherwise the best similarity score.
    pub confidence: f64,
}

impl Validation {
    fn unverifiable() -> Self {
        Self {
            is_correct: false,
            matched_reading: None,
            confidence: 0.0,
        }
    }
}

/// Unbounded per-character cache of lookup results.
///
/// Entries never expire within a process lifetime. Failed lookups are
/// cached too; the collaborator's responses are idempotent.
pub struct ReadingCache {
    entries: RwLock<HashMap<String, Option<CharacterEntry>>>,
}

impl Default for ReadingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Outer `None`: never looked up. Inner `None`: looked up, no entry.
    pub async fn get(&self, character: &str) -> Option<Option<CharacterEntry>> {
        self.entries.read().await.get(character).cloned()
    }

    pub async fn insert(&self, character: &str, entry: Option<CharacterEntry>) {
        self.entries
            .write()
            .await
            .insert(character.to_string(), entry);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Similarity above which a fuzzy match still counts as correct.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Confidence assigned to a tone-stripped (rather than exact) match.
pub const TONELESS_CONFIDENCE: f64 = 0.8;

/// Validates phonetic transcriptions via an injected lookup collaborator,
/// memoizing lookups in an owned [`ReadingCache`].
pub struct PhoneticValidator<L> {
    lookup: L,
    cache: ReadingCache,
}

impl<L: ReadingLookup> PhoneticValidator<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: ReadingCache::new(),
        }
    }

    pub fn cache(&self) -> &ReadingCache {
        &self.cache
    }

    async fn readings_for(&self, character: &str) -> Option<CharacterEntry> {
        if let Some(cached) = self.cache.get(character).await {
            tracing::debug!(character, "reading cache hit");
            return cached;
        }

        // Concurrent first-time lookups of the same character are not
        // deduplicated; both fetch and both insert the same result.
        let fetched = self.lookup.fetch_readings(character).await;
        self.cache.insert(character, fetched.clone()).await;
        fetched
    }

    /// Judge `input` against the character's canonical readings.
    ///
    /// Never fails: a lookup error or unknown character yields the
    /// lowest-confidence incorrect verdict.
    pub async fn validate(&self, character: &str, input: &str) -> Validation {
        let input = input.trim();

        let candidates: Vec<String> = match self.readings_for(character).await {
            Some(entry) => entry.readings.into_iter().map(|r| r.phonetic).collect(),
            None => Vec::new(),
        };
        if candidates.is_empty() {
            tracing::warn!(character, "no candidate readings, answer unverifiable");
            return Validation::unverifiable();
        }

        if candidates.iter().any(|c| c == input) {
            return Validation {
                is_correct: true,
                matched_reading: Some(input.to_string()),
                confidence: 1.0,
            };
        }

        let stripped = strip_tones(input);
        if let Some(candidate) = candidates.iter().find(|c| strip_tones(c) == stripped) {
            return Validation {
                is_correct: true,
                matched_reading: Some(candidate.clone()),
                confidence: TONELESS_CONFIDENCE,
            };
        }

        // Arg-max over candidates; ties keep the earliest candidate.
        let mut best = &candidates[0];
        let mut best_score = similarity(input, best);
        for candidate in &candidates[1..] {
            let score = similarity(input, candidate);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }

        Validation {
            is_correct: best_score > SIMILARITY_THRESHOLD,
            matched_reading: Some(best.clone()),
            confidence: best_score,
        }
    }
}
