//! Heteronym reading lookup for single characters.

use crate::error::LookupError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One dictionary definition attached to a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub gloss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

/// One candidate reading of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Zhuyin transcription, e.g. "ㄇㄚˇ".
    pub phonetic: String,
    /// Romanized pronunciation, e.g. "mǎ".
    pub pronunciation_latin: String,
    pub definitions: Vec<Definition>,
}

/// All readings known for one character. Heteronyms yield more than one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEntry {
    pub readings: Vec<Reading>,
}

/// Lookup collaborator returning heteronym readings for a single character.
///
/// Implementations resolve every failure (network error, not-found,
/// malformed payload) to `None` instead of erroring, so callers always get
/// a definite answer.
#[async_trait]
pub trait ReadingLookup: Send + Sync {
    async fn fetch_readings(&self, character: &str) -> Option<CharacterEntry>;
}

const MOEDICT_BASE_URL: &str = "https://www.moedict.tw/uni";

/// Reading lookup backed by the moedict.tw dictionary API.
pub struct MoedictClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for MoedictClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MoedictClient {
    pub fn new() -> Self {
        Self::with_base_url(MOEDICT_BASE_URL)
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_entry(&self, character: &str) -> Result<CharacterEntry, LookupError> {
        let url = format!("{}/{}", self.base_url, character);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(character.to_string()));
        }
        let response = response.error_for_status()?;
        let entry: MoedictEntry = response.json().await?;

        let readings = parse_entry(entry);
        if readings.is_empty() {
            return Err(LookupError::Malformed {
                character: character.to_string(),
                detail: "no heteronyms with a zhuyin transcription".into(),
            });
        }
        Ok(CharacterEntry { readings })
    }
}

#[async_trait]
impl ReadingLookup for MoedictClient {
    async fn fetch_readings(&self, character: &str) -> Option<CharacterEntry> {
        match self.get_entry(character).await {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(character, error = %err, "reading lookup failed");
                None
            }
        }
    }
}

// Wire shape of a moedict /uni entry, trimmed to the fields used here.
#[derive(Debug, Deserialize)]
struct MoedictEntry {
    #[serde(default)]
    heteronyms: Vec<MoedictHeteronym>,
}

#[derive(Debug, Deserialize)]
struct MoedictHeteronym {
    bopomofo: Option<String>,
    pinyin: Option<String>,
    #[serde(default)]
    definitions: Vec<MoedictDefinition>,
}

#[derive(Debug, Deserialize)]
struct MoedictDefinition {
    def: Option<String>,
    #[serde(rename = "type")]
    part_of_speech: Option<String>,
}

fn parse_entry(entry: MoedictEntry) -> Vec<Reading> {
    entry
        .heteronyms
        .into_iter()
        .filter_map(|h| {
            let phonetic = h.bopomofo?;
            Some(Reading {
                phonetic,
                pronunciation_latin: h.pinyin.unwrap_or_default(),
                definitions: h
                    .definitions
                    .into_iter()
                    .filter_map(|d| {
                        Some(Definition {
                            gloss: d.def?,
                            part_of_speech: d.part_of_speech,
                        })
                    })
                    .collect(),
            })
        })
        .collect()
}
