use std::fmt;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

// @module: Typed content model shared by every fetch boundary

/// Reference to the chapter that contains a text unit.
///
/// Immutable once assigned: a unit never migrates between chapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRef {
    // @field: Collection slug (e.g. "quran", "bukhari")
    pub collection: String,

    // @field: 1-based chapter number within the collection
    pub chapter: u32,
}

impl ChapterRef {
    pub fn new(collection: impl Into<String>, chapter: u32) -> Self {
        ChapterRef {
            collection: collection.into(),
            chapter,
        }
    }
}

impl fmt::Display for ChapterRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.chapter)
    }
}

// @struct: Single addressable piece of text (a verse or a narration entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    // @field: Stable identifier, unique within its collection
    pub id: u64,

    // @field: 1-based position within the parent chapter
    pub ordinal: u32,

    // @field: Raw text, may contain right-to-left script
    pub body: String,

    // @field: Containing chapter
    pub parent: ChapterRef,
}

impl TextUnit {
    /// Creates a new text unit - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(id: u64, ordinal: u32, body: String, parent: ChapterRef) -> Self {
        TextUnit {
            id,
            ordinal,
            body,
            parent,
        }
    }

    // @creates: Validated text unit
    // @validates: Non-empty body and 1-based ordinal
    pub fn new_validated(id: u64, ordinal: u32, body: String, parent: ChapterRef) -> Result<Self> {
        if ordinal == 0 {
            return Err(anyhow!("Invalid ordinal 0 for unit {} (ordinals are 1-based)", id));
        }

        let trimmed_body = body.trim();
        if trimmed_body.is_empty() {
            return Err(anyhow!("Empty body for unit {} in {}", id, parent));
        }

        Ok(TextUnit {
            id,
            ordinal,
            body: trimmed_body.to_string(),
            parent,
        })
    }

    /// Case-insensitive substring match against the unit body.
    ///
    /// An empty query matches every unit, mirroring a cleared search box.
    pub fn contains_text(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.body.to_lowercase().contains(&query.to_lowercase())
    }
}

impl fmt::Display for TextUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} #{}] {}", self.parent, self.ordinal, self.body)
    }
}

/// Summary of one chapter as listed in a collection index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterSummary {
    /// 1-based chapter number
    pub number: u32,

    /// Native-script chapter name
    pub name: String,

    /// Transliterated or translated chapter name
    pub translated_name: String,

    /// Number of text units in the chapter
    pub unit_count: u32,
}

impl fmt::Display for ChapterSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} ({}, {} units)",
            self.number, self.name, self.translated_name, self.unit_count
        )
    }
}
