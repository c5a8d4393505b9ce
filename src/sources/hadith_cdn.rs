use std::time::Duration;
use async_trait::async_trait;
use log::{error, warn};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;

use crate::content::{ChapterRef, ChapterSummary, TextUnit};
use crate::errors::FetchError;
use super::{ContentSource, ResourceDescriptor};

// @const: Collections served by the hadith CDN tree, with chapter counts
static COLLECTION_CATALOG: Lazy<Vec<CollectionInfo>> = Lazy::new(|| {
    vec![
        CollectionInfo::new("bukhari", "Sahih al-Bukhari", 97),
        CollectionInfo::new("muslim", "Sahih Muslim", 56),
        CollectionInfo::new("abudawud", "Sunan Abu Dawud", 43),
        CollectionInfo::new("tirmidhi", "Jami` at-Tirmidhi", 49),
        CollectionInfo::new("nasai", "Sunan an-Nasa'i", 51),
        CollectionInfo::new("majah", "Sunan Ibn Majah", 37),
        CollectionInfo::new("malik", "Muwatta Malik", 61),
        CollectionInfo::new("darimi", "Sunan ad-Darimi", 24),
        CollectionInfo::new("riyad", "Riyad as-Salihin", 19),
        CollectionInfo::new("qudsi", "Forty Hadith Qudsi", 1),
        CollectionInfo::new("adab", "Al-Adab Al-Mufrad", 57),
    ]
});

/// Catalog entry for one hadith collection
#[derive(Debug, Clone)]
pub struct CollectionInfo {
    /// Path slug on the CDN
    pub slug: &'static str,

    /// Display name
    pub name: &'static str,

    /// Number of chapter files in the tree
    pub chapters: u32,
}

impl CollectionInfo {
    const fn new(slug: &'static str, name: &'static str, chapters: u32) -> Self {
        CollectionInfo {
            slug,
            name,
            chapters,
        }
    }
}

/// Client for the static hadith JSON tree hosted on the jsDelivr CDN.
///
/// Every chapter is one flat file carrying both renderings of every entry,
/// so a single fetch yields the Arabic primary sequence and the English
/// secondary sequence together.
#[derive(Debug)]
pub struct HadithCdn {
    /// HTTP client for CDN requests
    client: Client,
    /// CDN base URL (optional, defaults to the public tree)
    endpoint: String,
}

/// One chapter file on the CDN
#[derive(Debug, Deserialize)]
struct ChapterFile {
    /// Entries in chapter order
    #[serde(default)]
    hadiths: Vec<HadithRecord>,
}

/// One narration entry inside a chapter file
#[derive(Debug, Deserialize)]
struct HadithRecord {
    /// Collection-wide stable id
    id: u64,

    /// Arabic text
    #[serde(default)]
    arabic: String,

    /// English rendering with attribution
    #[serde(default)]
    english: EnglishText,
}

/// Translated text with its narrator attribution
#[derive(Debug, Default, Deserialize)]
struct EnglishText {
    #[serde(default)]
    narrator: String,

    #[serde(default)]
    text: String,
}

impl EnglishText {
    /// Single display body; attribution is part of the rendered entry
    fn into_body(self) -> String {
        let text = self.text.trim();
        let narrator = self.narrator.trim();
        if narrator.is_empty() {
            text.to_string()
        } else {
            format!("{narrator} {text}")
        }
    }
}

impl HadithCdn {
    /// Create a new hadith CDN client
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// The static collection catalog
    pub fn collections() -> &'static [CollectionInfo] {
        &COLLECTION_CATALOG
    }

    /// Look up a collection by slug
    pub fn collection(slug: &str) -> Option<&'static CollectionInfo> {
        COLLECTION_CATALOG.iter().find(|c| c.slug == slug)
    }

    fn chapter_url(&self, collection: &str, chapter: u32) -> String {
        let base = if self.endpoint.is_empty() {
            "https://cdn.jsdelivr.net/gh/aashif000/DB-for-Q-H@main"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{base}/{collection}/{chapter}.json")
    }

    /// Fetch one chapter file and split it into the Arabic primary sequence
    /// and the English secondary sequence.
    pub async fn fetch_chapter(
        &self,
        collection: &str,
        chapter: u32,
    ) -> Result<(Vec<TextUnit>, Vec<TextUnit>), FetchError> {
        let info = Self::collection(collection).ok_or_else(|| {
            FetchError::InvalidDescriptor(format!("Unknown hadith collection: {collection}"))
        })?;
        if chapter == 0 || chapter > info.chapters {
            return Err(FetchError::InvalidDescriptor(format!(
                "Chapter {chapter} is out of range 1..={} for {collection}",
                info.chapters
            )));
        }

        let url = self.chapter_url(collection, chapter);
        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FetchError::ConnectionError(format!("Failed to reach hadith CDN: {e}"))
            } else {
                FetchError::RequestFailed(format!("Failed to send request to hadith CDN: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Hadith CDN error ({status}) for {url}: {error_text}");
            return Err(FetchError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let file = response
            .json::<ChapterFile>()
            .await
            .map_err(|e| FetchError::ParseError(format!("Failed to parse chapter file: {e}")))?;

        let parent = ChapterRef::new(collection, chapter);
        let mut primary = Vec::with_capacity(file.hadiths.len());
        let mut secondary = Vec::with_capacity(file.hadiths.len());

        for (i, record) in file.hadiths.into_iter().enumerate() {
            let ordinal = (i + 1) as u32;

            match TextUnit::new_validated(record.id, ordinal, record.arabic, parent.clone()) {
                Ok(unit) => primary.push(unit),
                Err(e) => {
                    warn!("Skipping invalid entry {} in {parent}: {e}", record.id);
                    continue;
                }
            }

            // A missing translation is a normal gap, not a reason to drop
            // the primary entry
            match TextUnit::new_validated(
                record.id,
                ordinal,
                record.english.into_body(),
                parent.clone(),
            ) {
                Ok(unit) => secondary.push(unit),
                Err(_) => warn!("Entry {} in {parent} has no usable translation", record.id),
            }
        }

        Ok((primary, secondary))
    }
}

#[async_trait]
impl ContentSource for HadithCdn {
    async fn fetch_units(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<TextUnit>, FetchError> {
        let (primary, _) = self.fetch_bilingual(descriptor).await?;
        Ok(primary)
    }

    async fn fetch_bilingual(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<(Vec<TextUnit>, Vec<TextUnit>), FetchError> {
        match descriptor {
            ResourceDescriptor::HadithChapter {
                collection,
                chapter,
            } => self.fetch_chapter(collection, *chapter).await,
            other => Err(FetchError::InvalidDescriptor(format!(
                "The hadith CDN does not serve {other}"
            ))),
        }
    }

    async fn chapter_index(&self) -> Result<Vec<ChapterSummary>, FetchError> {
        // The CDN has no index endpoint; the catalog is the index
        Ok(COLLECTION_CATALOG
            .iter()
            .enumerate()
            .map(|(i, info)| ChapterSummary {
                number: (i + 1) as u32,
                name: info.slug.to_string(),
                translated_name: info.name.to_string(),
                unit_count: info.chapters,
            })
            .collect())
    }

    async fn test_connection(&self) -> Result<(), FetchError> {
        // The smallest file in the tree
        self.fetch_chapter("qudsi", 1).await?;
        Ok(())
    }
}
