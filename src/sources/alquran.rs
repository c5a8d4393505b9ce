use std::time::Duration;
use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::content::{ChapterRef, ChapterSummary, TextUnit};
use crate::errors::FetchError;
use super::{ContentSource, ResourceDescriptor};

/// Client for the alquran.cloud REST API
#[derive(Debug)]
pub struct AlQuranCloud {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// Response envelope wrapping every alquran.cloud payload
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    /// API status code, 200 on success
    code: u16,

    /// Status string, "OK" on success
    #[allow(dead_code)]
    status: String,

    /// The actual payload
    data: T,
}

/// One chapter as returned by the per-chapter endpoint
#[derive(Debug, Deserialize)]
struct SurahData {
    /// 1-based chapter number
    number: u32,

    /// List of verses in chapter order
    #[serde(default)]
    ayahs: Vec<AyahData>,
}

/// One verse as returned inside a chapter payload
#[derive(Debug, Deserialize)]
struct AyahData {
    /// Global verse number, stable across editions of the same segmentation
    number: u64,

    /// 1-based position within the chapter
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,

    /// Verse text in the requested edition
    text: String,
}

/// One chapter as returned by the chapter index endpoint
#[derive(Debug, Deserialize)]
struct SurahIndexEntry {
    number: u32,

    /// Native-script chapter name
    name: String,

    #[serde(rename = "englishName")]
    english_name: String,

    #[serde(rename = "numberOfAyahs")]
    number_of_ayahs: u32,
}

impl AlQuranCloud {
    /// Create a new alquran.cloud client
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        let base = if self.endpoint.is_empty() {
            "https://api.alquran.cloud/v1"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{base}/{path}")
    }

    async fn get_envelope<T>(&self, path: &str) -> Result<ApiEnvelope<T>, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.api_url(path);
        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FetchError::ConnectionError(format!("Failed to reach alquran.cloud: {e}"))
            } else {
                FetchError::RequestFailed(format!("Failed to send request to alquran.cloud: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("alquran.cloud API error ({status}): {error_text}");
            return Err(FetchError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| FetchError::ParseError(format!("Failed to parse alquran.cloud response: {e}")))?;

        if envelope.code != 200 {
            return Err(FetchError::ApiError {
                status_code: envelope.code,
                message: format!("API envelope reported failure for {url}"),
            });
        }

        Ok(envelope)
    }

    /// Fetch one chapter's verses in the given edition
    pub async fn fetch_chapter(
        &self,
        chapter: u32,
        edition: &str,
    ) -> Result<Vec<TextUnit>, FetchError> {
        if chapter == 0 || chapter > 114 {
            return Err(FetchError::InvalidDescriptor(format!(
                "Chapter number {chapter} is out of range 1..=114"
            )));
        }

        let envelope: ApiEnvelope<SurahData> = self
            .get_envelope(&format!("surah/{chapter}/{edition}"))
            .await?;

        let surah = envelope.data;
        let parent = ChapterRef::new(edition, surah.number);

        // Coerce to validated units at the boundary; a malformed verse is
        // skipped rather than poisoning the whole chapter
        let mut units = Vec::with_capacity(surah.ayahs.len());
        for ayah in surah.ayahs {
            match TextUnit::new_validated(
                ayah.number,
                ayah.number_in_surah,
                ayah.text,
                parent.clone(),
            ) {
                Ok(unit) => units.push(unit),
                Err(e) => warn!("Skipping invalid verse {} in chapter {chapter}: {e}", ayah.number),
            }
        }

        Ok(units)
    }
}

#[async_trait]
impl ContentSource for AlQuranCloud {
    async fn fetch_units(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<TextUnit>, FetchError> {
        match descriptor {
            ResourceDescriptor::QuranChapter { chapter, edition } => {
                self.fetch_chapter(*chapter, edition).await
            }
            other => Err(FetchError::InvalidDescriptor(format!(
                "alquran.cloud does not serve {other}"
            ))),
        }
    }

    async fn chapter_index(&self) -> Result<Vec<ChapterSummary>, FetchError> {
        let envelope: ApiEnvelope<Vec<SurahIndexEntry>> = self.get_envelope("surah").await?;

        Ok(envelope
            .data
            .into_iter()
            .map(|entry| ChapterSummary {
                number: entry.number,
                name: entry.name,
                translated_name: entry.english_name,
                unit_count: entry.number_of_ayahs,
            })
            .collect())
    }

    async fn test_connection(&self) -> Result<(), FetchError> {
        self.chapter_index().await?;
        Ok(())
    }
}
