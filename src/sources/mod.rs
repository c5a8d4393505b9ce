/*!
 * Content source implementations for the remote datasets.
 *
 * This module contains client implementations for the public content hosts:
 * - AlQuranCloud: REST API serving Quran text per edition
 * - HadithCdn: static JSON tree of hadith collections on a CDN
 */

use async_trait::async_trait;
use std::fmt;
use std::fmt::Debug;

use crate::content::{ChapterSummary, TextUnit};
use crate::errors::FetchError;

/// Typed address of a fetchable text sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDescriptor {
    /// One Quran chapter in a named edition
    QuranChapter {
        /// 1-based chapter number (1..=114)
        chapter: u32,
        /// Edition identifier, e.g. "quran-uthmani" or "en.asad"
        edition: String,
    },

    /// One chapter of a named hadith collection
    HadithChapter {
        /// Collection slug, e.g. "bukhari"
        collection: String,
        /// 1-based chapter number
        chapter: u32,
    },
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::QuranChapter { chapter, edition } => {
                write!(f, "quran chapter {chapter} ({edition})")
            }
            Self::HadithChapter {
                collection,
                chapter,
            } => write!(f, "{collection} chapter {chapter}"),
        }
    }
}

/// Common trait for all content sources
///
/// This trait defines the interface the library core needs from a network or
/// CDN accessor: well-formed text unit sequences, or a typed failure. The
/// core does not care what is behind it.
#[async_trait]
pub trait ContentSource: Send + Sync + Debug {
    /// Fetch the sequence of text units addressed by the descriptor
    ///
    /// # Arguments
    /// * `descriptor` - Which sequence to fetch
    ///
    /// # Returns
    /// * `Result<Vec<TextUnit>, FetchError>` - The validated units in
    ///   chapter order, or the fetch failure
    async fn fetch_units(&self, descriptor: &ResourceDescriptor)
        -> Result<Vec<TextUnit>, FetchError>;

    /// Fetch both renderings of a sequence in one request, where the source
    /// stores them together.
    ///
    /// The default fetches the primary sequence only and returns an empty
    /// secondary; sources whose payloads are inherently bilingual override
    /// this.
    async fn fetch_bilingual(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<(Vec<TextUnit>, Vec<TextUnit>), FetchError> {
        Ok((self.fetch_units(descriptor).await?, Vec::new()))
    }

    /// List the chapters this source serves
    async fn chapter_index(&self) -> Result<Vec<ChapterSummary>, FetchError>;

    /// Test the connection to the source
    async fn test_connection(&self) -> Result<(), FetchError>;
}

pub mod alquran;
pub mod hadith_cdn;
pub mod mock;
