use std::sync::Arc;
use anyhow::Result;
use log::{debug, warn};

use crate::alignment::{AlignedPair, MatchStrategy, align};
use crate::app_config::Config;
use crate::content::ChapterSummary;
use crate::sources::alquran::AlQuranCloud;
use crate::sources::hadith_cdn::HadithCdn;
use crate::sources::{ContentSource, ResourceDescriptor};

// @module: Coordination layer between sources, alignment and the caller

/// Main coordination service for bilingual content.
///
/// Owns the configured sources and exposes the operations a screen needs:
/// fetch a chapter index, fetch a chapter in two renderings and align them,
/// filter the result. Rendering and retry policy stay with the caller.
pub struct ContentLibrary {
    // @field: Library configuration
    config: Config,

    // @field: Quran text source
    quran: Arc<dyn ContentSource>,

    // @field: Hadith text source
    hadith: Arc<dyn ContentSource>,
}

impl ContentLibrary {
    // @method: Create a new library with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let quran = Arc::new(AlQuranCloud::new(
            config.quran.endpoint.clone(),
            std::time::Duration::from_secs(config.quran.timeout_secs),
        ));
        let hadith = Arc::new(HadithCdn::new(
            config.hadith.endpoint.clone(),
            std::time::Duration::from_secs(config.hadith.timeout_secs),
        ));

        Ok(Self {
            config,
            quran,
            hadith,
        })
    }

    /// Create a library over explicit sources - used by tests and callers
    /// that bring their own accessors
    pub fn with_sources(
        config: Config,
        quran: Arc<dyn ContentSource>,
        hadith: Arc<dyn ContentSource>,
    ) -> Self {
        Self {
            config,
            quran,
            hadith,
        }
    }

    /// Check if the library is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.quran.arabic_edition.is_empty()
            && !self.config.quran.translation_edition.is_empty()
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The Quran chapter index (number, names, verse counts)
    pub async fn chapter_index(&self) -> Result<Vec<ChapterSummary>> {
        let index = self.quran.chapter_index().await?;
        debug!("Fetched chapter index with {} chapters", index.len());
        Ok(index)
    }

    /// Fetch one Quran chapter in both configured editions, concurrently,
    /// and align the two verse sequences for synchronized display.
    ///
    /// The two editions are independently versioned datasets; a translation
    /// shorter than the original shows up as gaps, never as an error.
    pub async fn bilingual_chapter(&self, chapter: u32) -> Result<Vec<AlignedPair>> {
        let primary_descriptor = ResourceDescriptor::QuranChapter {
            chapter,
            edition: self.config.quran.arabic_edition.clone(),
        };
        let secondary_descriptor = ResourceDescriptor::QuranChapter {
            chapter,
            edition: self.config.quran.translation_edition.clone(),
        };

        // Both editions fetched concurrently; either failure fails the view
        let (primary, secondary) = futures::try_join!(
            self.quran.fetch_units(&primary_descriptor),
            self.quran.fetch_units(&secondary_descriptor),
        )?;

        if primary.len() != secondary.len() {
            warn!(
                "Chapter {chapter}: editions disagree on length ({} vs {})",
                primary.len(),
                secondary.len()
            );
        }

        Ok(align(primary, secondary, self.config.quran.strategy))
    }

    /// Fetch one hadith chapter and align its Arabic entries with their
    /// translations by shared id.
    pub async fn hadith_chapter(
        &self,
        collection: &str,
        chapter: u32,
    ) -> Result<Vec<AlignedPair>> {
        let descriptor = ResourceDescriptor::HadithChapter {
            collection: collection.to_string(),
            chapter,
        };

        let (primary, secondary) = self.hadith.fetch_bilingual(&descriptor).await?;
        debug!(
            "Fetched {descriptor}: {} entries, {} translated",
            primary.len(),
            secondary.len()
        );

        // Entries carry stable in-chapter ids, so key matching is exact
        Ok(align(primary, secondary, MatchStrategy::ByKey))
    }

    /// Fetch the default hadith collection's chapter
    pub async fn default_hadith_chapter(&self, chapter: u32) -> Result<Vec<AlignedPair>> {
        let collection = self.config.hadith.default_collection.clone();
        self.hadith_chapter(&collection, chapter).await
    }

    /// Case-insensitive substring filter over aligned pairs.
    ///
    /// A pair matches when the query occurs in either rendering, mirroring
    /// a search box over a bilingual list. An empty query keeps everything.
    pub fn search(pairs: &[AlignedPair], query: &str) -> Vec<AlignedPair> {
        pairs
            .iter()
            .filter(|pair| {
                pair.primary.contains_text(query)
                    || pair
                        .secondary
                        .as_ref()
                        .is_some_and(|unit| unit.contains_text(query))
            })
            .cloned()
            .collect()
    }
}
