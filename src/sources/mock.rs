/*!
 * Mock content source for testing.
 *
 * This module provides a mock source that simulates different behaviors:
 * - `MockSource::working()` - Always succeeds with generated units
 * - `MockSource::failing()` - Always fails with a connection error
 * - `MockSource::empty()` - Succeeds with an empty sequence
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::content::{ChapterRef, ChapterSummary, TextUnit};
use crate::errors::FetchError;
use super::{ContentSource, ResourceDescriptor};

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with generated units
    Working,
    /// Always fails with a connection error
    Failing,
    /// Succeeds with an empty sequence
    Empty,
    /// Simulates a slow response (for in-flight state testing)
    Slow {
        /// Delay before responding
        delay_ms: u64,
    },
}

/// Mock content source for testing fetch and alignment behavior
#[derive(Debug)]
pub struct MockSource {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of units generated per chapter
    units_per_chapter: u32,
    /// Canned units returned instead of generated ones, if set
    canned: Option<Vec<TextUnit>>,
    /// Request counter
    request_count: Arc<AtomicUsize>,
}

impl MockSource {
    /// Create a new mock source with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            units_per_chapter: 7,
            canned: None,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock source that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock source that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock source that returns empty sequences
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a slow mock source
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set how many units to generate per chapter
    pub fn with_units_per_chapter(mut self, count: u32) -> Self {
        self.units_per_chapter = count;
        self
    }

    /// Return these exact units for every fetch instead of generating
    pub fn with_canned_units(mut self, units: Vec<TextUnit>) -> Self {
        self.canned = Some(units);
        self
    }

    /// Number of fetches served so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Deterministic unit generation: ids are globally unique per chapter
    /// and bodies carry the descriptor so tests can tell fetches apart
    fn generate(&self, descriptor: &ResourceDescriptor) -> Vec<TextUnit> {
        if let Some(canned) = &self.canned {
            return canned.clone();
        }

        let (parent, label) = match descriptor {
            ResourceDescriptor::QuranChapter { chapter, edition } => {
                (ChapterRef::new(edition.clone(), *chapter), edition.clone())
            }
            ResourceDescriptor::HadithChapter {
                collection,
                chapter,
            } => (
                ChapterRef::new(collection.clone(), *chapter),
                collection.clone(),
            ),
        };

        (1..=self.units_per_chapter)
            .map(|i| {
                TextUnit::new(
                    u64::from(parent.chapter) * 1000 + u64::from(i),
                    i,
                    format!("{label} {}:{i}", parent.chapter),
                    parent.clone(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn fetch_units(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<TextUnit>, FetchError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self.generate(descriptor)),
            MockBehavior::Failing => Err(FetchError::ConnectionError(
                "Mock source configured to fail".to_string(),
            )),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.generate(descriptor))
            }
        }
    }

    async fn fetch_bilingual(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<(Vec<TextUnit>, Vec<TextUnit>), FetchError> {
        let primary = self.fetch_units(descriptor).await?;
        let secondary = primary
            .iter()
            .map(|unit| {
                TextUnit::new(
                    unit.id,
                    unit.ordinal,
                    format!("translation of {}", unit.body),
                    unit.parent.clone(),
                )
            })
            .collect();
        Ok((primary, secondary))
    }

    async fn chapter_index(&self) -> Result<Vec<ChapterSummary>, FetchError> {
        match self.behavior {
            MockBehavior::Failing => Err(FetchError::ConnectionError(
                "Mock source configured to fail".to_string(),
            )),
            _ => Ok(vec![ChapterSummary {
                number: 1,
                name: "mock".to_string(),
                translated_name: "Mock Chapter".to_string(),
                unit_count: self.units_per_chapter,
            }]),
        }
    }

    async fn test_connection(&self) -> Result<(), FetchError> {
        match self.behavior {
            MockBehavior::Failing => Err(FetchError::ConnectionError(
                "Mock source configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
