/*!
 * Tests for content sources: descriptor validation, the static catalog and
 * the mock source. Nothing here touches the network - range and descriptor
 * checks happen before any request is sent.
 */

use std::time::Duration;

use rehal::errors::FetchError;
use rehal::sources::alquran::AlQuranCloud;
use rehal::sources::hadith_cdn::HadithCdn;
use rehal::sources::mock::MockSource;
use rehal::sources::{ContentSource, ResourceDescriptor};

fn quran_descriptor(chapter: u32) -> ResourceDescriptor {
    ResourceDescriptor::QuranChapter {
        chapter,
        edition: "quran-uthmani".to_string(),
    }
}

fn hadith_descriptor(collection: &str, chapter: u32) -> ResourceDescriptor {
    ResourceDescriptor::HadithChapter {
        collection: collection.to_string(),
        chapter,
    }
}

/// Chapter numbers outside 1..=114 are rejected before any request
#[tokio::test]
async fn test_alquran_fetch_withChapterOutOfRange_shouldRejectDescriptor() {
    let client = AlQuranCloud::new("", Duration::from_secs(1));

    for chapter in [0, 115, 500] {
        let result = client.fetch_chapter(chapter, "quran-uthmani").await;
        assert!(
            matches!(result, Err(FetchError::InvalidDescriptor(_))),
            "chapter {chapter} should be rejected"
        );
    }
}

/// The Quran client does not serve hadith descriptors
#[tokio::test]
async fn test_alquran_fetch_withHadithDescriptor_shouldRejectDescriptor() {
    let client = AlQuranCloud::new("", Duration::from_secs(1));

    let result = client.fetch_units(&hadith_descriptor("bukhari", 1)).await;

    assert!(matches!(result, Err(FetchError::InvalidDescriptor(_))));
}

/// Unknown collections and out-of-range chapters are rejected offline
#[tokio::test]
async fn test_hadith_cdn_fetch_withBadAddress_shouldRejectDescriptor() {
    let client = HadithCdn::new("", Duration::from_secs(1));

    let unknown = client.fetch_chapter("nonexistent", 1).await;
    assert!(matches!(unknown, Err(FetchError::InvalidDescriptor(_))));

    let out_of_range = client.fetch_chapter("bukhari", 200).await;
    assert!(matches!(out_of_range, Err(FetchError::InvalidDescriptor(_))));

    let zero = client.fetch_chapter("bukhari", 0).await;
    assert!(matches!(zero, Err(FetchError::InvalidDescriptor(_))));
}

/// The hadith client does not serve Quran descriptors
#[tokio::test]
async fn test_hadith_cdn_fetch_withQuranDescriptor_shouldRejectDescriptor() {
    let client = HadithCdn::new("", Duration::from_secs(1));

    let result = client.fetch_bilingual(&quran_descriptor(2)).await;

    assert!(matches!(result, Err(FetchError::InvalidDescriptor(_))));
}

/// The static collection catalog resolves known slugs
#[test]
fn test_collection_catalog_withKnownSlug_shouldResolve() {
    let bukhari = HadithCdn::collection("bukhari").unwrap();
    assert_eq!(bukhari.name, "Sahih al-Bukhari");
    assert_eq!(bukhari.chapters, 97);

    assert!(HadithCdn::collection("bukharee").is_none());
    assert!(!HadithCdn::collections().is_empty());
}

/// The catalog doubles as the hadith chapter index
#[tokio::test]
async fn test_hadith_cdn_chapter_index_shouldListCatalog() {
    let client = HadithCdn::new("", Duration::from_secs(1));

    let index = client.chapter_index().await.unwrap();

    assert_eq!(index.len(), HadithCdn::collections().len());
    assert_eq!(index[0].name, "bukhari");
    assert_eq!(index[0].unit_count, 97);
}

/// Descriptors render human-readable addresses
#[test]
fn test_resource_descriptor_display_shouldDescribeAddress() {
    assert_eq!(format!("{}", quran_descriptor(2)), "quran chapter 2 (quran-uthmani)");
    assert_eq!(format!("{}", hadith_descriptor("muslim", 3)), "muslim chapter 3");
}

/// The mock source's bilingual fetch pairs every unit with a translation
/// sharing its id
#[tokio::test]
async fn test_mock_fetch_bilingual_shouldShareIds() {
    let source = MockSource::working().with_units_per_chapter(4);

    let (primary, secondary) = source
        .fetch_bilingual(&quran_descriptor(3))
        .await
        .unwrap();

    assert_eq!(primary.len(), 4);
    assert_eq!(secondary.len(), 4);
    for (p, s) in primary.iter().zip(&secondary) {
        assert_eq!(p.id, s.id);
        assert!(s.body.starts_with("translation of"));
    }
}

/// The empty behavior yields a well-formed empty sequence, not an error
#[tokio::test]
async fn test_mock_fetch_withEmptyBehavior_shouldReturnEmptySequence() {
    let source = MockSource::empty();

    let units = source.fetch_units(&quran_descriptor(1)).await.unwrap();

    assert!(units.is_empty());
    assert_eq!(source.request_count(), 1);
}

/// Canned units are returned verbatim for every fetch
#[tokio::test]
async fn test_mock_fetch_withCannedUnits_shouldReturnThem() {
    let canned = vec![crate::common::unit(42, 1, "canned body")];
    let source = MockSource::working().with_canned_units(canned.clone());

    let units = source.fetch_units(&quran_descriptor(9)).await.unwrap();

    assert_eq!(units, canned);
}
