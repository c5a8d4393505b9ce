/*!
 * Tests for configuration loading, defaults and validation
 */

use rehal::alignment::MatchStrategy;
use rehal::app_config::{Config, LogLevel};

/// Defaults mirror the public hosts and editions the app ships with
#[test]
fn test_default_config_shouldCarryPublicHosts() {
    let config = Config::default();

    assert_eq!(config.quran.endpoint, "https://api.alquran.cloud/v1");
    assert_eq!(config.quran.arabic_edition, "quran-uthmani");
    assert_eq!(config.quran.translation_edition, "en.asad");
    assert_eq!(config.quran.strategy, MatchStrategy::ByPosition);
    assert_eq!(config.hadith.default_collection, "bukhari");
    assert_eq!(config.playback.default_reciter, "ar.alafasy");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Validation rejects blank editions and zero timeouts
#[test]
fn test_validate_withMissingValues_shouldFail() {
    let mut config = Config::default();
    config.quran.translation_edition = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.hadith.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Config round-trips through a JSON file
#[test]
fn test_config_file_roundTrip_shouldPreserveValues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.quran.translation_edition = "en.pickthall".to_string();
    config.quran.strategy = MatchStrategy::ByKey;
    config.log_level = LogLevel::Debug;

    config.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.quran.translation_edition, "en.pickthall");
    assert_eq!(loaded.quran.strategy, MatchStrategy::ByKey);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

/// Loading a missing or invalid file is an error the caller sees
#[test]
fn test_from_file_withBadFile_shouldFail() {
    let dir = tempfile::tempdir().unwrap();

    assert!(Config::from_file(dir.path().join("missing.json")).is_err());

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "not json at all").unwrap();
    assert!(Config::from_file(&garbled).is_err());
}

/// Omitted fields fall back to defaults; strategy parses its kebab-case form
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(
        &path,
        r#"{"quran": {"translation_edition": "en.sahih", "strategy": "by-key"}}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.quran.translation_edition, "en.sahih");
    assert_eq!(config.quran.strategy, MatchStrategy::ByKey);
    assert_eq!(config.quran.arabic_edition, "quran-uthmani");
    assert_eq!(config.hadith.default_collection, "bukhari");
}
