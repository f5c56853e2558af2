use tempfile::TempDir;
use wordsift_core::types::{AppConfig, FragmentPolicy};

/// Verify a missing config file yields the defaults.
#[test]
fn test_load_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(&AppConfig::path(dir.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.min_whole_word_len, 2);
    assert_eq!(config.search.fragments, FragmentPolicy::Dedup);
    assert_eq!(config.search.max_depth, 512);
    assert_eq!(config.logging.filter, "info");
}

/// Verify save followed by load restores every field.
#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let mut config = AppConfig::default();
    config.search.fragments = FragmentPolicy::KeepAll;
    config.search.max_depth = 16;
    config.logging.filter = "wordsift_search=debug".to_string();
    config.save(&path).unwrap();

    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

/// Verify partial files fill unspecified fields with defaults.
#[test]
fn test_partial_file_uses_defaults() {
    let config = AppConfig::from_toml_str("[search]\nfragments = \"keep_all\"\n").unwrap();

    assert_eq!(config.search.fragments, FragmentPolicy::KeepAll);
    assert_eq!(config.search.min_whole_word_len, 2);
    assert_eq!(config.logging.filter, "info");
}

/// Verify unknown enum values are rejected.
#[test]
fn test_invalid_fragment_policy_is_parse_error() {
    let result = AppConfig::from_toml_str("[search]\nfragments = \"shuffle\"\n");
    result.unwrap_err();
}

/// Verify zero values are reported and replaced.
#[test]
fn test_validate_and_repair() {
    let config = AppConfig::from_toml_str(
        "[search]\nmin_whole_word_len = 0\nmax_depth = 0\n[logging]\nfilter = \" \"\n",
    )
    .unwrap();

    assert_eq!(config.validate().len(), 3);

    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired, AppConfig::default());
}

/// Verify a whole-word threshold below two is reported and raised to two.
#[test]
fn test_single_character_threshold_is_invalid() {
    let config = AppConfig::from_toml_str("[search]\nmin_whole_word_len = 1\n").unwrap();

    assert_eq!(
        config.validate(),
        ["search.min_whole_word_len must be at least 2"]
    );
    assert_eq!(config.with_defaults_for_invalid().search.min_whole_word_len, 2);
}
