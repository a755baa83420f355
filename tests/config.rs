use chrono::{Duration, TimeZone, Utc};
use datekit::config::Config;
use datekit::NegativeTimespan;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.timespan.negative, NegativeTimespan::Signed);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown level should fail
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty log file
    config.logging.level = "debug".to_string();
    config.logging.file = Some(std::path::PathBuf::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("negative = \"signed\""));
    assert!(toml_str.contains("level = \"warn\""));
    assert!(!toml_str.contains("file"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[timespan]
negative = "clamp"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.timespan.negative, NegativeTimespan::Clamp);

    // Check that unspecified values use defaults
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_negative_policy_rejected() {
    let result: Result<Config, _> = toml::from_str("[timespan]\nnegative = \"wrap\"\n");
    assert!(result.is_err());
}

#[test]
fn test_config_format_timespan_uses_policy() {
    let start = Utc.with_ymd_and_hms(2016, 3, 5, 10, 0, 0).unwrap();
    let end = start - Duration::seconds(3);

    let mut config = Config::default();
    assert_eq!(config.format_timespan(&start, &end), "-00:00:03.000");

    config.timespan.negative = NegativeTimespan::Clamp;
    assert_eq!(config.format_timespan(&start, &end), "00:00:00.000");
}

#[test]
fn test_generate_and_load_config() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join(format!("datekit_test_config_{}", std::process::id()));
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }

    // Generate config should create the directory structure
    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# datekit Configuration File"));

    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded, Config::default());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_reports_invalid_level() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join(format!("datekit_test_bad_config_{}", std::process::id()));
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[logging]\nenabled = true\nlevel = \"shout\"\n").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("shout"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_missing_file() {
    let result = Config::load_from_file("/nonexistent/datekit/config.toml");
    assert!(result.is_err());
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("datekit/config.toml"));
    }
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("datekit_test_{}_{}", name, std::process::id()));
    if dir.exists() {
        let _ = std::fs::remove_dir_all(&dir);
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_falls_back_to_defaults() {
    let cwd = scratch_dir("load_defaults_cwd");
    let config_dir = scratch_dir("load_defaults_xdg");

    let config = Config::load_from_dirs(&cwd, Some(&config_dir)).unwrap();
    assert_eq!(config, Config::default());

    let config = Config::load_from_dirs(&cwd, None).unwrap();
    assert_eq!(config, Config::default());

    let _ = std::fs::remove_dir_all(&cwd);
    let _ = std::fs::remove_dir_all(&config_dir);
}

#[test]
fn test_load_reads_current_dir_file() {
    let cwd = scratch_dir("load_cwd");
    std::fs::write(cwd.join("datekit.toml"), "[timespan]\nnegative = \"clamp\"\n").unwrap();

    let config = Config::load_from_dirs(&cwd, None).unwrap();
    assert_eq!(config.timespan.negative, NegativeTimespan::Clamp);

    let _ = std::fs::remove_dir_all(&cwd);
}

#[test]
fn test_load_reads_config_dir_file() {
    let cwd = scratch_dir("load_xdg_only_cwd");
    let config_dir = scratch_dir("load_xdg_only_xdg");
    std::fs::create_dir_all(config_dir.join("datekit")).unwrap();
    std::fs::write(
        config_dir.join("datekit").join("config.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = Config::load_from_dirs(&cwd, Some(&config_dir)).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.timespan.negative, NegativeTimespan::Signed);

    let _ = std::fs::remove_dir_all(&cwd);
    let _ = std::fs::remove_dir_all(&config_dir);
}

#[test]
fn test_load_prefers_current_dir_file() {
    let cwd = scratch_dir("load_precedence_cwd");
    let config_dir = scratch_dir("load_precedence_xdg");
    std::fs::write(cwd.join("datekit.toml"), "[logging]\nlevel = \"error\"\n").unwrap();
    std::fs::create_dir_all(config_dir.join("datekit")).unwrap();
    std::fs::write(
        config_dir.join("datekit").join("config.toml"),
        "[logging]\nlevel = \"trace\"\n",
    )
    .unwrap();

    let config = Config::load_from_dirs(&cwd, Some(&config_dir)).unwrap();
    assert_eq!(config.logging.level, "error");

    let _ = std::fs::remove_dir_all(&cwd);
    let _ = std::fs::remove_dir_all(&config_dir);
}

#[test]
fn test_load_from_process_dirs() {
    // The crate root carries no datekit.toml, so this only fails on a broken user config
    assert!(!std::path::Path::new("datekit.toml").exists());
    assert!(Config::load().is_ok());
}
