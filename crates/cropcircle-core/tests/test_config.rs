use std::io::Write;

use cropcircle_core::config::{EditorConfig, IntakeConfig, OutputSpec};
use cropcircle_core::error::AvatarError;

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.intake.max_file_size, 2 * 1024 * 1024);
    assert_eq!(config.intake.allowed_types, vec!["image/jpeg", "image/png"]);
    assert_eq!(config.output.viewport_size, 200);
    assert_eq!(config.output.output_size, 200);
    assert_eq!(config.output.jpeg_quality, 90);
    assert_eq!(config.output.fill, [0, 0, 0]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip() {
    let config = EditorConfig {
        intake: IntakeConfig {
            max_file_size: 512 * 1024,
            ..IntakeConfig::default()
        },
        output: OutputSpec {
            viewport_size: 320,
            output_size: 128,
            jpeg_quality: 75,
            fill: [255, 255, 255],
        },
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed = EditorConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_document_uses_defaults() {
    let parsed = EditorConfig::from_toml_str("").unwrap();
    assert_eq!(parsed, EditorConfig::default());
}

#[test]
fn test_partial_section_fills_defaults() {
    let parsed = EditorConfig::from_toml_str("[output]\noutput_size = 400\n").unwrap();
    assert_eq!(parsed.output.output_size, 400);
    assert_eq!(parsed.output.viewport_size, 200);
    assert_eq!(parsed.intake, IntakeConfig::default());
}

#[test]
fn test_invalid_quality_rejected() {
    let err = EditorConfig::from_toml_str("[output]\njpeg_quality = 101\n").unwrap_err();
    assert!(matches!(err, AvatarError::InvalidConfig(_)));
}

#[test]
fn test_zero_viewport_rejected() {
    let err = EditorConfig::from_toml_str("[output]\nviewport_size = 0\n").unwrap_err();
    assert!(matches!(err, AvatarError::InvalidConfig(_)));
}

#[test]
fn test_oversized_output_rejected() {
    let err = EditorConfig::from_toml_str("[output]\noutput_size = 9000\n").unwrap_err();
    assert!(matches!(err, AvatarError::InvalidConfig(_)));
}

#[test]
fn test_empty_allow_list_rejected() {
    let err = EditorConfig::from_toml_str("[intake]\nallowed_types = []\n").unwrap_err();
    assert!(matches!(err, AvatarError::InvalidConfig(_)));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = EditorConfig::from_toml_str("[output\nsize = ").unwrap_err();
    assert!(matches!(err, AvatarError::Config(_)));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = EditorConfig::from_toml_str("[output]\noutput_size = \"big\"\n").unwrap_err();
    assert!(matches!(err, AvatarError::Config(_)));
}

#[test]
fn test_load_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[intake]\nallowed_types = [\"image/png\"]").unwrap();
    f.flush().unwrap();

    let config = EditorConfig::load(f.path()).unwrap();
    assert!(config.intake.allows("image/png"));
    assert!(!config.intake.allows("image/jpeg"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, AvatarError::Io(_)));
}
