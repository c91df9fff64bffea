use tempfile::TempDir;

use super::*;
use crate::cli::ColorChoice;
use crate::output::ColorMode;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError};

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_returns_default() {
    let result = load_config(None, true).unwrap();
    assert_eq!(result.config.scan.window_days, 30);
    assert!(result.source.is_none());
}

#[test]
fn load_config_no_config_wins_over_explicit_path() {
    let result = load_config(Some(Path::new("nonexistent.toml")), true).unwrap();
    assert!(result.source.is_none());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(Path::new("nonexistent.toml")), false);
    assert!(matches!(result, Err(RcrdScanError::FileRead { .. })));
}

#[test]
fn load_config_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "version = \"1\"\n[scan]\nwindow_days = 7\n",
    )
    .unwrap();

    let result = load_config(Some(&config_path), false).unwrap();
    assert_eq!(result.config.scan.window_days, 7);
    assert_eq!(result.source, Some(config_path));
}

#[test]
fn write_output_to_file_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("reports").join("out.json");

    write_output(Some(&nested), "{}\n", false).unwrap();

    assert_eq!(std::fs::read_to_string(&nested).unwrap(), "{}\n");
}

#[test]
fn write_output_to_file_ignores_quiet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    write_output(Some(&path), "a,b\n", true).unwrap();

    assert!(path.exists());
}

#[test]
fn write_output_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");
    std::fs::write(&path, "old").unwrap();

    write_output(Some(&path), "new", false).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}
