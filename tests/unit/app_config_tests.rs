/*!
 * Tests for application configuration
 */

use anyhow::Result;
use submod::app_config::{Config, LogLevel};
use submod::errors::AppError;
use crate::common;

/// A missing config file yields the defaults
#[test]
fn test_load_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load(temp_dir.path().join("absent.json"))?;

    assert_eq!(config, Config::default());
    assert!(!temp_dir.path().join("absent.json").exists());
    Ok(())
}

/// A config file on disk is read
#[test]
fn test_load_withValidFile_shouldReadFields() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "submod.json",
        r#"{ "log_level": "trace", "output_dir": "shifted" }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.output_dir.as_deref(), Some(std::path::Path::new("shifted")));
    Ok(())
}

/// A broken config file is an error
#[test]
fn test_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "submod.json", "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

/// An output_dir that points at a file is rejected
#[test]
fn test_validate_withOutputDirBeingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "not_a_dir", "x")?;

    let config = Config {
        output_dir: Some(file),
        ..Config::default()
    };

    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    Ok(())
}
