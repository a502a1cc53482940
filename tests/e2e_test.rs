//! End-to-end tests for the folio binary.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;

use common::create_test_site;

/// Tests full binary execution generates valid output.
#[test]
fn test_build_command_e2e() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let output = test_site.output_dir();

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("build")
        .arg("--site")
        .arg(test_site.site_file())
        .arg("--content")
        .arg(test_site.content_dir())
        .arg("-o")
        .arg(&output)
        .arg("--no-open")
        .status()?;

    // Assert
    assert!(status.success(), "build should succeed");
    let html = fs::read_to_string(output.join("index.html"))?;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Engines and alignment"));
    assert!(output.join("travel/japan.html").exists());

    Ok(())
}

/// Tests a missing site file fails before anything is written.
#[test]
fn test_missing_site_file_e2e() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let output = test_site.output_dir();

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("build")
        .arg("--site")
        .arg(test_site.dir.path().join("absent.toml"))
        .arg("-o")
        .arg(&output)
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Site file does not exist"));
    assert!(!output.exists());

    Ok(())
}

/// Tests an invalid site file is rejected with its validation message.
#[test]
fn test_invalid_place_id_e2e() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let site_file = test_site.site_file();
    let raw = fs::read_to_string(&site_file)?;
    fs::write(&site_file, raw.replace(r#"id = "japan""#, r#"id = "../japan""#))?;

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("build")
        .arg("--site")
        .arg(&site_file)
        .arg("-o")
        .arg(test_site.output_dir())
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to load site content"));

    Ok(())
}
