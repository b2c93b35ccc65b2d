use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_unwritable_output_exits_with_error() -> Result<()> {
    let test = CliTest::with_files(&[("a.ts", "export {};"), ("blocker", "")])?;

    let output = test.command().args(["-o", "blocker/context.md"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to create output directory"));

    Ok(())
}

#[test]
fn test_missing_directory_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nope").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Cannot access directory"));

    Ok(())
}

#[test]
fn test_invalid_pattern_exits_with_error() -> Result<()> {
    let test = CliTest::with_files(&[("a.ts", "export {};")])?;

    let output = test.command().args(["--include", "[invalid"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'include'"));
    assert!(!test.root().join("context.md").exists());

    Ok(())
}

#[test]
fn test_invalid_config_file_exits_with_error() -> Result<()> {
    let test = CliTest::with_files(&[(".contextrc.json", r#"{ "exclude": ["[oops"] }"#)])?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'exclude'"));

    Ok(())
}

#[test]
fn test_invalid_depth_is_rejected_by_parser() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--max-depth", "many"]).output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--max-depth"));

    Ok(())
}
