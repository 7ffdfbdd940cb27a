use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .keylintrc.json\n");

    let content = test.read_file(".keylintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["path"], "./locales");
    assert_eq!(parsed["ignores"], serde_json::json!([]));
    assert_eq!(parsed["rules"]["namespace-conflict"], "error");
    assert_eq!(parsed["rules"]["invalid-value"], "error");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".keylintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".keylintrc.json already exists"));
    assert_eq!(test.read_file(".keylintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/en.json", r#"{"title": "Hello"}"#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".keylintrc.json").exists());

    Ok(())
}
