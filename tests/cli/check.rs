use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const CONFLICTING: &str = r#"{
  "expand": "Expand",
  "expand.all": "Expand all",
  "title": "Title"
}
"#;

const INVALID: &str = r#"{
  "count": 5,
  "enabled": true,
  "label": "Label",
  "label.short": "L"
}
"#;

#[test]
fn test_check_clean_files() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"a.b": "1", "a.c": "2"}"#)?;
    test.write_file("locales/fr/common.json", r#"{"title": "Titre"}"#)?;

    let output = test.check_command().arg("locales").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 2 locale files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_namespace_conflict() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;

    let output = test.check_command().arg("locales").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: \"expand\"  namespace-conflict\n \
         --> locales/en.json:2\n  \
         = note: also used as a namespace by \"expand.all\" (line 3)\n\
         \n\
         ✘ 1 problem (1 error, 0 warnings)\n"
    );
    Ok(())
}

#[test]
fn test_invalid_values_suppress_conflict_detection() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", INVALID)?;

    let output = test.check_command().arg("locales").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"count\"  invalid-value\n --> locales/en.json:2\n"));
    assert!(out.contains("= note: expected string, got number"));
    assert!(out.contains("error: \"enabled\"  invalid-value\n --> locales/en.json:3\n"));
    assert!(out.contains("= note: expected string, got boolean"));
    assert!(!out.contains("namespace-conflict"));
    Ok(())
}

#[test]
fn test_rule_levels_from_rules_flag() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;

    let output = test
        .check_command()
        .args(["locales", "--rules", r#"{"namespace-conflict": "warning"}"#])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("warning: \"expand\"  namespace-conflict\n"));

    let output = test
        .check_command()
        .args(["locales", "--rules", r#"{"namespace-conflict": "off"}"#])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 locale file - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_action_inputs_from_env() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", INVALID)?;

    let output = test
        .check_command()
        .env("INPUT_PATH", "i18n")
        .env("INPUT_RULES", r#"{"invalid-value": "off"}"#)
        .output()?;

    // Invalid values are off, but conflict detection still does not run
    // on a file with non-string values.
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_invalid_rules_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;

    let output = test
        .check_command()
        .args(["locales", "--rules", r#"{"namespace-conflict": "loud"}"#])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid rules configuration"));
    Ok(())
}

#[test]
fn test_no_json_files() -> Result<()> {
    let test = CliTest::with_file("locales/readme.md", "# Locales")?;

    let output = test.check_command().arg("locales").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: No JSON files found in 'locales'\n"
    );
    Ok(())
}

#[test]
fn test_missing_locale_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Locale directory 'missing' does not exist."));
    Ok(())
}

#[test]
fn test_unreadable_files_are_skipped_with_warning() -> Result<()> {
    let test = CliTest::with_file("locales/a.json", "{ not json")?;
    test.write_file("locales/b.json", "{}")?;
    test.write_file("locales/c.json", "[1, 2]")?;
    test.write_file("locales/d.json", r#"{"ok": "fine"}"#)?;

    let output = test.check_command().arg("locales").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("warning: Failed to parse JSON: "));
    assert!(out.contains("warning: File contains no translation keys  parse-error\n --> locales/b.json\n"));
    assert!(out.contains("warning: File does not contain a JSON object  parse-error\n --> locales/c.json\n"));
    assert!(out.ends_with("✘ 3 problems (0 errors, 3 warnings)\n"));
    Ok(())
}

#[test]
fn test_config_file_path_and_ignores() -> Result<()> {
    let test = CliTest::with_file(
        ".keylintrc.json",
        r#"{ "path": "messages", "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("messages/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("messages/generated/en.json", CONFLICTING)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 locale file - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_config_rules_overridden_by_flag() -> Result<()> {
    let test = CliTest::with_file(
        ".keylintrc.json",
        r#"{ "rules": { "namespace-conflict": "off" } }"#,
    )?;
    test.write_file("locales/en.json", CONFLICTING)?;

    let output = test.check_command().arg("locales").output()?;
    assert_eq!(output.status.code(), Some(0));

    let output = test
        .check_command()
        .args(["locales", "--rules", r#"{"namespace-conflict": "error"}"#])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_github_format() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;
    test.write_file("locales/fr.json", INVALID)?;
    let github_output = test.root().join("github_output.txt");

    let output = test
        .check_command()
        .args(["locales", "--format", "github"])
        .env("GITHUB_OUTPUT", &github_output)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "::error file=locales/en.json,line=2,title=Namespace conflict::Namespace conflict: \"expand\" is a string value but is also used as a namespace by \"expand.all\" (line 3)\n\
         ::error file=locales/fr.json,line=2,title=Invalid value type::Invalid value type for \"count\": expected string, got number\n\
         ::error file=locales/fr.json,line=3,title=Invalid value type::Invalid value type for \"enabled\": expected string, got boolean\n\
         ::error::Found 1 namespace conflict(s) and 2 invalid value(s) in locales\n"
    );
    assert_eq!(
        fs::read_to_string(&github_output)?,
        "total-files-analyzed=2\n"
    );
    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;
    test.write_file("locales/min.json", r#"{"a":"x","a.b":"y"}"#)?;

    let output = test
        .check_command()
        .args(["locales", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["summary"]["totalFilesAnalyzed"], 2);
    assert_eq!(report["summary"]["namespaceConflicts"], 2);
    assert_eq!(report["files"][0]["filePath"], "locales/en.json");
    assert_eq!(report["files"][0]["conflicts"][0]["leafKeyLine"], 2);
    assert_eq!(
        report["files"][1]["conflicts"][0],
        serde_json::json!({ "leafKey": "a", "conflictingDescendantKey": "a.b" })
    );
    Ok(())
}

#[test]
fn test_verbose_diagnostics_on_stderr() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"title": "Title"}"#)?;

    let output = test.check_command().args(["locales", "-v"]).output()?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(err.contains("Linting i18n files in: locales"));
    assert!(err.contains("Rules: namespace-conflict=error, invalid-value=error"));
    assert!(err.contains("Analyzed locales/en.json: 0 finding(s)"));
    Ok(())
}

#[test]
fn test_github_output_written_for_any_format() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("locales/fr.json", r#"{"title": "Titre"}"#)?;
    let github_output = test.root().join("github_output.txt");

    for format in ["human", "json"] {
        fs::write(&github_output, "")?;

        let output = test
            .check_command()
            .args(["locales", "--format", format])
            .env("GITHUB_OUTPUT", &github_output)
            .output()?;

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            fs::read_to_string(&github_output)?,
            "total-files-analyzed=2\n"
        );
    }
    Ok(())
}

#[test]
fn test_github_failure_line_ignores_warning_level_rules() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", CONFLICTING)?;
    test.write_file("locales/fr.json", INVALID)?;

    let output = test
        .check_command()
        .args([
            "locales",
            "--format",
            "github",
            "--rules",
            r#"{"invalid-value": "warning"}"#,
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).ends_with(
        "::error::Found 1 namespace conflict(s) and 0 invalid value(s) in locales\n"
    ));
    Ok(())
}
