use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, ENGLISH, FRENCH, GERMAN, stderr, stdout};

fn confidence(value: &str) -> f64 {
    value.trim_end_matches('%').parse().unwrap()
}

#[test]
fn test_expected_language_only() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", ENGLISH)])?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 string - all in English"));
    assert_eq!(
        test.read_file("output.csv")?,
        "Name,Text,Language,Confidence\r\n"
    );

    Ok(())
}

#[test]
fn test_mismatch_is_reported() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH), ("title", ENGLISH)])?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let rows = test.report_rows("output.csv")?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "greeting");
    assert_eq!(rows[0][1], FRENCH);
    assert_eq!(rows[0][2], "French");
    assert!(rows[0][3].ends_with('%'));

    let out = stdout(&output);
    assert!(out.contains("1 of 2 strings not detected as English"));
    assert!(out.contains("Report written to output.csv"));

    Ok(())
}

#[test]
fn test_skipped_entries() -> Result<()> {
    let test = CliTest::with_file(
        "strings.xml",
        &format!(
            r#"<resources>
    <string name="empty"></string>
    <string name="hidden" translatable="false">{FRENCH}</string>
    <string name="visible">{GERMAN}</string>
</resources>"#
        ),
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let rows = test.report_rows("output.csv")?;
    let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["visible"]);
    assert_eq!(rows[0][2], "German");

    // Skips are reported without --verbose
    let err = stderr(&output);
    assert!(err.contains("Skipping empty text - <string name='empty'></string> at line 2"));
    assert!(err.contains("Skipping <string name='hidden'> (translatable=false) at line 3"));
    assert!(err.contains("Output created!"));

    Ok(())
}

#[test]
fn test_rows_sorted_by_confidence() -> Result<()> {
    let test = CliTest::with_strings(&[
        ("short_fr", "Merci beaucoup"),
        ("fr", FRENCH),
        ("de", GERMAN),
        ("en", ENGLISH),
    ])?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let rows = test.report_rows("output.csv")?;
    assert!(rows.iter().all(|r| r[2] != "English"));
    assert!(
        rows.windows(2)
            .all(|w| confidence(&w[0][3]) >= confidence(&w[1][3]))
    );

    Ok(())
}

#[test]
fn test_expected_language_case_insensitive() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH), ("title", ENGLISH)])?;

    let output = test
        .check_command()
        .args(["--language", "french"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let rows = test.report_rows("output.csv")?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "title");
    assert_eq!(rows[0][2], "English");

    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let test = CliTest::with_strings(&[("a", FRENCH), ("b", GERMAN), ("c", ENGLISH)])?;

    test.check_command().output()?;
    let first = test.read_file("output.csv")?;
    test.check_command().output()?;
    let second = test.read_file("output.csv")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_strict_fails_on_mismatch() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH)])?;

    let output = test.check_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));

    let test = CliTest::with_strings(&[("greeting", ENGLISH)])?;

    let output = test.check_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH), ("title", ENGLISH)])?;
    test.write_file(
        ".lidcheckrc.json",
        r#"{
         "resourcePath": "strings.xml",
         "outputPath": "reports/fr.csv",
         "language": "French"
     }"#,
    )?;
    std::fs::create_dir(test.root().join("reports"))?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let rows = test.report_rows("reports/fr.csv")?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "title");

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH)])?;
    test.write_file(
        ".lidcheckrc.json",
        &format!(
            r#"{{ "resourcePath": "{}", "outputPath": "{}" }}"#,
            test.root().join("strings.xml").display(),
            test.root().join("output.csv").display()
        ),
    )?;
    std::fs::create_dir_all(test.root().join("app/src"))?;

    let output = test
        .command()
        .arg("check")
        .current_dir(test.root().join("app/src"))
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(test.report_rows("output.csv")?.len(), 1);

    Ok(())
}

#[test]
fn test_default_output_path() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", ENGLISH)])?;

    let output = test
        .command()
        .args(["check", "--resource", "strings.xml"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("'outputPath' is missing"));
    assert!(test.root().join("output.csv").exists());

    Ok(())
}

#[test]
fn test_missing_resource_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'resourcePath' is missing"));

    Ok(())
}

#[test]
fn test_nonexistent_resource() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("strings.xml does not exist"));
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}

#[test]
fn test_malformed_resource() -> Result<()> {
    let test = CliTest::with_file("strings.xml", "<resources><string name=\"x\">oops")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse resource file"));
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}

#[test]
fn test_invalid_config_json() -> Result<()> {
    let test = CliTest::with_file(".lidcheckrc.json", "{ resourcePath: ")?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Config file is not valid JSON"));

    Ok(())
}

#[cfg(not(feature = "fasttext"))]
#[test]
fn test_fasttext_requires_feature() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH)])?;

    let output = test
        .check_command()
        .args(["--detector", "fasttext"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("detector 'fasttext' is not available"));
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}

#[cfg(feature = "fasttext")]
#[test]
fn test_missing_model_is_fatal() -> Result<()> {
    let test = CliTest::with_strings(&[("greeting", FRENCH)])?;

    let output = test
        .check_command()
        .args(["--detector", "fasttext", "--model", "models/missing.ftz"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to load language model"));
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("check"));
    assert!(out.contains("init"));

    Ok(())
}
