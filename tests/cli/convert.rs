use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const BASIC_SHEET: &str = "\
C,x,en,fr
F,out/{lang}.json
greet,Hello,Bonjour
bye,Bye,
";

#[test]
fn test_basic_conversion() -> Result<()> {
    let test = CliTest::with_file("strings.csv", BASIC_SHEET)?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_file("out/en.json")?,
        "{\n  \"greet\": \"Hello\",\n  \"bye\": \"Bye\"\n}\n"
    );
    // Missing "bye" in fr falls back to the default-language value.
    assert_eq!(
        test.read_file("out/fr.json")?,
        "{\n  \"greet\": \"Bonjour\",\n  \"bye\": \"Bye\"\n}\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("Language files created"), "{stdout}");
    assert!(stdout.contains("3/3"), "{stdout}");
    assert!(stdout.contains("100.00%"), "{stdout}");
    assert!(stdout.contains("2/3 (-1)"), "{stdout}");
    assert!(stdout.contains("66.67%"), "{stdout}");
    assert!(!stdout.contains("warning:"), "{stdout}");

    Ok(())
}

#[test]
fn test_missing_source_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.convert_command("nope.csv").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("was not found"), "{stderr}");
    Ok(())
}

#[test]
fn test_duplicate_ids_are_warned_about() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
F,{lang}.json
greet,Hello
greet,Hi
greet,Hey
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(0));

    // Last value wins, the id is reported once.
    assert_eq!(test.read_file("en.json")?, "{\n  \"greet\": \"Hey\"\n}\n");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(
        stdout.contains("warning: 1 duplicate string id was overwritten:"),
        "{stdout}"
    );
    assert!(stdout.contains("- greet"), "{stdout}");
    Ok(())
}

#[test]
fn test_second_languages_row_fails() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
C,x,fr
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("already declared"), "{stderr}");
    Ok(())
}

#[test]
fn test_string_row_before_destination_fails() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
greet,Hello
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("before destination row"), "{stderr}");
    Ok(())
}

#[test]
fn test_blank_default_value_fails() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en,fr
F,{lang}.json
greet,,Bonjour
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("no value for the default language"), "{stderr}");
    Ok(())
}

#[test]
fn test_languages_only_sheet_succeeds_with_no_files() -> Result<()> {
    let test = CliTest::with_file("strings.csv", "C,x,en,fr\n")?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert!(!test.root().join("en.json").exists());
    assert!(!test.root().join("fr.json").exists());
    Ok(())
}

#[test]
fn test_multiple_destinations_reset_content() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
F,menu/{lang}.json
open,Open
F,dialog/{lang}.json
close,Close
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(test.read_file("menu/en.json")?, "{\n  \"open\": \"Open\"\n}\n");
    assert_eq!(test.read_file("dialog/en.json")?, "{\n  \"close\": \"Close\"\n}\n");
    Ok(())
}

#[test]
fn test_conversion_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("strings.csv", BASIC_SHEET)?;

    let first = test.convert_command("strings.csv").output()?;
    assert_eq!(first.status.code(), Some(0));
    let en_first = test.read_file("out/en.json")?;
    let fr_first = test.read_file("out/fr.json")?;

    let second = test.convert_command("strings.csv").output()?;
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(test.read_file("out/en.json")?, en_first);
    assert_eq!(test.read_file("out/fr.json")?, fr_first);
    Ok(())
}

#[test]
fn test_config_placeholder_override() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
F,out/%lang%.json
greet,Hello
",
    )?;
    test.write_file(".sheetlocrc.json", r#"{"placeholder": "%lang%"}"#)?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(test.read_file("out/en.json")?, "{\n  \"greet\": \"Hello\"\n}\n");
    Ok(())
}

#[test]
fn test_verbose_lists_written_files() -> Result<()> {
    let test = CliTest::with_file("strings.csv", BASIC_SHEET)?;

    let output = test.convert_command("strings.csv").arg("--verbose").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("wrote"), "{stdout}");
    assert!(stdout.contains("en.json"), "{stdout}");
    assert!(stdout.contains("fr.json"), "{stdout}");
    Ok(())
}

#[test]
fn test_files_flushed_before_an_error_survive() -> Result<()> {
    // The first destination is written when the second "F" row replaces it;
    // the failure afterwards does not roll that back.
    let test = CliTest::with_file(
        "strings.csv",
        "\
C,x,en
F,a/{lang}.json
one,1
F,b/{lang}.json
bad,,x
",
    )?;

    let output = test.convert_command("strings.csv").output()?;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(test.read_file("a/en.json")?, "{\n  \"one\": \"1\"\n}\n");
    assert!(!test.root().join("b/en.json").exists());
    Ok(())
}
