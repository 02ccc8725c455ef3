use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_icon_only_button() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/toolbar.tsx",
        r#"export function Toolbar() {
    return (
        <div>
            <button><svg viewBox="0 0 24 24" /></button>
        </div>
    );
}
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: button has no text content and no aria-label"));
    assert!(output.stdout.contains("icon-button-label"));
    assert!(output.stdout.contains("./src/components/toolbar.tsx:4:13"));
    assert!(output.stdout.contains("4 |             <button><svg viewBox=\"0 0 24 24\" /></button>"));
    assert!(output.stdout.contains("note: <button> (missing-label-and-text)"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "app/page.tsx",
        r#"
export function Page() {
    return (
        <main>
            <button>Save changes</button>
            <Button aria-label="close the settings dialog window"><CloseIcon /></Button>
            <Button aria-label={t("close")}><CloseIcon /></Button>
            <Button><CloseIcon /> {label}</Button>
        </main>
    );
}
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_label_violations() -> Result<()> {
    let test = CliTest::with_file(
        "app/menu.jsx",
        r#"const a = <Button aria-label=""><MenuIcon /></Button>;
const b = <Button aria-label="menu"><MenuIcon /></Button>;
"#,
    )?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("aria-label must not be empty"));
    assert!(output.stdout.contains("./app/menu.jsx:1:11"));
    assert!(output.stdout.contains("aria-label is too short to describe the button"));
    assert!(output.stdout.contains("note: <Button> aria-label=\"menu\" (label-too-short)"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));

    let empty_pos = output.stdout.find("must not be empty").unwrap();
    let short_pos = output.stdout.find("too short").unwrap();
    assert!(empty_pos < short_pos);

    Ok(())
}

#[test]
fn test_error_severity_fails() -> Result<()> {
    let test = CliTest::with_file("app.tsx", "const a = <button />;")?;
    test.write_file(".ariabtnrc.json", r#"{ "severity": "error" }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: button has no text content"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_custom_names_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "app.tsx",
        r#"const a = <IconButton><Glyph.Close /></IconButton>;
const b = <Button><CloseIcon /></Button>;
"#,
    )?;
    test.write_file(
        ".ariabtnrc.json",
        r#"{
  "buttonNames": [],
  "buttonComponentNames": ["IconButton"],
  "iconNameSubstring": "Glyph"
}"#,
    )?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("./app.tsx:1:11"));
    assert!(!output.stdout.contains("./app.tsx:2:"));
    assert!(output.stdout.contains("1 problem"));

    Ok(())
}

#[test]
fn test_disable_comments() -> Result<()> {
    let test = CliTest::with_file(
        "app.tsx",
        r#"export function App() {
    return (
        <div>
            {/* ariabtn-disable-next-line */}
            <button><svg /></button>
            {/* ariabtn-disable */}
            <button><svg /></button>
            <Button><CloseIcon /></Button>
            {/* ariabtn-enable */}
            <button><svg /></button>
        </div>
    );
}
"#,
    )?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("./app.tsx:10:13"));
    assert!(output.stdout.contains("1 problem"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.tsx", "export const A = () => <button>;")?;
    test.write_file("ok.tsx", "export const B = () => <button>Ok</button>;")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> ./broken.tsx"));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_verbose_parse_error_details() -> Result<()> {
    let test = CliTest::with_file("broken.tsx", "export const A = () => <button>;")?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert!(output.stderr.contains("No .ariabtnrc.json found"));
    assert!(output.stderr.contains("Warning: ./broken.tsx"));
    assert!(!output.stderr.contains("could not be parsed"));

    Ok(())
}

#[test]
fn test_ignored_directories_and_test_files() -> Result<()> {
    let test = CliTest::with_file("node_modules/lib/index.jsx", "const a = <button />;")?;
    test.write_file("dist/bundle.js", "const a = <button />;")?;
    test.write_file("src/app.test.tsx", "const a = <button />;")?;
    test.write_file("src/app.tsx", "const a = <button>Go</button>;")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_source_root_option() -> Result<()> {
    let test = CliTest::with_file("web/app.tsx", "const a = <button />;")?;
    test.write_file("other/app.tsx", "const a = <button />;")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "web"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("web/app.tsx:1:11"));
    assert!(!output.stdout.contains("other/app.tsx"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("app.tsx", "const a = <button />;")?;
    test.write_file(".ariabtnrc.json", r#"{ "iconNameSubstring": "" }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Invalid button configuration"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
