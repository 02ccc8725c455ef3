use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn assert_config_content(content: &str) -> Result<()> {
    let json: serde_json::Value = serde_json::from_str(content)?;

    assert_eq!(json["buttonNames"], serde_json::json!(["button"]));
    assert_eq!(json["buttonComponentNames"], serde_json::json!(["Button"]));
    assert_eq!(json["iconNameSubstring"], "Icon");
    assert_eq!(json["severity"], "warning");
    assert_eq!(json["ignoreTestFiles"], true);
    assert!(
        json["ignores"]
            .as_array()
            .is_some_and(|ignores| ignores.iter().any(|p| p == "**/node_modules/**")),
        "default ignores should skip node_modules"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .ariabtnrc.json"));

    assert!(test.root().join(".ariabtnrc.json").exists());
    let content = test.read_file(".ariabtnrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".ariabtnrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".ariabtnrc.json already exists"));
    assert_eq!(test.read_file(".ariabtnrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file(
        "src/app.tsx",
        r#"export function App() { return <button>Open</button>; }"#,
    )?;

    let output = run(test.check_command())?;
    assert!(
        output.code == Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
