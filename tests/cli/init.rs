use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Created .decommentrc.json");

    let config: Value = serde_json::from_str(&test.read_file(".decommentrc.json")?)?;
    assert_eq!(config["safe"], Value::Bool(false));
    assert_eq!(config["trim"], Value::Bool(false));
    assert!(config["extensions"].as_array().is_some_and(|e| !e.is_empty()));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".decommentrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(stderr(&output).trim_end(), @"error: .decommentrc.json already exists");
    assert_eq!(test.read_file(".decommentrc.json")?, "{}");
    Ok(())
}
