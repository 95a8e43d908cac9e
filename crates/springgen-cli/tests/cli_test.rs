//! End-to-end tests for the springgen CLI

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};

const PARAMETERS: &str = r#"
parameters:
  - name: props
    type:
      kind: object
      name: Props
      package: generated.model
  - name: props
    type:
      kind: mapped
      type: java.util.Map
      generics: [java.lang.String, java.lang.String]
  - name: page-size
    required: true
    type:
      kind: simple
      type: Integer
"#;

fn springgen(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_springgen"))
        .args(args)
        .output()?)
}

fn write_parameters(dir: &Path) -> Result<String> {
    let path = dir.join("parameters.yaml");
    std::fs::write(&path, PARAMETERS)?;
    Ok(path.to_string_lossy().to_string())
}

#[test]
fn test_render_text() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_parameters(dir.path())?;

    let output = springgen(&["render", "--input", &input])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "import generated.model.Props;",
            "import java.util.Map;",
            "import org.springframework.web.bind.annotation.RequestParam;",
            "",
            "Props props",
            "@RequestParam Map<String, String> props",
            "@RequestParam(name = \"page-size\") Integer pageSize",
        ]
    );
    Ok(())
}

#[test]
fn test_render_json_with_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_parameters(dir.path())?;
    let config = dir.path().join("springgen.toml");
    std::fs::write(&config, "map_types = [\"org.springframework.util.MultiValueMap\"]\n")?;

    let output = springgen(&[
        "render",
        "--input",
        &input,
        "--config",
        &config.to_string_lossy(),
        "--format",
        "json",
    ])?;
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    // java.util.Map is no longer a known map, the mapping came from an object schema
    assert_eq!(rendered[1]["annotate"], false);
    assert_eq!(rendered[1]["with_parameters"], true);
    assert_eq!(rendered[1]["source"], "Map<String, String> props");
    assert_eq!(rendered[2]["annotate"], true);
    Ok(())
}

#[test]
fn test_missing_input_fails() -> Result<()> {
    let output = springgen(&["render", "--input", "does-not-exist.yaml"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to load parameters"));
    Ok(())
}
