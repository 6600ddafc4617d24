//! `liveroom config` — show the effective configuration.

use anyhow::{Context, Result};

use liveroom_config::{collect_redacted_paths, redact, LiveroomConfig};

/// Render `config` as YAML with cookies and tokens masked. Each masked
/// field is listed in a leading `# redacted:` comment.
pub fn render_redacted(config: &LiveroomConfig) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    let yaml = serde_yaml::to_string(&redact(&value)).context("Failed to render config as YAML")?;

    let mut out = String::new();
    for path in collect_redacted_paths(&value) {
        out.push_str(&format!("# redacted: {path}\n"));
    }
    out.push_str(&yaml);
    Ok(out)
}

pub fn run(config: &LiveroomConfig) -> Result<()> {
    print!("{}", render_redacted(config)?);
    Ok(())
}
