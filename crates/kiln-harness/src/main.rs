use anyhow::{Context, Result, bail};

use kiln_engine::core::{HarnessConfig, QuitKeyPolicy};
use kiln_engine::input::Key;
use kiln_engine::logging::{LoggingConfig, init_logging};
use kiln_engine::window::Runtime;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = apply_overrides(HarnessConfig::new(WIDTH, HEIGHT), |name| {
        std::env::var(name).ok()
    })?;

    log::debug!("starting with {config:?}");

    Runtime::run(config)
}

/// Applies `KILN_*` overrides read through `lookup`.
fn apply_overrides<F>(mut config: HarnessConfig, lookup: F) -> Result<HarnessConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("KILN_WIDTH") {
        config.context.width = v.trim().parse().context("KILN_WIDTH must be a pixel count")?;
    }
    if let Some(v) = lookup("KILN_HEIGHT") {
        config.context.height = v.trim().parse().context("KILN_HEIGHT must be a pixel count")?;
    }
    if let Some(v) = lookup("KILN_STRICT") {
        config.strict = parse_flag("KILN_STRICT", &v)?;
    }
    if let Some(v) = lookup("KILN_ABRUPT_QUIT") {
        if parse_flag("KILN_ABRUPT_QUIT", &v)? {
            config.quit_policy = QuitKeyPolicy::Abrupt;
        }
    }
    if let Some(v) = lookup("KILN_QUIT_KEY") {
        config.quit_key = Key::from_name(v.trim())
            .with_context(|| format!("KILN_QUIT_KEY: unknown key {v:?}"))?;
    }

    Ok(config)
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{name}: expected a boolean, got {other:?}"),
    }
}
