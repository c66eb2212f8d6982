use anyhow::{bail, Context};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use termjack_core::{ShoeKind, TableConfig};

pub const CONFIG_ENV: &str = "TERMJACK_CONFIG";
pub const SEED_ENV: &str = "TERMJACK_SEED";
pub const SHOE_ENV: &str = "TERMJACK_SHOE";
pub const LOG_ENV: &str = "TERMJACK_LOG";

pub fn load_table_config(path: &Path) -> anyhow::Result<TableConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: TableConfig =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    parse_level(&config.log_level).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn table_config_from_env() -> anyhow::Result<TableConfig> {
    resolve_table_config(|key| std::env::var(key).ok())
}

/// Builds the config from an arbitrary variable lookup so callers other than the process
/// environment can drive it.
pub fn resolve_table_config<F>(lookup: F) -> anyhow::Result<TableConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_ENV).filter(|value| !value.trim().is_empty()) {
        Some(path) => load_table_config(&PathBuf::from(path))?,
        None => TableConfig::default(),
    };

    if let Some(value) = lookup(SEED_ENV) {
        config.seed = Some(parse_seed(&value).with_context(|| format!("read {SEED_ENV}"))?);
    }
    if let Some(value) = lookup(SHOE_ENV) {
        config.shoe = match ShoeKind::from_name(&value) {
            Some(shoe) => shoe,
            None => bail!("unknown {SHOE_ENV} value {value:?} (expected infinite or deck)"),
        };
    }
    if let Some(value) = lookup(LOG_ENV) {
        parse_level(&value).with_context(|| format!("read {LOG_ENV}"))?;
        config.log_level = value.trim().to_string();
    }
    log::debug!("table config resolved: {config:?}");
    Ok(config)
}

/// Decimal, or hexadecimal with a `0x` prefix.
pub fn parse_seed(value: &str) -> anyhow::Result<u64> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.with_context(|| format!("invalid seed {value:?}"))
}

pub fn parse_level(value: &str) -> anyhow::Result<LevelFilter> {
    LevelFilter::from_str(value.trim()).with_context(|| format!("invalid log level {value:?}"))
}
