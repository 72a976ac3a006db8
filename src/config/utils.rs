#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use chrono::Local;
use eyre::{Context, Result};
use log::LevelFilter;
use regex::Regex;
use std::{io::Write, str::FromStr};

use super::{Configuration, LogConfig};

/// Reads and parses the TOML configuration, expanding environment
/// references in the store url and api key.
pub fn load_configuration(config_path: &str) -> Result<Configuration> {
    let config =
        std::fs::read_to_string(config_path).wrap_err(format!("reading {}", config_path))?;
    let mut config: Configuration = toml::from_str(&config).wrap_err("parsing configuration")?;

    config.store.url = expand_env(&config.store.url).wrap_err("expanding store url")?;
    if let Some(api_key) = config.store.api_key.as_deref() {
        config.store.api_key = Some(expand_env(api_key).wrap_err("expanding store api key")?);
    }
    Ok(config)
}

pub fn init_logger(config: &LogConfig) -> Result<()> {
    let path = resolve_path(&config.file.path)
        .wrap_err(format!("resolving log file path {}", config.file.path))?;
    init_log_dir(&path)?;
    let log_file = Box::new(
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.file.append)
            .truncate(!config.file.append)
            .open(&path)
            .wrap_err(format!("opening log file {}", path))?,
    );

    let raw_level = config.level.as_deref().unwrap_or("info");
    let log_level = LevelFilter::from_str(raw_level)?;

    let mut builder = env_logger::Builder::new();

    for filter in config.filters.as_deref().unwrap_or_default() {
        let module_level = LevelFilter::from_str(filter.level.as_deref().unwrap_or(raw_level))
            .unwrap_or(log_level);
        builder.filter(filter.module.as_deref(), module_level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}/{}:{} {} [{}] - {}",
                record.module_path().unwrap_or("unknown"),
                basename(record.file().unwrap_or("unknown")),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(log_file))
        .filter(None, log_level)
        .try_init()?;
    Ok(())
}

pub fn basename(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// expand_env replaces `$VAR` and `${VAR}` references with the value of the
/// environment variable. Unset variables expand to an empty string.
pub fn expand_env(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").wrap_err("compiling regex")?;

    let mut ret = String::new();
    let mut last_pos = 0;

    for cap in re.captures_iter(input) {
        let (Some(full_match), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        ret.push_str(&input[last_pos..full_match.start()]);
        ret.push_str(&std::env::var(name.as_str()).unwrap_or_default());
        last_pos = full_match.end();
    }
    ret.push_str(&input[last_pos..]);
    Ok(ret)
}

/// resolve_path expands environment variables in the input path and
/// resolves it to an absolute path.
pub fn resolve_path(path: &str) -> Result<String> {
    let expanded = expand_env(path)?;
    let path = std::path::absolute(expanded.as_str())
        .wrap_err(format!("resolving path {}", expanded))?;
    Ok(path.to_string_lossy().to_string())
}

/// lookup_config_path trys to look up the config path at:
/// * $XDG_CONFIG_HOME/fde-dashboard/config.toml
/// * $HOME/.config/fde-dashboard/config.toml
/// * $HOME/.fde-dashboard.toml
pub fn lookup_config_path() -> Option<String> {
    let paths = &[
        format!(
            "{}/fde-dashboard/config.toml",
            env_or_current("XDG_CONFIG_HOME")
        ),
        format!("{}/.config/fde-dashboard/config.toml", env_or_current("HOME")),
        format!("{}/.fde-dashboard.toml", env_or_current("HOME")),
    ];

    paths
        .iter()
        .find(|path| std::path::Path::new(path).exists())
        .cloned()
}

fn env_or_current(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| ".".to_string())
}

fn init_log_dir(path: &str) -> Result<()> {
    let dir = std::path::Path::new(path)
        .parent()
        .unwrap_or(std::path::Path::new("."));
    std::fs::create_dir_all(dir).wrap_err(format!("creating directory {}", dir.display()))?;
    Ok(())
}
