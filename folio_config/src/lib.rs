use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");
pub const DEV_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.dev.toml");

/// Environment variable holding a colon-separated list of config files.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Loads the config files listed in `FOLIO_CONFIG`, or the bundled
/// `config.toml` if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    load_paths(config_paths().as_slice())
}

/// Loads the bundled config with the local development overrides applied.
pub fn load_dev_config() -> anyhow::Result<Config> {
    load_paths(&[Path::new(DEFAULT_CONFIG_PATH), Path::new(DEV_CONFIG_PATH)])
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the given config files in order, then applies each inline TOML
/// snippet in `overrides`. Later sources take precedence.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn config_paths() -> Vec<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![DEFAULT_CONFIG_PATH.into()],
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub emailjs: EmailJsConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub send_endpoint_override: Option<Url>,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(config.emailjs.send_endpoint_override.is_none());
        assert_eq!(
            config.emailjs.timeout.map(|x| x.as_secs()),
            Some(30),
        );
    }

    #[test]
    fn load_dev_config_overrides_endpoint() {
        let config = load_dev_config().unwrap();
        assert_eq!(config.emailjs.public_key, "test-public-key");
        assert_eq!(
            config.emailjs.send_endpoint_override.unwrap().as_str(),
            "http://127.0.0.1:8003/api/v1.0/email/send"
        );
    }

    #[test]
    fn inline_override() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["emailjs.public_key = \"other\"", "emailjs.timeout = \"1m 5s\""],
        )
        .unwrap();
        assert_eq!(config.emailjs.public_key, "other");
        assert_eq!(config.emailjs.timeout.map(|x| x.as_secs()), Some(65));
        assert_eq!(config.emailjs.service_id, "service_portfolio");
    }

    #[test]
    fn missing_file() {
        let err = load_paths(&[Path::new("/nonexistent/folio.toml")]).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
