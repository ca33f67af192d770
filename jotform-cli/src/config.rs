// jotform-cli/src/config.rs
use anyhow::{anyhow, bail, Result};
use directories::BaseDirs;
use jotform_client::{JotformClient, OutputFormat, ReqwestClient};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// API key from https://www.jotform.com/myaccount/api
    #[serde(default)]
    pub api_key: String,
    /// Alternate API host, e.g. https://eu-api.jotform.com for EU accounts
    #[serde(default)]
    pub base_url: Option<String>,
    /// Response format: "json" (default) or "xml"
    #[serde(default)]
    pub output: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variables override the file
        if let Ok(api_key) = std::env::var("JOTFORM_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(base_url) = std::env::var("JOTFORM_BASE_URL") {
            config.base_url = Some(base_url);
        }
        if let Ok(output) = std::env::var("JOTFORM_OUTPUT") {
            config.output = Some(output);
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        let config_path = config_dir.join("config.toml");

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        // Config holds the API key; keep it owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&config_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&config_path, perms)?;
        }

        Ok(())
    }

    fn config_dir() -> Result<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
        Ok(base_dirs.config_dir().join("jotform-cli"))
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_deref() {
            None | Some("json") => Ok(OutputFormat::Json),
            Some("xml") => Ok(OutputFormat::Xml),
            Some(other) => bail!("Unknown output format '{}', expected json or xml", other),
        }
    }

    /// Build an API client from this configuration.
    pub fn client(&self) -> Result<JotformClient<ReqwestClient>> {
        if self.api_key.is_empty() {
            bail!("No API key configured. Run `jotform setup` or set JOTFORM_API_KEY");
        }

        let mut client =
            JotformClient::new(self.api_key.clone()).with_output_format(self.output_format()?);
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_format_is_json() {
        let config = Config::default();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let config = Config {
            output: Some("yaml".into()),
            ..Default::default()
        };
        assert!(config.output_format().is_err());
    }

    #[test]
    fn client_requires_an_api_key() {
        let config = Config::default();
        assert!(config.client().is_err());
    }
}
