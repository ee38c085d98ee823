use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cmdb_client::ClientConfig;
use serde::Deserialize;

/// Contents of `cmdbctl`'s TOML configuration file.
///
/// ```toml
/// [appliance]
/// url = "https://192.168.1.99"
/// token = "..."
/// vdom = "root"
/// insecure = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub appliance: ApplianceConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplianceConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub vdom: Option<String>,
    pub insecure: Option<bool>,
    /// Path to a PEM file with an extra CA certificate.
    pub ca_cert_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub vdom: Option<String>,
    pub insecure: bool,
}

/// `<config_dir>/cmdbctl/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cmdbctl").join("config.toml"))
}

impl FileConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: FileConfig = toml::de::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly named file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Merge command line overrides into a client configuration.
    pub fn resolve(self, overrides: &Overrides) -> Result<ClientConfig> {
        let file = self.appliance;

        let Some(url) = overrides.url.clone().or(file.url) else {
            bail!("no appliance url: pass --url or set `url` under [appliance] in the config file");
        };

        let mut config = ClientConfig::new(&url);
        config.token = overrides.token.clone().or(file.token);
        config.vdom = overrides.vdom.clone().or(file.vdom);
        config.insecure = overrides.insecure || file.insecure.unwrap_or(false);
        if let Some(secs) = file.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(path) = file.ca_cert_file {
            let pem = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read CA certificate {}", path.display()))?;
            config.ca_cert = Some(pem);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let cfg: FileConfig = toml::de::from_str(
            r#"
            [appliance]
            url = "https://10.0.0.1"
            token = "tok"
            vdom = "root"
            insecure = true
            timeout_secs = 5
            "#,
        )
        .unwrap();

        let client = cfg.resolve(&Overrides::default()).unwrap();
        assert_eq!(client.url, "https://10.0.0.1");
        assert_eq!(client.token.as_deref(), Some("tok"));
        assert_eq!(client.vdom.as_deref(), Some("root"));
        assert!(client.insecure);
        assert_eq!(client.timeout_secs, 5);
        assert_eq!(client.ca_cert, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        let cfg: FileConfig = toml::de::from_str("").unwrap();
        assert!(cfg.appliance.url.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let cfg: FileConfig = toml::de::from_str(
            r#"
            [appliance]
            url = "https://file"
            vdom = "root"
            "#,
        )
        .unwrap();
        let overrides = Overrides {
            url: Some("https://flag".to_string()),
            token: Some("flagtok".to_string()),
            vdom: Some("dmz".to_string()),
            insecure: true,
        };

        let client = cfg.resolve(&overrides).unwrap();
        assert_eq!(client.url, "https://flag");
        assert_eq!(client.token.as_deref(), Some("flagtok"));
        assert_eq!(client.vdom.as_deref(), Some("dmz"));
        assert!(client.insecure);
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let err = FileConfig::default()
            .resolve(&Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("--url"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("cmdbctl-does-not-exist.toml");
        assert!(FileConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_ca_cert_file_is_read() {
        let path = std::env::temp_dir().join(format!("cmdbctl-ca-{}.pem", std::process::id()));
        std::fs::write(&path, "-----BEGIN CERTIFICATE-----\n").unwrap();

        let cfg = FileConfig {
            appliance: ApplianceConfig {
                url: Some("https://fw".to_string()),
                ca_cert_file: Some(path.clone()),
                ..Default::default()
            },
        };
        let client = cfg.resolve(&Overrides::default()).unwrap();
        assert_eq!(
            client.ca_cert.as_deref(),
            Some("-----BEGIN CERTIFICATE-----\n")
        );

        std::fs::remove_file(&path).unwrap();
    }
}
