//! File-based configuration loader

use std::path::{Path, PathBuf};

use crate::core::{ConfigError, ConfigFormat, ConfigResult, GatewayConfig};

/// File-based configuration loader
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    /// Base directory for relative paths
    pub base_dir: Option<PathBuf>,
    /// Whether to allow missing files
    pub allow_missing: bool,
}

impl FileLoader {
    /// Create a new file loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new file loader with base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            allow_missing: false,
        }
    }

    /// Set whether to allow missing files
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    /// Resolve path relative to base directory
    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) if path.is_relative() => base_dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load the gateway document from `path`
    pub async fn load(&self, path: impl AsRef<Path>) -> ConfigResult<GatewayConfig> {
        let path = self.resolve_path(path.as_ref());
        let format = ConfigFormat::from_path(&path)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.allow_missing {
                    tracing::debug!(path = %path.display(), "Configuration file missing, using defaults");
                    return Ok(GatewayConfig::default());
                }
                return Err(ConfigError::file_not_found(path));
            }
            Err(e) => return Err(ConfigError::file_read_error(path, e.to_string())),
        };

        let config = parse_content(&content, format, &path)?;
        tracing::debug!(path = %path.display(), %format, "Loaded configuration");
        Ok(config)
    }
}

/// Load the gateway document, falling back to defaults when the file is missing
pub async fn load_config(path: impl AsRef<Path>) -> ConfigResult<GatewayConfig> {
    FileLoader::new().allow_missing(true).load(path).await
}

/// Parse configuration content based on format
pub(crate) fn parse_content(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> ConfigResult<GatewayConfig> {
    if content.trim().is_empty() {
        return Ok(GatewayConfig::default());
    }
    let parsed = match format {
        ConfigFormat::Yaml => serde_yaml::from_str::<GatewayConfig>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("YAML parse error: {e}"))),
        ConfigFormat::Toml => toml::from_str::<GatewayConfig>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("TOML parse error: {e}"))),
        ConfigFormat::Json => serde_json::from_str::<GatewayConfig>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("JSON parse error: {e}"))),
    }?;
    Ok(parsed.normalize())
}

/// Serialize the document in the given format
pub(crate) fn render_content(config: &GatewayConfig, format: ConfigFormat) -> ConfigResult<String> {
    match format {
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| ConfigError::serialize_error(format, e.to_string()))
        }
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::serialize_error(format, e.to_string()))
        }
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::serialize_error(format, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_load_yaml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "port: 9000\nauth-dir: /var/lib/authgate\nauth-priority:\n  acct1.json: 5\n  acct2.json: 0\n",
        )
        .unwrap();

        let config = FileLoader::new().load(&path).await.unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.auth_dir, PathBuf::from("/var/lib/authgate"));
        assert_eq!(config.auth_priority("acct1.json"), Some(5));
        assert_eq!(config.auth_priority("acct2.json"), Some(0));
        assert_eq!(config.host, GatewayConfig::default().host);
    }

    #[tokio::test]
    async fn test_missing_file_rejected_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileLoader::new().load(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileLoader::with_base_dir(dir.path())
            .allow_missing(true)
            .load("absent.yaml")
            .await
            .unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[tokio::test]
    async fn test_parse_error_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileLoader::new().load(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_render_then_parse_toml() {
        let mut config = GatewayConfig::default();
        config.set_auth_priority("acct1.json", -3);

        let rendered = render_content(&config, ConfigFormat::Toml).unwrap();
        let parsed = parse_content(&rendered, ConfigFormat::Toml, Path::new("x.toml")).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let parsed = parse_content("  \n", ConfigFormat::Yaml, Path::new("config.yaml")).unwrap();
        assert_eq!(parsed, GatewayConfig::default());
    }
}
