use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| BookshelfError::Config(format!("Invalid server address: {}", e)))
    }
}

/// How the store assigns ids to new books and authors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Numeric ids drawn from `[0, 10000)`, redrawn on collision
    #[default]
    Random,
    /// Monotonic counter continuing after the largest known numeric id
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_mode: IdMode,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_mode: IdMode::default(),
        }
    }
}

impl BookshelfConfig {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BookshelfError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: BookshelfConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Search upward from `start_path` for a config file, falling back to
    /// defaults when none exists.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookshelfConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.store.seed);
        assert_eq!(config.store.id_mode, IdMode::Random);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "store:\n  id_mode: sequential\n").unwrap();

        let config = BookshelfConfig::load(&path).unwrap();
        assert_eq!(config.store.id_mode, IdMode::Sequential);
        assert!(config.store.seed);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_discover_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = BookshelfConfig::default();
        config.server.port = 8080;
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let found = BookshelfConfig::discover(&nested).unwrap();
        assert_eq!(found.server.port, 8080);
    }

    #[test]
    fn test_discover_without_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = BookshelfConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config, BookshelfConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = BookshelfConfig::load(&temp_dir.path().join("nope.yml"));
        assert!(matches!(result, Err(BookshelfError::Config(_))));
    }

    #[test]
    fn test_socket_addr() {
        let settings = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(settings.socket_addr().unwrap().port(), 9000);

        let bad = ServerSettings {
            host: "not a host".to_string(),
            port: 9000,
        };
        assert!(bad.socket_addr().is_err());
    }
}
