use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use gomoku_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "gomoku_server_config.yaml";
const CRATE_DIR: &str = env!("CARGO_MANIFEST_DIR");

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen_address: String,
    pub port: u16,
    pub static_files_path: String,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .listen_address
            .parse()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_address, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Directory served under `/static`. A relative path is taken from
    /// `base_dir` (the directory of the config file it was read from), or
    /// from the server crate when the config is the built-in default.
    pub fn resolve_static_dir(&self, base_dir: Option<&Path>) -> PathBuf {
        let path = Path::new(&self.static_files_path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match base_dir {
            Some(dir) => dir.join(path),
            None => Path::new(CRATE_DIR).join(path),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.port == 0 {
            return Err("Port must be between 1 and 65535".to_string());
        }
        if self.static_files_path.trim().is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0".to_string(),
            port: 5000,
            static_files_path: "static".to_string(),
            log_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_common::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = ServerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ServerConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_log_prefix_may_be_omitted() {
        let serializer = YamlConfigSerializer::new();
        let config: ServerConfig = serializer
            .deserialize("listen_address: 127.0.0.1\nport: 8080\nstatic_files_path: web\n")
            .unwrap();
        assert_eq!(config.log_prefix, None);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_validation_failures() {
        let config = ServerConfig {
            listen_address: "not-an-ip".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().unwrap_err().starts_with("Invalid listen address"));

        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            static_files_path: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_manager_reads_file() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir()
            .join(format!("temp_gomoku_server_config_{}.yaml", random_number));
        std::fs::write(
            &path,
            "listen_address: \"::1\"\nport: 7000\nstatic_files_path: assets\nlog_prefix: Gomoku\n",
        )
        .unwrap();

        let config = get_config_manager(&path).get_config().unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:7000");
        assert_eq!(config.log_prefix.as_deref(), Some("Gomoku"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_default_static_dir_points_at_bundled_assets() {
        let dir = ServerConfig::default().resolve_static_dir(None);
        assert!(dir.is_absolute());
        assert!(dir.join("script.js").is_file());
        assert!(dir.join("style.css").is_file());
    }

    #[test]
    fn test_relative_static_dir_follows_config_file_directory() {
        let config = ServerConfig {
            static_files_path: "web".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.resolve_static_dir(Some(Path::new("/etc/gomoku"))),
            Path::new("/etc/gomoku/web")
        );

        let absolute = std::env::temp_dir().join("gomoku_assets");
        let config = ServerConfig {
            static_files_path: absolute.display().to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.resolve_static_dir(Some(Path::new("/etc/gomoku"))), absolute);
    }
}
