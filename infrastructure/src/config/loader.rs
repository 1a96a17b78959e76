//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["logport.toml", ".logport.toml"];

/// Prefix of environment overrides, e.g. `LOGPORT_LEVEL=debug`
const ENV_PREFIX: &str = "LOGPORT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `LOGPORT_*`, nested keys split on `__`
    ///    (`LOGPORT_ENCODER__MESSAGE_KEY=message`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./logport.toml` or `./.logport.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/logport/config.toml`
    /// 5. Default values
    ///
    /// An explicit path that does not exist is an error; the discovered
    /// global and project files are optional.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path {
            Self::require_file(path)?;
        }

        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Loading project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            debug!("Loading config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment)
    }

    /// Load a single file on top of the defaults, ignoring other sources
    pub fn load_file(path: impl AsRef<Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::require_file(path.as_ref())?;
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path.as_ref()));
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn require_file(path: &Path) -> Result<(), Box<figment::Error>> {
        if path.is_file() {
            Ok(())
        } else {
            Err(Box::new(figment::Error::from(format!(
                "config file {} does not exist",
                path.display()
            ))))
        }
    }

    fn extract(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/logport/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("logport").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./logport.toml or ./.logport.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendKind;
    use crate::logging::LevelCase;
    use figment::Jail;
    use logport_domain::Level;

    /// Point the platform config directory into the jail so a real global
    /// config on the host can't leak into the test.
    fn isolate_global_config(jail: &mut Jail) {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
    }

    fn write_global_config(contents: &str) -> figment::error::Result<()> {
        let path = ConfigLoader::global_config_path().ok_or("no config directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        std::fs::write(&path, contents).map_err(|e| e.to_string())?;
        Ok(())
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.backend, BackendKind::Json);
        assert_eq!(config.level, Level::Info);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("logport"));
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logport.toml");
        std::fs::write(&path, "level = \"warn\"\n\n[encoder]\nmessage_key = \"message\"\n").unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.encoder.message_key, "message");
        assert_eq!(config.encoder.level_key, "level");
        assert_eq!(config.output, "stdout");
    }

    #[test]
    fn test_load_file_reports_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "backend = \"syslog\"\n").unwrap();

        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_load_file_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_rejects_missing_explicit_path() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);

            let missing = PathBuf::from("missing.toml");
            let err = ConfigLoader::load(Some(&missing)).unwrap_err();
            assert!(err.to_string().contains("missing.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend, BackendKind::Json);
            assert_eq!(config.level, Level::Info);
            assert_eq!(config.encoder.message_key, "msg");
            Ok(())
        });
    }

    #[test]
    fn test_project_config_overrides_global() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            write_global_config("level = \"debug\"\noutput = \"stderr\"\n")?;
            jail.create_file("logport.toml", "level = \"warn\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.level, Level::Warn);
            assert_eq!(config.output, "stderr");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_overrides_project() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "logport.toml",
                "level = \"warn\"\noutput = \"stderr\"\n\n[encoder]\nlevel_case = \"upper\"\n",
            )?;
            jail.create_file(
                "explicit.toml",
                "level = \"error\"\n\n[encoder]\nmessage_key = \"text\"\n",
            )?;

            let explicit = PathBuf::from("explicit.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.level, Level::Error);
            assert_eq!(config.encoder.message_key, "text");
            assert_eq!(config.output, "stderr");
            assert_eq!(config.encoder.level_case, LevelCase::Upper);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_config() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("logport.toml", "backend = \"tracing\"\n")?;
            jail.create_file(
                "explicit.toml",
                "level = \"error\"\n\n[encoder]\nmessage_key = \"text\"\n",
            )?;
            jail.set_env("LOGPORT_LEVEL", "debug");
            jail.set_env("LOGPORT_ENCODER__MESSAGE_KEY", "message");

            let explicit = PathBuf::from("explicit.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.level, Level::Debug);
            assert_eq!(config.encoder.message_key, "message");
            assert_eq!(config.encoder.level_key, "level");
            assert_eq!(config.backend, BackendKind::Tracing);
            Ok(())
        });
    }
}
