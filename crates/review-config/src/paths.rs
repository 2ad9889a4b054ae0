use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;

pub const BASE_PATH_ENV: &str = "REVIEWS_BASE_PATH";

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    /// `REVIEWS_BASE_PATH` when set, otherwise `<platform config dir>/reviews`
    pub fn resolve() -> Result<Self> {
        Self::from_base_override(std::env::var_os(BASE_PATH_ENV))
    }

    fn from_base_override(base: Option<OsString>) -> Result<Self> {
        match base.filter(|value| !value.is_empty()) {
            Some(base) => Ok(Self::from_base(PathBuf::from(base))),
            None => {
                let config_dir = dirs::config_dir()
                    .ok_or_else(|| anyhow::anyhow!("Could not determine config directory; set {}", BASE_PATH_ENV))?;
                Ok(Self::from_base(config_dir.join("reviews")))
            }
        }
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self { config_dir: base }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base_override(Some(dir.path().as_os_str().to_os_string())).unwrap();
        assert_eq!(paths.config_file(), dir.path().join("config.toml"));
    }

    #[test]
    fn test_without_override_uses_platform_config_dir() {
        let Some(config_dir) = dirs::config_dir() else {
            return;
        };
        let expected = config_dir.join("reviews").join("config.toml");

        let paths = PathManager::from_base_override(None).unwrap();
        assert_eq!(paths.config_file(), expected);

        // An empty variable counts as unset
        let paths = PathManager::from_base_override(Some(OsString::new())).unwrap();
        assert_eq!(paths.config_file(), expected);
    }

    #[test]
    fn test_resolve_reads_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(BASE_PATH_ENV, dir.path());
        let with_env = PathManager::resolve().unwrap().config_file();
        std::env::remove_var(BASE_PATH_ENV);
        assert_eq!(with_env, dir.path().join("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            let without_env = PathManager::resolve().unwrap().config_file();
            assert_eq!(without_env, config_dir.join("reviews").join("config.toml"));
        }
    }
}
