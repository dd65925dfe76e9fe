use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where the directive file lives unless told otherwise.
pub const DEFAULT_CONF_PATH: &str = "/etc/paxd.conf";

/// Environment variable overriding [`DEFAULT_CONF_PATH`].
pub const CONF_ENV: &str = "PAXD_CONF";

/// Runtime settings for paxd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaxdConfig {
    /// The directive file read by `apply`.
    pub conf_path: PathBuf,
}

impl Default for PaxdConfig {
    fn default() -> Self {
        Self {
            conf_path: PathBuf::from(DEFAULT_CONF_PATH),
        }
    }
}

impl PaxdConfig {
    /// Resolve settings: an explicit path wins, then the environment, then
    /// the default. Empty values count as unset.
    pub fn resolve(explicit: Option<PathBuf>, env: Option<OsString>) -> Self {
        let conf_path = explicit
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONF_PATH));
        Self { conf_path }
    }

    pub fn conf_path(&self) -> &Path {
        &self.conf_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            PaxdConfig::default().conf_path(),
            Path::new("/etc/paxd.conf")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = PaxdConfig::resolve(
            Some(PathBuf::from("/tmp/a.conf")),
            Some(OsString::from("/tmp/b.conf")),
        );
        assert_eq!(config.conf_path(), Path::new("/tmp/a.conf"));
    }

    #[test]
    fn test_env_beats_default() {
        let config = PaxdConfig::resolve(None, Some(OsString::from("/tmp/b.conf")));
        assert_eq!(config.conf_path(), Path::new("/tmp/b.conf"));
    }

    #[test]
    fn test_empty_values_fall_through() {
        let config = PaxdConfig::resolve(Some(PathBuf::new()), Some(OsString::new()));
        assert_eq!(config, PaxdConfig::default());
    }
}
