//! Runtime settings for the two diagnostic commands.

use std::path::{Path, PathBuf};

use crate::error::{ProbeError, Result};

use super::env_file::EnvFileParser;

/// Environment variable holding the MongoDB connection string.
pub const MONGO_URI_VAR: &str = "MONGO_URI";

/// Environment variable overriding the Python interpreter used by `env-check`.
pub const PYTHON_VAR: &str = "PYTHON";

/// Interpreter used when [`PYTHON_VAR`] is not set.
pub const DEFAULT_PYTHON: &str = "python3";

/// File consulted when the process environment lacks the connection string.
pub const ENV_FILE_NAME: &str = ".env";

/// Where the connection string was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriSource {
    /// The process environment.
    Process,
    /// A `.env` file at this path.
    EnvFile(PathBuf),
}

/// Settings for the connectivity probe.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Full connection string, credentials included.
    pub uri: String,
    /// Where `uri` came from.
    pub source: UriSource,
}

impl ProbeSettings {
    /// Resolve settings from the real process environment and the nearest
    /// `.env` at or above `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, |key: &str| std::env::var(key))
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// The process environment wins over the `.env` file; an empty value
    /// counts as unset in both places.
    pub fn load_with_env<F>(dir: &Path, env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Some(uri) = env_fn(MONGO_URI_VAR).ok().filter(|v| !v.is_empty()) {
            tracing::debug!("{} taken from process environment", MONGO_URI_VAR);
            return Ok(Self {
                uri,
                source: UriSource::Process,
            });
        }

        let Some(path) = find_env_file(dir) else {
            return Err(ProbeError::MissingConnectionString {
                var: MONGO_URI_VAR.to_string(),
            });
        };
        let mut vars = EnvFileParser::load(&path)?;
        match vars.remove(MONGO_URI_VAR).filter(|v| !v.is_empty()) {
            Some(uri) => {
                tracing::debug!("{} taken from {}", MONGO_URI_VAR, path.display());
                Ok(Self {
                    uri,
                    source: UriSource::EnvFile(path),
                })
            }
            None => Err(ProbeError::MissingConnectionString {
                var: MONGO_URI_VAR.to_string(),
            }),
        }
    }
}

/// Nearest `.env` in `dir` or any of its parents.
///
/// Only the first file found is used, even when it lacks the variable.
pub fn find_env_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|d| d.join(ENV_FILE_NAME))
        .find(|p| p.exists())
}

/// Settings for the environment checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Interpreter program name or path.
    pub python: String,
}

impl CheckSettings {
    /// Resolve settings from the real process environment.
    pub fn load() -> Self {
        Self::load_with_env(|key: &str| std::env::var(key))
    }

    /// Resolve settings with a custom env var lookup function.
    pub fn load_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let python = env_fn(PYTHON_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
        Self { python }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn process_env_wins_over_env_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=mongodb://file/db\n").unwrap();

        let settings =
            ProbeSettings::load_with_env(temp.path(), env_from(&[("MONGO_URI", "mongodb://proc/db")]))
                .unwrap();

        assert_eq!(settings.uri, "mongodb://proc/db");
        assert_eq!(settings.source, UriSource::Process);
    }

    #[test]
    fn env_file_supplies_missing_variable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=mongodb://file/db\n").unwrap();

        let settings = ProbeSettings::load_with_env(temp.path(), env_from(&[])).unwrap();

        assert_eq!(settings.uri, "mongodb://file/db");
        assert_eq!(settings.source, UriSource::EnvFile(temp.path().join(".env")));
    }

    #[test]
    fn env_file_in_parent_directory_is_found() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("service").join("scripts");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=mongodb://parent/db\n").unwrap();

        let settings = ProbeSettings::load_with_env(&nested, env_from(&[])).unwrap();

        assert_eq!(settings.uri, "mongodb://parent/db");
        assert_eq!(settings.source, UriSource::EnvFile(temp.path().join(".env")));
    }

    #[test]
    fn nearest_env_file_shadows_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("service");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=mongodb://parent/db\n").unwrap();
        std::fs::write(nested.join(".env"), "OTHER=1\n").unwrap();

        let err = ProbeSettings::load_with_env(&nested, env_from(&[])).unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(find_env_file(&nested), Some(nested.join(".env")));
    }

    #[test]
    fn empty_process_value_falls_back_to_env_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=mongodb://file/db\n").unwrap();

        let settings =
            ProbeSettings::load_with_env(temp.path(), env_from(&[("MONGO_URI", "")])).unwrap();

        assert_eq!(settings.uri, "mongodb://file/db");
    }

    #[test]
    fn missing_everywhere_is_fatal() {
        let temp = TempDir::new().unwrap();

        let err = ProbeSettings::load_with_env(temp.path(), env_from(&[])).unwrap_err();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("MONGO_URI"));
    }

    #[test]
    fn empty_env_file_value_is_missing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "MONGO_URI=\nOTHER=x\n").unwrap();

        let err = ProbeSettings::load_with_env(temp.path(), env_from(&[])).unwrap_err();

        assert!(matches!(err, ProbeError::MissingConnectionString { .. }));
    }

    #[test]
    fn python_defaults_to_python3() {
        assert_eq!(CheckSettings::load_with_env(env_from(&[])).python, "python3");
    }

    #[test]
    fn python_override_is_respected() {
        let settings = CheckSettings::load_with_env(env_from(&[("PYTHON", "/opt/py/bin/python")]));
        assert_eq!(settings.python, "/opt/py/bin/python");
    }

    #[test]
    fn blank_python_override_is_ignored() {
        let settings = CheckSettings::load_with_env(env_from(&[("PYTHON", "  ")]));
        assert_eq!(settings.python, DEFAULT_PYTHON);
    }
}
