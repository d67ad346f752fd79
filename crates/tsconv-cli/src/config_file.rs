//! Finding and loading `tsconv.toml`.
//!
//! Lookup order: the `--config` flag, then `tsconv.toml` or `.tsconv.toml`
//! in the project root, then `config.toml` in the user directory
//! (`$TSCONV_CONFIG_DIR`, else `~/.tsconv`). With none of these the built-in
//! defaults apply.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tsconv_core::Config;

const PROJECT_FILES: [&str; 2] = ["tsconv.toml", ".tsconv.toml"];
const USER_FILE: &str = "config.toml";
const USER_DIR_ENV: &str = "TSCONV_CONFIG_DIR";

/// Loads the configuration that applies to `project`.
///
/// An explicit `flag` path must exist and parse; discovered files must parse.
pub fn load(project: &Path, flag: Option<&Path>) -> Result<Config> {
    load_from(project, flag, user_dir().as_deref())
}

fn load_from(project: &Path, flag: Option<&Path>, user_dir: Option<&Path>) -> Result<Config> {
    let Some(path) = locate(project, flag, user_dir) else {
        tracing::debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Using config: {}", path.display());
    Config::from_file(&path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn locate(project: &Path, flag: Option<&Path>, user_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }

    PROJECT_FILES
        .iter()
        .map(|name| project.join(name))
        .chain(user_dir.map(|dir| dir.join(USER_FILE)))
        .find(|candidate| candidate.is_file())
}

fn user_dir() -> Option<PathBuf> {
    std::env::var_os(USER_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".tsconv")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn max_length(config: &Config) -> i64 {
        config
            .rule("line_length")
            .map_or(100, |r| r.get_int("max_length", 100))
    }

    fn write_limit(path: &Path, limit: u32) {
        fs::write(path, format!("[rules.line_length]\nmax_length = {limit}\n")).unwrap();
    }

    #[test]
    fn defaults_without_any_file() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        let config = load_from(project.path(), None, Some(user.path())).unwrap();
        assert_eq!(max_length(&config), 100);
        assert!(config.external.enabled);
    }

    #[test]
    fn flag_overrides_project_file() {
        let project = TempDir::new().unwrap();
        write_limit(&project.path().join("tsconv.toml"), 80);
        let custom = project.path().join("ci.toml");
        write_limit(&custom, 120);

        let config = load_from(project.path(), Some(&custom), None).unwrap();
        assert_eq!(max_length(&config), 120);
    }

    #[test]
    fn missing_flag_file_is_an_error() {
        let project = TempDir::new().unwrap();
        let missing = project.path().join("nope.toml");

        let err = load_from(project.path(), Some(&missing), None).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn plain_name_wins_over_dot_name() {
        let project = TempDir::new().unwrap();
        write_limit(&project.path().join("tsconv.toml"), 90);
        write_limit(&project.path().join(".tsconv.toml"), 70);

        let config = load_from(project.path(), None, None).unwrap();
        assert_eq!(max_length(&config), 90);
    }

    #[test]
    fn dot_name_is_found() {
        let project = TempDir::new().unwrap();
        write_limit(&project.path().join(".tsconv.toml"), 70);

        let config = load_from(project.path(), None, None).unwrap();
        assert_eq!(max_length(&config), 70);
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("tsconv.toml")).unwrap();
        write_limit(&project.path().join(".tsconv.toml"), 60);

        let config = load_from(project.path(), None, None).unwrap();
        assert_eq!(max_length(&config), 60);
    }

    #[test]
    fn user_file_applies_only_without_project_file() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        write_limit(&user.path().join("config.toml"), 140);

        let config = load_from(project.path(), None, Some(user.path())).unwrap();
        assert_eq!(max_length(&config), 140);

        write_limit(&project.path().join("tsconv.toml"), 90);
        let config = load_from(project.path(), None, Some(user.path())).unwrap();
        assert_eq!(max_length(&config), 90);
    }

    #[test]
    fn invalid_project_file_is_an_error() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("tsconv.toml"), "[rules\n").unwrap();

        assert!(load_from(project.path(), None, None).is_err());
    }
}
