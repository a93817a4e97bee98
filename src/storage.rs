use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, PROFILE_ENV, PROFILE_FILE_NAMES};
use crate::error::Error;
use crate::models::Profile;

/// Locates and reads the profile file
pub struct ProfileStore {
    config_dir: PathBuf,
    override_path: Option<PathBuf>,
}

impl ProfileStore {
    /// Store rooted at `~/.notymn`, honoring `$NOTYMN_PROFILE`
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);

        ProfileStore {
            config_dir,
            override_path: std::env::var_os(PROFILE_ENV).map(PathBuf::from),
        }
    }

    /// Store rooted at an explicit directory, ignoring the environment
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        ProfileStore {
            config_dir: config_dir.into(),
            override_path: None,
        }
    }

    /// Profile file to read, if any exists
    pub fn profile_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.override_path {
            return Some(path.clone());
        }

        PROFILE_FILE_NAMES
            .iter()
            .map(|name| self.config_dir.join(name))
            .find(|path| path.exists())
    }

    /// Load the profile, falling back to the built-in one.
    ///
    /// Unreadable or malformed files are logged and skipped. The result is
    /// not validated; see [`Profile::validate`].
    pub fn load(&self) -> Profile {
        let Some(path) = self.profile_path() else {
            tracing::info!("No profile file found, using built-in profile");
            return Profile::default();
        };

        match load_profile(&path) {
            Ok(profile) => {
                tracing::info!(path = %path.display(), "Loaded profile");
                profile
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load profile, using built-in profile");
                Profile::default()
            }
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a YAML or JSON profile, chosen by file extension
pub fn load_profile(path: &Path) -> Result<Profile> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let profile: Profile = match format.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing YAML profile {}", path.display()))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON profile {}", path.display()))?,
        _ => return Err(Error::UnsupportedProfileFormat(path.to_path_buf()).into()),
    };

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.yaml");
        fs::write(
            &path,
            "handle: ferris\nphrases:\n  - a crab\n  - a mascot\ntiming:\n  hold_ms: 500\n",
        )
        .unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.handle, "ferris");
        assert_eq!(profile.phrases, vec!["a crab", "a mascot"]);
        assert_eq!(profile.timing.hold_ms, 500);
        // unspecified fields fall back to the built-in profile
        assert_eq!(profile.projects, Profile::default().projects);
    }

    #[test]
    fn test_load_json_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            r#"{"handle":"ferris","contacts":[{"label":"Web","text":"rust-lang.org","url":"https://rust-lang.org"}]}"#,
        )
        .unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.handle, "ferris");
        assert_eq!(profile.contacts.len(), 1);
        assert_eq!(profile.contacts[0].label, "Web");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");
        fs::write(&path, "handle = 'x'").unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnsupportedProfileFormat(_))
        ));
    }

    #[test]
    fn test_store_finds_profile_in_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("profile.yml"), "handle: yml\n").unwrap();

        let store = ProfileStore::with_dir(dir.path());
        assert_eq!(store.profile_path(), Some(dir.path().join("profile.yml")));
        assert_eq!(store.load().handle, "yml");
    }

    #[test]
    fn test_store_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::with_dir(dir.path());
        assert_eq!(store.profile_path(), None);
        assert_eq!(store.load(), Profile::default());

        fs::write(dir.path().join("profile.yaml"), "handle: [unterminated").unwrap();
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_empty_phrases_survive_loading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.yaml");
        fs::write(&path, "phrases: []\n").unwrap();

        let profile = load_profile(&path).unwrap();
        assert!(profile.validate().is_err());
    }
}
