//! Default scan root and environment overrides

use std::env;
use std::path::PathBuf;

use crate::afm::Type1Files;
use crate::catalog::{find_type1_font_with, truetype_fonts_with, type1_fonts_with, ScanOptions};
use crate::error::ScanError;

/// Shared font directory used when the caller names no root.
pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts";

pub const ROOT_ENV: &str = "FONTDIR_ROOT";
pub const FOLLOW_SYMLINKS_ENV: &str = "FONTDIR_FOLLOW_SYMLINKS";
pub const SORT_ENTRIES_ENV: &str = "FONTDIR_SORT_ENTRIES";

/// Where to scan and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDirConfig {
    pub root: PathBuf,
    pub options: ScanOptions,
}

impl Default for FontDirConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_FONT_DIR),
            options: ScanOptions::default(),
        }
    }
}

impl FontDirConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `FONTDIR_ROOT`, `FONTDIR_FOLLOW_SYMLINKS` and
    /// `FONTDIR_SORT_ENTRIES` when set.
    pub fn from_env() -> Result<Self, ScanError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; [`from_env`](Self::from_env) passes
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScanError> {
        let mut config = Self::default();

        if let Some(root) = lookup(ROOT_ENV).filter(|raw| !raw.trim().is_empty()) {
            config.root = PathBuf::from(root.trim());
        }
        if let Some(raw) = lookup(FOLLOW_SYMLINKS_ENV) {
            config.options.follow_symlinks = parse_flag(FOLLOW_SYMLINKS_ENV, &raw)?;
        }
        if let Some(raw) = lookup(SORT_ENTRIES_ENV) {
            config.options.sort_entries = parse_flag(SORT_ENTRIES_ENV, &raw)?;
        }

        Ok(config)
    }

    pub fn type1_fonts(&self) -> Result<Vec<String>, ScanError> {
        type1_fonts_with(&self.root, &self.options)
    }

    pub fn truetype_fonts(&self) -> Result<Vec<PathBuf>, ScanError> {
        truetype_fonts_with(&self.root, &self.options)
    }

    pub fn find_type1_font(&self, name: &str) -> Result<Option<Type1Files>, ScanError> {
        find_type1_font_with(name, &self.root, &self.options)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ScanError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ScanError::InvalidConfig {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_shared_font_dir() {
        let config = FontDirConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config, FontDirConfig::default());
        assert_eq!(config.root, PathBuf::from("/usr/share/fonts"));
        assert!(config.options.follow_symlinks);
        assert!(!config.options.sort_entries);
    }

    #[test]
    fn overrides_root_and_flags() {
        let config = FontDirConfig::from_lookup(lookup_from(&[
            (ROOT_ENV, " /opt/fonts "),
            (FOLLOW_SYMLINKS_ENV, "no"),
            (SORT_ENTRIES_ENV, "TRUE"),
        ]))
        .expect("config");

        assert_eq!(config.root, PathBuf::from("/opt/fonts"));
        assert!(!config.options.follow_symlinks);
        assert!(config.options.sort_entries);
    }

    #[test]
    fn blank_root_keeps_default() {
        let config = FontDirConfig::from_lookup(lookup_from(&[(ROOT_ENV, "  ")])).expect("config");
        assert_eq!(config.root, PathBuf::from(DEFAULT_FONT_DIR));
    }

    #[test]
    fn rejects_unparsable_flag() {
        let err = FontDirConfig::from_lookup(lookup_from(&[(SORT_ENTRIES_ENV, "maybe")]))
            .unwrap_err();

        match err {
            ScanError::InvalidConfig { key, value } => {
                assert_eq!(key, SORT_ENTRIES_ENV);
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
