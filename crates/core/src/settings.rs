//! Draft/validate/apply flow behind the theme and profile dialog.

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::model::{AppSnapshot, Settings, ThemeName};

/// Editable copy of the persisted settings, seeded whenever the dialog opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub name: String,
    pub theme: ThemeName,
    pub wallpaper: String,
}

impl SettingsForm {
    pub fn from_snapshot(snapshot: &AppSnapshot) -> Self {
        Self {
            name: snapshot.name.clone().unwrap_or_default(),
            theme: snapshot.theme,
            wallpaper: snapshot.custom_wallpaper.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> StoreResult<Settings> {
        let custom_wallpaper = normalize_wallpaper(&self.wallpaper)?;
        if self.theme == ThemeName::Custom && custom_wallpaper.is_none() {
            return Err(StoreError::WallpaperRequired);
        }

        Ok(Settings {
            name: normalize_name(&self.name),
            theme: self.theme,
            custom_wallpaper,
        })
    }
}

pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

const FILE_SCHEME: &str = "file://";

/// Blank input clears the wallpaper; anything else must be a `file://` URI or an existing path.
pub fn normalize_wallpaper(raw: &str) -> StoreResult<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let is_file_uri = strip_file_scheme(trimmed).is_some_and(|path| !path.is_empty());
    if is_file_uri || Path::new(trimmed).is_file() {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(StoreError::InvalidWallpaper(trimmed.to_string()))
    }
}

/// Filesystem location of a stored wallpaper value.
pub fn wallpaper_path(wallpaper: &str) -> PathBuf {
    PathBuf::from(strip_file_scheme(wallpaper).unwrap_or(wallpaper))
}

fn strip_file_scheme(value: &str) -> Option<&str> {
    let scheme = value.get(..FILE_SCHEME.len())?;
    if scheme.eq_ignore_ascii_case(FILE_SCHEME) {
        value.get(FILE_SCHEME.len()..)
    } else {
        None
    }
}
