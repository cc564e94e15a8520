use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Default,
    Dark,
    Forest,
    Ocean,
    Sunset,
    Custom,
}

impl ThemeName {
    pub const ALL: &'static [ThemeName] = &[
        ThemeName::Default,
        ThemeName::Dark,
        ThemeName::Forest,
        ThemeName::Ocean,
        ThemeName::Sunset,
        ThemeName::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Dark => "dark",
            ThemeName::Forest => "forest",
            ThemeName::Ocean => "ocean",
            ThemeName::Sunset => "sunset",
            ThemeName::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Dark => "Dark",
            ThemeName::Forest => "Forest",
            ThemeName::Ocean => "Ocean",
            ThemeName::Sunset => "Sunset",
            ThemeName::Custom => "Custom wallpaper",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "light" => Ok(ThemeName::Default),
            "dark" => Ok(ThemeName::Dark),
            "forest" => Ok(ThemeName::Forest),
            "ocean" => Ok(ThemeName::Ocean),
            "sunset" => Ok(ThemeName::Sunset),
            "custom" => Ok(ThemeName::Custom),
            other => Err(anyhow!(
                "Unknown theme '{}': expected default|dark|forest|ocean|sunset|custom",
                other
            )),
        }
    }
}

impl ValueEnum for ThemeName {
    fn value_variants<'a>() -> &'a [Self] {
        Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// A to-do entry shown on the start page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// User preferences persisted alongside the task list.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Settings {
    pub name: Option<String>,
    pub theme: ThemeName,
    pub custom_wallpaper: Option<String>,
}

/// Read-only view of everything the start page renders from.
///
/// Until `is_data_loaded` flips to `true` the remaining fields hold defaults and must not drive
/// rendering decisions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppSnapshot {
    pub theme: ThemeName,
    pub custom_wallpaper: Option<String>,
    pub name: Option<String>,
    #[serde(serialize_with = "serialize_tasks")]
    pub tasks: Arc<[Task]>,
    pub is_data_loaded: bool,
}

impl AppSnapshot {
    pub fn loading() -> Self {
        Self {
            theme: ThemeName::Default,
            custom_wallpaper: None,
            name: None,
            tasks: Arc::from(Vec::new()),
            is_data_loaded: false,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            name: self.name.clone(),
            theme: self.theme,
            custom_wallpaper: self.custom_wallpaper.clone(),
        }
    }

    pub fn has_name(&self) -> bool {
        has_display_name(self.name.as_deref())
    }

    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// The wallpaper only replaces the solid background for the custom theme.
    pub fn shows_wallpaper(&self) -> bool {
        self.theme == ThemeName::Custom && self.custom_wallpaper.is_some()
    }
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

pub(crate) fn has_display_name(name: Option<&str>) -> bool {
    name.map(str::trim).is_some_and(|value| !value.is_empty())
}

fn serialize_tasks<S: Serializer>(tasks: &Arc<[Task]>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(tasks.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("default", ThemeName::Default)]
    #[case("Light", ThemeName::Default)]
    #[case(" DARK ", ThemeName::Dark)]
    #[case("custom", ThemeName::Custom)]
    fn parses_theme_names(#[case] raw: &str, #[case] expected: ThemeName) {
        assert_eq!(raw.parse::<ThemeName>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = "neon".parse::<ThemeName>().unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'neon'"));
    }

    #[test]
    fn blank_names_do_not_count() {
        let mut snapshot = AppSnapshot::loading();
        assert!(!snapshot.has_name());
        snapshot.name = Some("   ".into());
        assert!(!snapshot.has_name());
        snapshot.name = Some("Ava".into());
        assert!(snapshot.has_name());
    }

    #[test]
    fn wallpaper_requires_custom_theme() {
        let mut snapshot = AppSnapshot::loading();
        snapshot.custom_wallpaper = Some("file:///home/ava/a.jpg".into());
        assert!(!snapshot.shows_wallpaper());
        snapshot.theme = ThemeName::Custom;
        assert!(snapshot.shows_wallpaper());
    }

    #[test]
    fn snapshot_serializes_tasks_as_array() {
        let mut snapshot = AppSnapshot::loading();
        snapshot.tasks = Arc::from(vec![Task {
            id: "01J0".into(),
            text: "Water plants".into(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }]);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["tasks"][0]["text"], "Water plants");
        assert_eq!(value["theme"], "default");
        assert_eq!(value["is_data_loaded"], false);
    }
}
