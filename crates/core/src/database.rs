use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{Settings, Task, ThemeName};

const KEY_NAME: &str = "name";
const KEY_THEME: &str = "theme";
const KEY_WALLPAPER: &str = "custom_wallpaper";

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn initialize(config: &AppConfig) -> StoreResult<Self> {
        if let Some(parent) = config.db_path().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(config.db_path())?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    pub fn load_settings(&self) -> StoreResult<Settings> {
        let theme = match self.setting(KEY_THEME)? {
            Some(raw) => raw.parse::<ThemeName>().map_err(|err| StoreError::Corrupt {
                key: KEY_THEME.into(),
                reason: err.to_string(),
            })?,
            None => ThemeName::default(),
        };

        Ok(Settings {
            name: self.setting(KEY_NAME)?,
            theme,
            custom_wallpaper: self.setting(KEY_WALLPAPER)?,
        })
    }

    pub fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        self.put_setting(KEY_NAME, settings.name.as_deref())?;
        self.put_setting(KEY_THEME, Some(settings.theme.as_str()))?;
        self.put_setting(KEY_WALLPAPER, settings.custom_wallpaper.as_deref())?;
        Ok(())
    }

    fn setting(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = :key",
                named_params![":key": key],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;
        Ok(value.flatten())
    }

    fn put_setting(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        match value {
            Some(value) => {
                self.conn.execute(
                    "INSERT INTO settings (key, value) VALUES (:key, :value)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    named_params![":key": key, ":value": value],
                )?;
            }
            None => {
                self.conn.execute(
                    "DELETE FROM settings WHERE key = :key",
                    named_params![":key": key],
                )?;
            }
        }
        Ok(())
    }

    pub fn fetch_tasks(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, completed, created_at, completed_at FROM tasks \
             ORDER BY created_at ASC, id ASC",
        )?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(map_task(row)?);
        }
        Ok(tasks)
    }

    pub fn fetch_task(&self, id: &str) -> StoreResult<Option<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, completed, created_at, completed_at FROM tasks WHERE id = ? LIMIT 1",
        )?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(map_task(row)?)),
            None => Ok(None),
        }
    }

    pub fn insert_task(&self, task: &Task) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (id, text, completed, created_at, completed_at)
             VALUES (:id, :text, :completed, :created, :completed_at)",
            named_params![
                ":id": task.id,
                ":text": task.text,
                ":completed": task.completed,
                ":created": format_timestamp(task.created_at),
                ":completed_at": task.completed_at.map(format_timestamp),
            ],
        )?;
        Ok(())
    }

    pub fn set_completed(
        &self,
        id: &str,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> StoreResult<bool> {
        let updated = self.conn.execute(
            "UPDATE tasks SET completed = :completed, completed_at = :completed_at WHERE id = :id",
            named_params![
                ":completed": completed,
                ":completed_at": completed_at.map(format_timestamp),
                ":id": id,
            ],
        )?;
        Ok(updated > 0)
    }

    pub fn rename_task(&self, id: &str, text: &str) -> StoreResult<bool> {
        let updated = self.conn.execute(
            "UPDATE tasks SET text = :text WHERE id = :id",
            named_params![":text": text, ":id": id],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_task(&self, id: &str) -> StoreResult<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = :id", named_params![":id": id])?;
        Ok(affected > 0)
    }

    pub fn delete_completed(&self) -> StoreResult<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE completed = 1", [])?;
        Ok(affected)
    }

    fn apply_migrations(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (key TEXT PRIMARY KEY, value TEXT);
             CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                completed_at TEXT
             );
             CREATE INDEX IF NOT EXISTS idx_tasks_created ON tasks(created_at);
            ",
        )?;
        Ok(())
    }
}

fn map_task(row: &Row<'_>) -> StoreResult<Task> {
    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        completed: row.get(2)?,
        created_at: parse_datetime_required(row.get::<_, String>(3)?)?,
        completed_at: parse_datetime(row.get::<_, Option<String>>(4)?),
    })
}

// Fixed-width UTC timestamps keep `ORDER BY created_at` chronological.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_datetime_required(raw: String) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt {
            key: "tasks.created_at".into(),
            reason: format!("'{}': {}", raw, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_db() -> (Database, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf());
        let db = Database::initialize(&config).expect("init db");
        (db, dir)
    }

    fn task(id: &str, text: &str, created_at: DateTime<Utc>) -> Task {
        Task {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    #[test]
    fn fresh_database_has_default_settings() {
        let (db, _dir) = temp_db();
        assert_eq!(db.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn settings_round_trip_and_clear() {
        let (db, _dir) = temp_db();
        let settings = Settings {
            name: Some("Ava".into()),
            theme: ThemeName::Custom,
            custom_wallpaper: Some("file:///home/ava/bg.jpg".into()),
        };
        db.save_settings(&settings).unwrap();
        assert_eq!(db.load_settings().unwrap(), settings);

        db.save_settings(&Settings::default()).unwrap();
        assert_eq!(db.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn unreadable_theme_is_reported() {
        let (db, _dir) = temp_db();
        db.put_setting(KEY_THEME, Some("neon")).unwrap();
        let err = db.load_settings().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "theme"));
    }

    #[test]
    fn tasks_are_ordered_by_creation() {
        let (db, _dir) = temp_db();
        let now = Utc::now();
        db.insert_task(&task("b", "second", now)).unwrap();
        db.insert_task(&task("a", "first", now - chrono::Duration::minutes(5)))
            .unwrap();

        let texts: Vec<String> = db
            .fetch_tasks()
            .unwrap()
            .into_iter()
            .map(|task| task.text)
            .collect();
        assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn completion_rename_and_delete() {
        let (db, _dir) = temp_db();
        db.insert_task(&task("a", "Draft notes", Utc::now())).unwrap();

        assert!(db.set_completed("a", true, Some(Utc::now())).unwrap());
        assert!(db.rename_task("a", "Draft meeting notes").unwrap());
        let stored = db.fetch_task("a").unwrap().unwrap();
        assert!(stored.completed);
        assert!(stored.completed_at.is_some());
        assert_eq!(stored.text, "Draft meeting notes");

        assert_eq!(db.delete_completed().unwrap(), 1);
        assert!(!db.delete_task("a").unwrap());
        assert!(!db.set_completed("missing", true, None).unwrap());
    }
}
