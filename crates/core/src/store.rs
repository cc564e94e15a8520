//! Persistent application state shared by every start-page surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use ulid::Ulid;

use crate::config::AppConfig;
use crate::database::Database;
use crate::error::{StoreError, StoreResult};
use crate::model::{AppSnapshot, Settings, Task, ThemeName};
use crate::settings::{normalize_name, normalize_wallpaper};
use crate::source::{Listener, StateSource, SubscriptionId};

/// SQLite-backed store that publishes an [`AppSnapshot`] to subscribers.
///
/// Cloning is cheap; every clone observes and mutates the same state. Mutations write through to
/// the database before the in-memory snapshot changes. Listeners run outside the state lock and
/// never see an older snapshot after a newer one; a snapshot superseded before its turn to be
/// delivered is skipped. Listeners must not mutate the store.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    config: AppConfig,
    state: Mutex<AppSnapshot>,
    /// Bumped under the state lock on every publish.
    revision: AtomicU64,
    /// Revision most recently handed to listeners.
    delivered: Mutex<u64>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl AppStore {
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                state: Mutex::new(AppSnapshot::loading()),
                revision: AtomicU64::new(0),
                delivered: Mutex::new(0),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Read settings and tasks from disk and mark the snapshot as loaded.
    ///
    /// On failure the snapshot stays unloaded.
    pub fn load(&self) -> StoreResult<AppSnapshot> {
        let db = self.open_database()?;
        let settings = db.load_settings()?;
        let tasks = db.fetch_tasks()?;
        tracing::debug!(tasks = tasks.len(), theme = %settings.theme, "start page state loaded");

        self.publish(|state| {
            state.name = settings.name;
            state.theme = settings.theme;
            state.custom_wallpaper = settings.custom_wallpaper;
            state.tasks = Arc::from(tasks);
            state.is_data_loaded = true;
        });
        Ok(self.snapshot())
    }

    /// Flip back to the unloaded state ahead of a fresh [`AppStore::load`].
    pub fn begin_reload(&self) {
        self.publish(|state| state.is_data_loaded = false);
    }

    pub fn set_name(&self, name: Option<&str>) -> StoreResult<()> {
        let mut settings = self.current_settings()?;
        settings.name = name.and_then(normalize_name);
        self.apply_settings(settings)
    }

    pub fn set_theme(&self, theme: ThemeName) -> StoreResult<()> {
        let mut settings = self.current_settings()?;
        settings.theme = theme;
        self.apply_settings(settings)
    }

    pub fn set_wallpaper(&self, wallpaper: Option<&str>) -> StoreResult<()> {
        let mut settings = self.current_settings()?;
        settings.custom_wallpaper = match wallpaper {
            Some(raw) => normalize_wallpaper(raw)?,
            None => None,
        };
        self.apply_settings(settings)
    }

    pub fn apply_settings(&self, settings: Settings) -> StoreResult<()> {
        let db = self.open_database()?;
        db.save_settings(&settings)?;
        tracing::info!(theme = %settings.theme, named = settings.name.is_some(), "settings saved");

        self.publish(|state| {
            state.name = settings.name;
            state.theme = settings.theme;
            state.custom_wallpaper = settings.custom_wallpaper;
        });
        Ok(())
    }

    pub fn add_task(&self, text: &str) -> StoreResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyTaskText);
        }

        let task = Task {
            id: Ulid::new().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };
        let db = self.open_database()?;
        db.insert_task(&task)?;
        self.refresh_tasks(&db)?;
        Ok(task)
    }

    pub fn toggle_task(&self, id: &str) -> StoreResult<Task> {
        let db = self.open_database()?;
        let task = db
            .fetch_task(id)?
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;
        let completed = !task.completed;
        let completed_at = completed.then(Utc::now);
        db.set_completed(id, completed, completed_at)?;
        self.refresh_tasks(&db)?;
        Ok(Task {
            completed,
            completed_at,
            ..task
        })
    }

    pub fn rename_task(&self, id: &str, text: &str) -> StoreResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyTaskText);
        }
        let db = self.open_database()?;
        if !db.rename_task(id, text)? {
            return Err(StoreError::TaskNotFound(id.to_string()));
        }
        self.refresh_tasks(&db)
    }

    pub fn remove_task(&self, id: &str) -> StoreResult<()> {
        let db = self.open_database()?;
        if !db.delete_task(id)? {
            return Err(StoreError::TaskNotFound(id.to_string()));
        }
        self.refresh_tasks(&db)
    }

    pub fn clear_completed(&self) -> StoreResult<usize> {
        let db = self.open_database()?;
        let removed = db.delete_completed()?;
        if removed > 0 {
            self.refresh_tasks(&db)?;
        }
        Ok(removed)
    }

    fn current_settings(&self) -> StoreResult<Settings> {
        let state = self.inner.state.lock();
        if state.is_data_loaded {
            return Ok(state.settings());
        }
        drop(state);
        self.open_database()?.load_settings()
    }

    fn refresh_tasks(&self, db: &Database) -> StoreResult<()> {
        let tasks = db.fetch_tasks()?;
        self.publish(|state| state.tasks = Arc::from(tasks));
        Ok(())
    }

    fn publish(&self, mutate: impl FnOnce(&mut AppSnapshot)) {
        let (revision, snapshot) = {
            let mut state = self.inner.state.lock();
            mutate(&mut state);
            let revision = self.inner.revision.fetch_add(1, Ordering::Relaxed) + 1;
            (revision, state.clone())
        };

        let mut delivered = self.inner.delivered.lock();
        if *delivered > revision {
            tracing::trace!(revision, latest = *delivered, "skipping superseded snapshot");
            return;
        }
        *delivered = revision;
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn open_database(&self) -> StoreResult<Database> {
        Database::initialize(&self.inner.config)
    }
}

impl StateSource for AppStore {
    fn snapshot(&self) -> AppSnapshot {
        self.inner.state.lock().clone()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (AppStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::from_data_dir(temp_dir.path().to_path_buf());
        (AppStore::new(config), temp_dir)
    }

    #[test]
    fn starts_unloaded_until_load() {
        let (store, _guard) = store_with_temp_dir();
        assert!(!store.snapshot().is_data_loaded);

        let snapshot = store.load().unwrap();
        assert!(snapshot.is_data_loaded);
        assert_eq!(snapshot.name, None);
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn state_survives_a_new_store() {
        let (store, guard) = store_with_temp_dir();
        store.load().unwrap();
        store.set_name(Some(" Ava ")).unwrap();
        store.set_theme(ThemeName::Forest).unwrap();
        store.add_task("Water plants").unwrap();

        let reopened = AppStore::new(AppConfig::from_data_dir(guard.path().to_path_buf()));
        let snapshot = reopened.load().unwrap();
        assert_eq!(snapshot.name.as_deref(), Some("Ava"));
        assert_eq!(snapshot.theme, ThemeName::Forest);
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].text, "Water plants");
    }

    #[test]
    fn task_crud_flow() {
        let (store, _guard) = store_with_temp_dir();
        store.load().unwrap();

        assert!(matches!(store.add_task("   "), Err(StoreError::EmptyTaskText)));

        let first = store.add_task("Read chapter 3").unwrap();
        let second = store.add_task("Stretch").unwrap();
        let toggled = store.toggle_task(&first.id).unwrap();
        assert!(toggled.completed);
        assert!(toggled.completed_at.is_some());
        assert_eq!(store.snapshot().open_task_count(), 1);

        store.rename_task(&second.id, "Stretch for 10 minutes").unwrap();
        assert_eq!(store.snapshot().tasks[1].text, "Stretch for 10 minutes");

        assert_eq!(store.clear_completed().unwrap(), 1);
        assert_eq!(store.snapshot().tasks.len(), 1);

        store.remove_task(&second.id).unwrap();
        assert!(store.snapshot().tasks.is_empty());
        assert!(matches!(
            store.remove_task(&second.id),
            Err(StoreError::TaskNotFound(_))
        ));
    }

    #[test]
    fn settings_changes_keep_task_list_pointer() {
        let (store, _guard) = store_with_temp_dir();
        store.load().unwrap();
        store.add_task("Plan week").unwrap();

        let before = store.snapshot().tasks;
        store.set_theme(ThemeName::Ocean).unwrap();
        assert!(Arc::ptr_eq(&before, &store.snapshot().tasks));
    }

    #[test]
    fn invalid_wallpaper_is_rejected_without_saving() {
        let (store, _guard) = store_with_temp_dir();
        store.load().unwrap();
        assert!(matches!(
            store.set_wallpaper(Some("not a uri")),
            Err(StoreError::InvalidWallpaper(_))
        ));
        assert_eq!(store.snapshot().custom_wallpaper, None);
    }

    #[test]
    fn listeners_see_each_change_until_unsubscribed() {
        let (store, _guard) = store_with_temp_dir();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = store.subscribe(Arc::new(move |_snapshot: &AppSnapshot| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        store.load().unwrap();
        store.set_name(Some("Ava")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_name(None).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn reload_drops_loaded_flag() {
        let (store, _guard) = store_with_temp_dir();
        store.load().unwrap();
        store.begin_reload();
        assert!(!store.snapshot().is_data_loaded);
        assert!(store.load().unwrap().is_data_loaded);
    }

    #[test]
    fn slow_listener_never_ends_on_a_stale_snapshot() {
        let (store, _guard) = store_with_temp_dir();
        store.load().unwrap();

        let (entered_tx, entered_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&delivered);
        store.subscribe(Arc::new(move |snapshot: &AppSnapshot| {
            if snapshot.tasks.len() == 1 {
                entered_tx.lock().send(()).unwrap();
                release_rx.lock().recv().unwrap();
            }
            sink.lock().push(snapshot.tasks.len());
        }));

        let first = {
            let store = store.clone();
            thread::spawn(move || store.add_task("Water plants").unwrap())
        };
        entered_rx.recv().unwrap();

        let second = {
            let store = store.clone();
            thread::spawn(move || store.add_task("Call mum").unwrap())
        };
        while store.snapshot().tasks.len() < 2 {
            thread::sleep(Duration::from_millis(5));
        }
        release_tx.send(()).unwrap();
        first.join().unwrap();
        second.join().unwrap();

        let delivered = delivered.lock().clone();
        assert_eq!(delivered, vec![1, 2]);
        assert_eq!(delivered.last().copied(), Some(store.snapshot().tasks.len()));
    }
}
