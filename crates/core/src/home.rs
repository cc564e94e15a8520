//! Start-page orchestration: layout choice, settings dialog visibility, and the first-run prompt
//! that nudges a nameless visitor into the settings dialog shortly after data loads.
//!
//! The controller never sleeps itself. It emits [`TimerCommand`]s for the host to schedule and
//! is told about expiry through [`HomeController::fire`].

use std::sync::Arc;
use std::time::Duration;

use crate::layout::{select_layout, LayoutVariant};
use crate::model::AppSnapshot;
use crate::welcome::WelcomePayload;

pub const FIRST_RUN_DELAY: Duration = Duration::from_millis(500);

/// Identifies one armed first-run delay. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Arm { handle: TimerHandle, delay: Duration },
    Cancel { handle: TimerHandle },
}

pub struct HomeController {
    delay: Duration,
    snapshot: AppSnapshot,
    mobile: bool,
    settings_open: bool,
    pending: Option<TimerHandle>,
    next_handle: u64,
    disposed: bool,
    welcome: Arc<WelcomePayload>,
}

impl HomeController {
    pub fn new(delay: Duration) -> Self {
        let snapshot = AppSnapshot::loading();
        let welcome = Arc::new(WelcomePayload::new(
            snapshot.name.clone(),
            Arc::clone(&snapshot.tasks),
        ));
        Self {
            delay,
            snapshot,
            mobile: false,
            settings_open: false,
            pending: None,
            next_handle: 1,
            disposed: false,
            welcome,
        }
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    pub fn layout(&self) -> LayoutVariant {
        select_layout(self.snapshot.is_data_loaded, self.mobile)
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    /// Direct user control over the dialog. Setting the same value twice is a no-op.
    pub fn set_settings_open(&mut self, open: bool) {
        self.settings_open = open;
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Rebuilt only when the task list or the name changed since the last snapshot.
    pub fn welcome(&self) -> Arc<WelcomePayload> {
        Arc::clone(&self.welcome)
    }

    /// Take in a fresh snapshot and report any timer scheduling the host must perform.
    ///
    /// A change to `name` or `is_data_loaded` cancels a pending delay. Only a
    /// `false -> true` transition of `is_data_loaded` arms a new one.
    pub fn observe(&mut self, snapshot: AppSnapshot) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        let was_loaded = self.snapshot.is_data_loaded;
        let loaded_changed = was_loaded != snapshot.is_data_loaded;
        let name_changed = self.snapshot.name != snapshot.name;

        if !self.disposed {
            if loaded_changed || name_changed {
                if let Some(handle) = self.pending.take() {
                    tracing::trace!(?handle, "first-run prompt cancelled");
                    commands.push(TimerCommand::Cancel { handle });
                }
            }

            if !was_loaded && snapshot.is_data_loaded {
                let handle = TimerHandle(self.next_handle);
                self.next_handle += 1;
                self.pending = Some(handle);
                commands.push(TimerCommand::Arm {
                    handle,
                    delay: self.delay,
                });
            }
        }

        if name_changed || !Arc::ptr_eq(&self.welcome.tasks, &snapshot.tasks) {
            self.welcome = Arc::new(WelcomePayload::new(
                snapshot.name.clone(),
                Arc::clone(&snapshot.tasks),
            ));
        }

        self.snapshot = snapshot;
        commands
    }

    /// The host reports that the delay behind `handle` elapsed. Returns `true` when this fire
    /// opened the settings dialog; stale or cancelled handles are ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.disposed || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        if self.snapshot.has_name() {
            return false;
        }
        tracing::debug!("no name configured, opening settings for first run");
        self.settings_open = true;
        true
    }

    /// Release the pending delay, if any. Nothing fires after disposal.
    pub fn dispose(&mut self) -> Option<TimerCommand> {
        self.disposed = true;
        self.pending
            .take()
            .map(|handle| TimerCommand::Cancel { handle })
    }
}

impl Default for HomeController {
    fn default() -> Self {
        Self::new(FIRST_RUN_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    /// Virtual clock that schedules controller timers in milliseconds.
    struct Harness {
        home: HomeController,
        state: AppSnapshot,
        now: u64,
        timers: Vec<(TimerHandle, u64)>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                home: HomeController::default(),
                state: AppSnapshot::loading(),
                now: 0,
                timers: Vec::new(),
            }
        }

        fn apply(&mut self, commands: Vec<TimerCommand>) {
            for command in commands {
                match command {
                    TimerCommand::Arm { handle, delay } => {
                        self.timers.push((handle, self.now + delay.as_millis() as u64))
                    }
                    TimerCommand::Cancel { handle } => {
                        self.timers.retain(|(armed, _)| *armed != handle)
                    }
                }
            }
        }

        fn advance_to(&mut self, t: u64) {
            self.timers.sort_by_key(|(_, deadline)| *deadline);
            while let Some(&(handle, deadline)) = self.timers.first() {
                if deadline > t {
                    break;
                }
                self.timers.remove(0);
                self.now = deadline;
                self.home.fire(handle);
            }
            self.now = t;
        }

        fn update(&mut self, t: u64, change: impl FnOnce(&mut AppSnapshot)) {
            self.advance_to(t);
            change(&mut self.state);
            let commands = self.home.observe(self.state.clone());
            self.apply(commands);
        }
    }

    #[test]
    fn opens_for_nameless_guest_after_delay() {
        let mut h = Harness::new();
        h.update(0, |s| s.is_data_loaded = true);
        h.advance_to(499);
        assert!(!h.home.is_settings_open());
        h.advance_to(500);
        assert!(h.home.is_settings_open());
    }

    #[test]
    fn naming_before_expiry_keeps_dialog_closed() {
        let mut h = Harness::new();
        h.update(0, |s| s.is_data_loaded = true);
        h.update(200, |s| s.name = Some("Ava".into()));
        h.advance_to(500);
        assert!(!h.home.is_settings_open());
        assert_eq!(h.home.pending_timer(), None);
        h.advance_to(5_000);
        assert!(!h.home.is_settings_open());
    }

    #[test]
    fn named_user_is_never_prompted() {
        let mut h = Harness::new();
        h.state.name = Some("Ava".into());
        h.update(0, |s| s.is_data_loaded = true);
        h.advance_to(1_000);
        assert!(!h.home.is_settings_open());
    }

    #[test]
    fn reload_restarts_delay_from_second_transition() {
        let mut h = Harness::new();
        h.update(0, |s| s.is_data_loaded = true);
        h.update(100, |s| s.is_data_loaded = false);
        h.update(200, |s| s.is_data_loaded = true);
        h.advance_to(500);
        assert!(!h.home.is_settings_open());
        h.advance_to(699);
        assert!(!h.home.is_settings_open());
        h.advance_to(700);
        assert!(h.home.is_settings_open());
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut home = HomeController::default();
        let mut state = AppSnapshot::loading();
        state.is_data_loaded = true;
        let armed = home.observe(state.clone());
        let TimerCommand::Arm { handle: first, .. } = armed[0] else {
            panic!("expected arm, got {armed:?}");
        };

        state.is_data_loaded = false;
        assert_eq!(
            home.observe(state.clone()),
            vec![TimerCommand::Cancel { handle: first }]
        );
        state.is_data_loaded = true;
        home.observe(state);

        assert!(!home.fire(first));
        assert!(!home.is_settings_open());
    }

    #[test]
    fn name_change_after_load_does_not_rearm() {
        let mut h = Harness::new();
        h.state.name = Some("Ava".into());
        h.update(0, |s| s.is_data_loaded = true);
        h.advance_to(600);
        h.update(700, |s| s.name = None);
        assert_eq!(h.home.pending_timer(), None);
        h.advance_to(2_000);
        assert!(!h.home.is_settings_open());
    }

    #[test]
    fn user_toggle_is_idempotent_and_independent() {
        let mut h = Harness::new();
        h.home.set_settings_open(true);
        h.home.set_settings_open(true);
        assert!(h.home.is_settings_open());

        h.update(0, |s| {
            s.is_data_loaded = true;
            s.name = Some("Ava".into());
        });
        h.advance_to(500);
        assert!(h.home.is_settings_open());

        h.home.set_settings_open(false);
        h.advance_to(10_000);
        assert!(!h.home.is_settings_open());
    }

    #[test]
    fn user_can_close_prompt_and_it_stays_closed() {
        let mut h = Harness::new();
        h.update(0, |s| s.is_data_loaded = true);
        h.advance_to(500);
        h.home.set_settings_open(false);
        h.advance_to(5_000);
        assert!(!h.home.is_settings_open());
    }

    #[test]
    fn dispose_cancels_pending_delay() {
        let mut home = HomeController::default();
        let mut state = AppSnapshot::loading();
        state.is_data_loaded = true;
        let commands = home.observe(state.clone());
        let TimerCommand::Arm { handle, .. } = commands[0] else {
            panic!("expected arm");
        };

        assert_eq!(home.dispose(), Some(TimerCommand::Cancel { handle }));
        assert!(!home.fire(handle));
        assert!(!home.is_settings_open());

        state.is_data_loaded = false;
        home.observe(state.clone());
        state.is_data_loaded = true;
        assert!(home.observe(state).is_empty());
    }

    #[test]
    fn layout_tracks_load_and_viewport() {
        let mut home = HomeController::default();
        home.set_mobile(true);
        assert_eq!(home.layout(), LayoutVariant::Loading { mobile: true });

        let mut state = AppSnapshot::loading();
        state.is_data_loaded = true;
        home.observe(state);
        assert_eq!(home.layout(), LayoutVariant::Mobile);
        home.set_mobile(false);
        assert_eq!(home.layout(), LayoutVariant::Desktop);
    }

    #[test]
    fn welcome_payload_is_stable_without_relevant_changes() {
        let mut home = HomeController::default();
        let mut state = AppSnapshot::loading();
        state.is_data_loaded = true;
        state.tasks = Arc::from(vec![Task {
            id: "1".into(),
            text: "Journal".into(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }]);
        home.observe(state.clone());
        let first = home.welcome();

        state.theme = crate::model::ThemeName::Dark;
        home.observe(state.clone());
        assert!(Arc::ptr_eq(&first, &home.welcome()));

        state.name = Some("Ava".into());
        home.observe(state.clone());
        let renamed = home.welcome();
        assert!(!Arc::ptr_eq(&first, &renamed));
        assert_eq!(renamed.name.as_deref(), Some("Ava"));

        state.tasks = Arc::from(Vec::new());
        home.observe(state);
        assert!(!Arc::ptr_eq(&renamed, &home.welcome()));
        assert_eq!(home.welcome().open_tasks(), 0);
    }
}
