//! Core update loop translating user interactions into state changes.

use std::time::Instant;

use chrono::Local;
use iced::keyboard::{key::Named, Event as KeyboardEvent, Key};
use iced::widget::operation::{focus, move_cursor_to_end};
use iced::window;
use serene_core::{
    LayoutVariant, PomodoroMode, SettingsForm, StateSource, TimerCommand, TimerHandle,
};

use crate::app::commands::{first_run_delay_command, load_state_command, mutation_command};
use crate::app::helpers::open_external;
use crate::app::message::{Effect, Message, PomodoroAction};
use crate::app::state::{MutationKind, StatusToast};
use crate::app::theme::{iced_theme, Palette};
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::SereneDesktop;

impl SereneDesktop {
    pub(crate) fn react(&mut self, message: Message) -> Effect {
        self.prune_toast();
        let effect = match message {
            Message::StateLoaded(result) => self.handle_state_loaded(result),
            Message::ReloadRequested => self.reload(),
            Message::FirstRunElapsed(handle) => self.handle_first_run(handle),
            Message::WindowResized(width) => {
                self.resize(width);
                Effect::none()
            }
            Message::CloseRequested(id) => self.close(id),
            Message::Tick(now) => {
                self.tick(now);
                Effect::none()
            }
            Message::SettingsOpenChanged(open) => self.set_settings_open(open),
            Message::SettingsNameChanged(value) => {
                self.settings_form.name = value;
                self.settings_error = None;
                Effect::none()
            }
            Message::SettingsThemeSelected(theme) => {
                self.settings_form.theme = theme;
                self.settings_error = None;
                Effect::none()
            }
            Message::SettingsWallpaperChanged(value) => {
                self.settings_form.wallpaper = value;
                self.settings_error = None;
                Effect::none()
            }
            Message::SettingsSubmitted => self.submit_settings(),
            Message::TimetableRequested => {
                self.open_timetable();
                Effect::none()
            }
            Message::TodoInputChanged(value) => {
                self.todo.text = value;
                Effect::none()
            }
            Message::TodoSubmitted => self.submit_todo(),
            Message::TodoToggled(id) => self.run_mutation(MutationKind::ToggleTask(id)),
            Message::TodoRemoved(id) => self.run_mutation(MutationKind::RemoveTask(id)),
            Message::TodoClearCompleted => {
                if self.home.snapshot().tasks.iter().any(|task| task.completed) {
                    self.run_mutation(MutationKind::ClearCompleted)
                } else {
                    Effect::none()
                }
            }
            Message::MutationFinished(kind, result) => self.finish_mutation(kind, result),
            Message::Pomodoro(action) => {
                self.handle_pomodoro(action);
                Effect::none()
            }
            Message::Keyboard(event) => self.handle_keyboard(event),
        };

        let scheduled = self.sync_from_store();
        Effect::batch(vec![effect, scheduled])
    }

    /// Feed the newest published snapshot through the controller and schedule whatever timer
    /// work it asks for.
    pub(super) fn sync_from_store(&mut self) -> Effect {
        let published = self.inbox.lock().take();
        let Some(snapshot) = published else {
            return Effect::none();
        };

        let previous_layout = self.home.layout();
        let previous_theme = self.home.snapshot().theme;
        let commands = self.home.observe(snapshot);

        let theme = self.home.snapshot().theme;
        if theme != previous_theme {
            self.theme = iced_theme(theme, self.system_dark);
            self.palette = Palette::for_theme(theme, self.system_dark);
        }
        self.note_layout(previous_layout);

        let effects: Vec<Effect> = commands
            .into_iter()
            .map(|command| self.schedule(command))
            .collect();
        Effect::batch(effects)
    }

    fn schedule(&mut self, command: TimerCommand) -> Effect {
        match command {
            TimerCommand::Arm { handle, delay } => {
                let (task, abort) = first_run_delay_command(handle, delay).abortable();
                if let Some((_, stale)) = self.first_run_task.replace((handle, abort)) {
                    stale.abort();
                }
                task
            }
            TimerCommand::Cancel { handle } => {
                self.cancel_first_run(handle);
                Effect::none()
            }
        }
    }

    fn cancel_first_run(&mut self, handle: TimerHandle) {
        match self.first_run_task.take() {
            Some((armed, abort)) if armed == handle => abort.abort(),
            other => self.first_run_task = other,
        }
    }

    fn note_layout(&mut self, previous: LayoutVariant) {
        let layout = self.home.layout();
        if layout != previous {
            self.telemetry
                .record(TelemetryEvent::LayoutChanged(format!("{layout:?}")));
        }
    }

    pub(super) fn handle_state_loaded(&mut self, result: Result<usize, String>) -> Effect {
        match result {
            Ok(tasks) => {
                self.telemetry.record(TelemetryEvent::StateLoaded { tasks });
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load start page data");
                self.telemetry.record(TelemetryEvent::LoadFailed(err.clone()));
                self.status = Some(StatusToast::error(format!("Failed to load data: {err}")));
            }
        }
        Effect::none()
    }

    pub(super) fn reload(&mut self) -> Effect {
        let Some(store) = self.store.clone() else {
            return Effect::none();
        };
        store.begin_reload();
        load_state_command(store)
    }

    pub(super) fn handle_first_run(&mut self, handle: TimerHandle) -> Effect {
        if matches!(self.first_run_task, Some((armed, _)) if armed == handle) {
            self.first_run_task = None;
        }

        if !self.home.fire(handle) {
            return Effect::none();
        }
        self.telemetry.record(TelemetryEvent::FirstRunPromptOpened);
        self.seed_settings_form();
        self.focus_settings_name()
    }

    pub(super) fn resize(&mut self, width: f32) {
        let mobile = self.classifier.is_mobile(width);
        if mobile != self.home.is_mobile() {
            let previous = self.home.layout();
            self.home.set_mobile(mobile);
            self.note_layout(previous);
        }
    }

    pub(super) fn close(&mut self, id: window::Id) -> Effect {
        if let Some(TimerCommand::Cancel { handle }) = self.home.dispose() {
            self.cancel_first_run(handle);
        }
        if let Some((_, abort)) = self.first_run_task.take() {
            abort.abort();
        }
        if let (Some(store), Some(subscription)) = (self.store.as_ref(), self.subscription.take())
        {
            store.unsubscribe(subscription);
        }
        tracing::debug!(?id, "closing start page window");
        iced::exit()
    }

    pub(super) fn tick(&mut self, now: Instant) {
        self.now = Local::now();
        let elapsed = self
            .last_tick
            .replace(now)
            .map(|last| now.saturating_duration_since(last));

        let Some(elapsed) = elapsed else {
            return;
        };
        if let Some(finished) = self.pomodoro.tick(elapsed) {
            self.finish_session(finished);
        }
    }

    fn finish_session(&mut self, finished: PomodoroMode) {
        self.telemetry
            .record(TelemetryEvent::FocusSessionFinished(finished.label().into()));
        self.status = Some(StatusToast::info(format!(
            "{} finished, {} is up next",
            finished.label(),
            self.pomodoro.mode().label().to_lowercase()
        )));
    }

    pub(super) fn handle_pomodoro(&mut self, action: PomodoroAction) {
        match action {
            PomodoroAction::Start => {
                self.last_tick = Some(Instant::now());
                self.pomodoro.start();
            }
            PomodoroAction::Pause => self.pomodoro.pause(),
            PomodoroAction::Reset => self.pomodoro.reset(),
            PomodoroAction::Skip => self.pomodoro.skip(),
            PomodoroAction::SelectMode(mode) => self.pomodoro.select_mode(mode),
        }
    }

    pub(super) fn set_settings_open(&mut self, open: bool) -> Effect {
        if open == self.home.is_settings_open() {
            return Effect::none();
        }
        self.home.set_settings_open(open);
        if open {
            self.seed_settings_form();
            self.focus_settings_name()
        } else {
            self.settings_error = None;
            Effect::none()
        }
    }

    fn seed_settings_form(&mut self) {
        self.settings_form = SettingsForm::from_snapshot(self.home.snapshot());
        self.settings_error = None;
    }

    fn focus_settings_name(&self) -> Effect {
        Effect::batch(vec![
            focus(self.settings_name_id.clone()),
            move_cursor_to_end(self.settings_name_id.clone()),
        ])
    }

    pub(super) fn submit_settings(&mut self) -> Effect {
        match self.settings_form.validate() {
            Ok(settings) => self.run_mutation(MutationKind::SaveSettings(settings)),
            Err(err) => {
                self.settings_error = Some(err.to_string());
                Effect::none()
            }
        }
    }

    pub(super) fn submit_todo(&mut self) -> Effect {
        if !self.todo.can_submit() {
            return Effect::none();
        }
        let text = self.todo.text.trim().to_string();
        self.todo.submitting = true;
        self.run_mutation(MutationKind::AddTask(text))
    }

    pub(super) fn run_mutation(&mut self, kind: MutationKind) -> Effect {
        let Some(store) = self.store.clone() else {
            self.status = Some(StatusToast::error("Data directory is unavailable"));
            self.todo.submitting = false;
            return Effect::none();
        };

        self.pending_mutations += 1;
        Effect::perform(mutation_command(store, kind.clone()), move |result| {
            Message::MutationFinished(kind.clone(), result)
        })
    }

    pub(super) fn finish_mutation(
        &mut self,
        kind: MutationKind,
        result: Result<(), String>,
    ) -> Effect {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
        if matches!(kind, MutationKind::AddTask(_)) {
            self.todo.submitting = false;
        }

        match result {
            Ok(()) => {
                self.telemetry
                    .record(TelemetryEvent::MutationApplied(kind.label().into()));
                match kind {
                    MutationKind::AddTask(_) => {
                        self.todo.text.clear();
                        return focus(self.todo_input_id.clone());
                    }
                    MutationKind::SaveSettings(_) => {
                        self.telemetry.record(TelemetryEvent::SettingsSaved);
                        self.home.set_settings_open(false);
                        self.settings_error = None;
                        self.status = Some(StatusToast::info("Settings saved"));
                    }
                    MutationKind::ClearCompleted => {
                        self.status = Some(StatusToast::info("Cleared completed tasks"));
                    }
                    MutationKind::ToggleTask(_) | MutationKind::RemoveTask(_) => {}
                }
            }
            Err(err) => {
                tracing::warn!(action = kind.label(), error = %err, "mutation failed");
                self.telemetry.record(TelemetryEvent::MutationFailed {
                    action: kind.label().into(),
                    error: err.clone(),
                });
                if matches!(kind, MutationKind::SaveSettings(_)) {
                    self.settings_error = Some(err.clone());
                }
                self.status = Some(StatusToast::error(err));
            }
        }
        Effect::none()
    }

    pub(super) fn open_timetable(&mut self) {
        let Some(target) = self.timetable_url.clone() else {
            return;
        };
        if let Err(err) = open_external(&target) {
            tracing::warn!(error = %err, "failed to open timetable");
            self.status = Some(StatusToast::error(err.to_string()));
        }
    }

    pub(super) fn handle_keyboard(&mut self, event: KeyboardEvent) -> Effect {
        let KeyboardEvent::KeyPressed { key, .. } = event else {
            return Effect::none();
        };

        match key.as_ref() {
            Key::Named(Named::Escape) if self.home.is_settings_open() => {
                self.set_settings_open(false)
            }
            _ => Effect::none(),
        }
    }
}
