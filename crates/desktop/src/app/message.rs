//! Message definitions passed around the desktop update loop.

use std::result::Result;
use std::time::Instant;

use iced::keyboard::Event as KeyboardEvent;
use iced::window;
use iced::Task;
use serene_core::{PomodoroMode, ThemeName, TimerHandle};

use crate::app::state::MutationKind;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    StateLoaded(Result<usize, String>),
    ReloadRequested,
    FirstRunElapsed(TimerHandle),
    WindowResized(f32),
    CloseRequested(window::Id),
    Tick(Instant),
    SettingsOpenChanged(bool),
    SettingsNameChanged(String),
    SettingsThemeSelected(ThemeName),
    SettingsWallpaperChanged(String),
    SettingsSubmitted,
    TimetableRequested,
    TodoInputChanged(String),
    TodoSubmitted,
    TodoToggled(String),
    TodoRemoved(String),
    TodoClearCompleted,
    MutationFinished(MutationKind, Result<(), String>),
    Pomodoro(PomodoroAction),
    Keyboard(KeyboardEvent),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum PomodoroAction {
    Start,
    Pause,
    Reset,
    Skip,
    SelectMode(PomodoroMode),
}

pub(crate) type Effect = Task<Message>;
