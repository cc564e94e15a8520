pub mod config;
pub mod database;
pub mod error;
pub mod home;
pub mod layout;
pub mod model;
pub mod pomodoro;
pub mod settings;
pub mod source;
pub mod store;
pub mod viewport;
pub mod welcome;

pub use config::AppConfig;
pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use home::{HomeController, TimerCommand, TimerHandle, FIRST_RUN_DELAY};
pub use layout::{select_layout, skeleton_plan, LayoutVariant};
pub use model::*;
pub use pomodoro::{Pomodoro, PomodoroDurations, PomodoroMode, TimerStatus};
pub use settings::{wallpaper_path, SettingsForm};
pub use source::{Listener, StateSource, SubscriptionId};
pub use store::AppStore;
pub use viewport::ViewportClassifier;
pub use welcome::WelcomePayload;
