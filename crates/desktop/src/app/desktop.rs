//! Iced application wiring for the Serene Start window lifecycle.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use iced::event::{self, Event};
use iced::task::Handle as TaskHandle;
use iced::time;
use iced::widget::Id;
use iced::Subscription;
use iced::{window, Size, Theme};
use parking_lot::Mutex;
use serene_core::{
    AppConfig, AppSnapshot, AppStore, HomeController, Pomodoro, PomodoroDurations,
    SettingsForm, StateSource, SubscriptionId, TimerHandle, ViewportClassifier,
};

use crate::app::commands::load_state_command;
use crate::app::helpers::detect_system_dark;
use crate::app::message::{Effect, Message};
use crate::app::options::{DesktopFlags, DesktopOptions, DEFAULT_TIMETABLE_PAGE};
use crate::app::state::{StatusToast, TodoDraft};
use crate::app::theme::{iced_theme, Palette};
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

const INITIAL_WIDTH: f32 = 1140.0;
const TOAST_LIFETIME: Duration = Duration::from_secs(6);

pub fn run(options: DesktopOptions) -> iced::Result {
    let _ = tracing_subscriber::fmt::try_init();

    let boot_flags = DesktopFlags::from(options);
    let window_settings = window::Settings {
        size: Size::new(INITIAL_WIDTH, 780.0),
        min_size: Some(Size::new(360.0, 560.0)),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application(
        move || SereneDesktop::bootstrap(boot_flags.clone()),
        SereneDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .subscription(app_subscription)
    .run()
}

pub(crate) fn app_title(_state: &SereneDesktop) -> String {
    format!("{} v{}", views::BRAND, env!("CARGO_PKG_VERSION"))
}

fn app_theme(state: &SereneDesktop) -> Option<Theme> {
    Some(state.page_theme())
}

fn app_subscription(state: &SereneDesktop) -> Subscription<Message> {
    state.subscription()
}

pub(crate) struct SereneDesktop {
    pub(crate) store: Option<AppStore>,
    pub(crate) home: HomeController,
    pub(crate) classifier: ViewportClassifier,
    pub(crate) system_dark: bool,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) telemetry: telemetry::Handle,
    pub(crate) status: Option<StatusToast>,
    pub(crate) settings_form: SettingsForm,
    pub(crate) settings_error: Option<String>,
    pub(crate) settings_name_id: Id,
    pub(crate) todo: TodoDraft,
    pub(crate) todo_input_id: Id,
    pub(crate) pomodoro: Pomodoro,
    pub(crate) last_tick: Option<Instant>,
    pub(crate) now: DateTime<Local>,
    pub(crate) timetable_url: Option<String>,
    pub(crate) first_run_task: Option<(TimerHandle, TaskHandle)>,
    /// Latest snapshot published by the store, drained after every update.
    pub(crate) inbox: Arc<Mutex<Option<AppSnapshot>>>,
    pub(crate) subscription: Option<SubscriptionId>,
    pub(crate) pending_mutations: usize,
}

impl SereneDesktop {
    pub(crate) fn bootstrap(flags: DesktopFlags) -> (Self, Effect) {
        let system_dark = detect_system_dark();
        let home = HomeController::new(flags.first_run_delay);
        let initial_theme = home.snapshot().theme;
        let telemetry = telemetry::Handle::new();
        let inbox = Arc::new(Mutex::new(None));

        let mut store_opt = None;
        let mut subscription = None;
        let mut status = None;
        let mut timetable_url = flags.timetable_url.clone();
        let mut effect = Effect::none();

        match AppConfig::discover(flags.data_dir.clone()) {
            Ok(config) => {
                if timetable_url.is_none() {
                    let page = config.data_dir().join(DEFAULT_TIMETABLE_PAGE);
                    timetable_url = Some(page.display().to_string());
                }

                let store = AppStore::new(config);
                let sink = Arc::clone(&inbox);
                subscription = Some(store.subscribe(Arc::new(move |snapshot: &AppSnapshot| {
                    *sink.lock() = Some(snapshot.clone());
                })));
                telemetry.record(TelemetryEvent::AppStarted);
                effect = load_state_command(store.clone());
                store_opt = Some(store);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to resolve data directory");
                status = Some(StatusToast::error(err.to_string()));
            }
        }

        (
            Self {
                store: store_opt,
                home,
                classifier: ViewportClassifier::new(flags.mobile_breakpoint),
                system_dark,
                theme: iced_theme(initial_theme, system_dark),
                palette: Palette::for_theme(initial_theme, system_dark),
                telemetry,
                status,
                settings_form: SettingsForm::default(),
                settings_error: None,
                settings_name_id: Id::new("settings_name_input"),
                todo: TodoDraft::default(),
                todo_input_id: Id::new("todo_input"),
                pomodoro: Pomodoro::new(PomodoroDurations::default()),
                last_tick: None,
                now: Local::now(),
                timetable_url,
                first_run_task: None,
                inbox,
                subscription,
                pending_mutations: 0,
            },
            effect,
        )
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        let clock = time::every(Duration::from_secs(1)).map(|_| Message::Tick(Instant::now()));

        let events = event::listen_with(|event, _, _| match event {
            Event::Window(window::Event::Opened { size, .. })
            | Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
            Event::Keyboard(key_event) => Some(Message::Keyboard(key_event)),
            _ => None,
        });

        let close = window::close_requests().map(Message::CloseRequested);

        Subscription::batch(vec![clock, events, close])
    }

    pub(super) fn prune_toast(&mut self) {
        if let Some(toast) = &self.status {
            if toast.created_at.elapsed() > TOAST_LIFETIME {
                self.status = None;
            }
        }
    }
}
