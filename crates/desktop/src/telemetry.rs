//! Collects lightweight start-page telemetry so first-run and focus flows can be checked locally.

use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    StateLoaded { tasks: usize },
    LoadFailed(String),
    LayoutChanged(String),
    FirstRunPromptOpened,
    SettingsSaved,
    MutationApplied(String),
    MutationFailed { action: String, error: String },
    FocusSessionFinished(String),
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::StateLoaded { tasks } => {
                    tracing::debug!(tasks, "desktop telemetry state loaded")
                }
                Event::LoadFailed(error) => {
                    tracing::debug!(error = %error, "desktop telemetry load failed")
                }
                Event::LayoutChanged(layout) => {
                    tracing::debug!(layout = layout.as_str(), "desktop telemetry layout changed")
                }
                Event::FirstRunPromptOpened => {
                    tracing::debug!("desktop telemetry first-run prompt opened")
                }
                Event::SettingsSaved => tracing::debug!("desktop telemetry settings saved"),
                Event::MutationApplied(action) => tracing::debug!(
                    action = action.as_str(),
                    "desktop telemetry mutation applied"
                ),
                Event::MutationFailed { action, error } => tracing::debug!(
                    action = action.as_str(),
                    error = %error,
                    "desktop telemetry mutation failed"
                ),
                Event::FocusSessionFinished(mode) => {
                    tracing::debug!(mode = mode.as_str(), "desktop telemetry session finished")
                }
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }

    #[cfg(test)]
    pub(crate) fn recorded(&self, predicate: impl Fn(&Event) -> bool) -> bool {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().iter().any(predicate)
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = predicate;
            false
        }
    }
}
