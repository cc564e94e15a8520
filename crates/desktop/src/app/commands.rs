//! Async adapters that map desktop intents into core store calls.

use std::time::Duration;

use serene_core::{AppStore, TimerHandle};

use crate::app::message::{Effect, Message};
use crate::app::state::MutationKind;

pub(crate) fn load_state_command(store: AppStore) -> Effect {
    Effect::perform(
        async move {
            tokio::task::spawn_blocking(move || store.load().map(|snapshot| snapshot.tasks.len()))
                .await
                .map_err(|err| err.to_string())
                .and_then(|result| result.map_err(|err| err.to_string()))
        },
        Message::StateLoaded,
    )
}

pub(crate) fn mutation_command(
    store: AppStore,
    kind: MutationKind,
) -> impl std::future::Future<Output = Result<(), String>> {
    async move {
        tokio::task::spawn_blocking(move || match &kind {
            MutationKind::AddTask(text) => store.add_task(text).map(|_| ()),
            MutationKind::ToggleTask(id) => store.toggle_task(id).map(|_| ()),
            MutationKind::RemoveTask(id) => store.remove_task(id),
            MutationKind::ClearCompleted => store.clear_completed().map(|_| ()),
            MutationKind::SaveSettings(settings) => store.apply_settings(settings.clone()),
        })
        .await
        .map_err(|err| err.to_string())
        .and_then(|result| result.map_err(|err| err.to_string()))
    }
}

/// One-shot delay backing the first-run settings prompt.
pub(crate) fn first_run_delay_command(handle: TimerHandle, delay: Duration) -> Effect {
    Effect::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| Message::FirstRunElapsed(handle),
    )
}
