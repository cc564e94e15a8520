//! View composition for the start page: header, welcome, clock, focus timer and task list.

mod datetime;
mod header;
mod layout;
mod pomodoro;
mod settings;
mod skeleton;
mod status;
mod styles;
mod todo;
mod welcome;

pub(crate) use layout::compose as compose_root;
pub(crate) use header::BRAND;
