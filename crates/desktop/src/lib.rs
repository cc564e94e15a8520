//! Desktop crate facade exposing the iced-based Serene Start window to the wider workspace.

mod app;
mod telemetry;

pub use app::{run, DesktopOptions};
