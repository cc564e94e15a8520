//! Desktop application wiring that composes views, state, and the core store into Serene Start.

pub use self::desktop::run;
pub use self::options::DesktopOptions;

mod commands;
mod desktop;
mod helpers;
mod message;
mod options;
mod state;
mod theme;
mod update;
mod views;
