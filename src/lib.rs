pub mod cli;
pub mod commands;
pub mod logging;

pub use serene_core as core;
pub use serene_core::AppConfig;

pub use serene_desktop as desktop;
pub use serene_desktop::DesktopOptions;
