//! Configuration surfaces for tailoring the start page to a user's machine.

use std::path::PathBuf;
use std::time::Duration;

use serene_core::viewport::DEFAULT_MOBILE_BREAKPOINT;
use serene_core::FIRST_RUN_DELAY;

/// Bundled timetable page, relative to the data directory.
pub const DEFAULT_TIMETABLE_PAGE: &str = "timetablecreator/index2.html";

#[derive(Debug, Clone)]
pub struct DesktopOptions {
    pub data_dir: Option<PathBuf>,
    /// Window widths below this are rendered with the single-column layout.
    pub mobile_breakpoint: f32,
    pub first_run_delay: Duration,
    /// Target of the header's "Timetable Creator" link. Defaults to
    /// [`DEFAULT_TIMETABLE_PAGE`] inside the data directory.
    pub timetable_url: Option<String>,
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self {
            data_dir: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            first_run_delay: FIRST_RUN_DELAY,
            timetable_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DesktopFlags {
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) mobile_breakpoint: f32,
    pub(crate) first_run_delay: Duration,
    pub(crate) timetable_url: Option<String>,
}

impl From<DesktopOptions> for DesktopFlags {
    fn from(options: DesktopOptions) -> Self {
        Self {
            data_dir: options.data_dir,
            mobile_breakpoint: options.mobile_breakpoint,
            first_run_delay: options.first_run_delay,
            timetable_url: options.timetable_url,
        }
    }
}
