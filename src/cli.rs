use std::path::PathBuf;

use clap::{value_parser, Args, Parser, Subcommand};

use crate::core::ThemeName;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "serene",
    version,
    about = "A calm, local-first start page with a greeting, tasks and a focus timer.",
    after_help = "Examples:\n  serene                      Launch the desktop start page\n  serene name Ava\n  serene theme forest\n  serene todo add Water the plants\n  serene status --json"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive (e.g. "info", "serene_core=debug"); falls back to RUST_LOG
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the desktop start page (default command)
    Desktop(DesktopArgs),
    /// Print the stored name, theme, wallpaper and tasks
    Status(StatusArgs),
    /// Set the greeting name, or clear it when omitted
    Name(NameArgs),
    /// Switch the colour theme
    Theme(ThemeArgs),
    /// Set the wallpaper shown by the custom theme, or clear it when omitted
    Wallpaper(WallpaperArgs),
    /// Manage the to-do list
    #[command(subcommand)]
    Todo(TodoCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct DesktopArgs {
    /// Window width (logical pixels) below which the single-column layout is used
    #[arg(long = "mobile-breakpoint", value_name = "PX", value_parser = value_parser!(f32))]
    pub mobile_breakpoint: Option<f32>,

    /// URL or file opened by the header's timetable link
    #[arg(long = "timetable", value_name = "TARGET")]
    pub timetable: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Emit the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Name to greet; words are joined with spaces
    #[arg(value_name = "NAME")]
    pub name: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    #[arg(value_enum, value_name = "THEME")]
    pub theme: ThemeName,
}

#[derive(Args, Debug, Clone)]
pub struct WallpaperArgs {
    /// `file://` URI or path to a local image
    #[arg(value_name = "URI")]
    pub uri: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TodoCommand {
    /// Add a task
    Add {
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// List tasks in creation order
    List {
        /// Hide completed tasks
        #[arg(long)]
        open: bool,
    },
    /// Toggle a task between open and done
    Done {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Replace a task's text
    Rename {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// Delete one or more tasks by id
    Remove {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
    /// Delete every completed task
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["serene"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["serene", "status", "--json", "--data-dir", "/tmp/serene"])
            .expect("parse");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/serene")));
        assert!(matches!(cli.command, Some(CliCommand::Status(StatusArgs { json: true }))));
    }

    #[test]
    fn parses_theme_value() {
        let cli = Cli::try_parse_from(["serene", "theme", "ocean"]).expect("parse");
        match cli.command {
            Some(CliCommand::Theme(args)) => assert_eq!(args.theme, ThemeName::Ocean),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn todo_add_joins_words() {
        let cli = Cli::try_parse_from(["serene", "todo", "add", "water", "plants"]).expect("parse");
        match cli.command {
            Some(CliCommand::Todo(TodoCommand::Add { text })) => {
                assert_eq!(text.join(" "), "water plants")
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["serene", "theme", "neon"]).is_err());
    }
}
