use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{CliCommand, NameArgs, StatusArgs, TodoCommand, WallpaperArgs};
use crate::core::{AppConfig, AppSnapshot, AppStore, StoreError, Task, ThemeName};

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    let store = AppStore::new(config.clone());
    match command {
        CliCommand::Status(args) => handle_status(&store, &args, &mut writer),
        CliCommand::Name(args) => handle_name(&store, &args, &mut writer),
        CliCommand::Theme(args) => handle_theme(&store, args.theme, &mut writer),
        CliCommand::Wallpaper(args) => handle_wallpaper(&store, &args, &mut writer),
        CliCommand::Todo(todo) => handle_todo(&store, todo, &mut writer),
        CliCommand::Desktop(_) => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_status<W: Write>(store: &AppStore, args: &StatusArgs, mut writer: W) -> Result<()> {
    let snapshot = store.load()?;
    if args.json {
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Name: {}",
        snapshot.name.as_deref().unwrap_or("(not set)")
    )?;
    writeln!(writer, "Theme: {}", snapshot.theme)?;
    writeln!(
        writer,
        "Wallpaper: {}",
        snapshot.custom_wallpaper.as_deref().unwrap_or("(none)")
    )?;
    write_task_summary(&snapshot, &mut writer)?;
    for task in snapshot.tasks.iter() {
        writeln!(writer, "  {}", TaskLine(task))?;
    }
    Ok(())
}

fn handle_name<W: Write>(store: &AppStore, args: &NameArgs, mut writer: W) -> Result<()> {
    let joined = args.name.join(" ");
    let name = Some(joined.as_str()).filter(|value| !value.trim().is_empty());
    store.set_name(name)?;
    match name {
        Some(value) => writeln!(writer, "Name set to {}", value.trim())?,
        None => writeln!(writer, "Name cleared")?,
    }
    Ok(())
}

fn handle_theme<W: Write>(store: &AppStore, theme: ThemeName, mut writer: W) -> Result<()> {
    store.set_theme(theme)?;
    writeln!(writer, "Theme set to {theme}")?;

    if theme == ThemeName::Custom && store.load()?.custom_wallpaper.is_none() {
        writeln!(
            writer,
            "No wallpaper configured yet; run `serene wallpaper <URI>` to pick one"
        )?;
    }
    Ok(())
}

fn handle_wallpaper<W: Write>(store: &AppStore, args: &WallpaperArgs, mut writer: W) -> Result<()> {
    store.set_wallpaper(args.uri.as_deref())?;
    let snapshot = store.load()?;
    match snapshot.custom_wallpaper.as_deref() {
        Some(uri) => writeln!(writer, "Wallpaper set to {uri}")?,
        None => writeln!(writer, "Wallpaper cleared")?,
    }
    Ok(())
}

fn handle_todo<W: Write>(store: &AppStore, command: TodoCommand, mut writer: W) -> Result<()> {
    match command {
        TodoCommand::Add { text } => {
            let task = store.add_task(&text.join(" "))?;
            writeln!(writer, "Added {}", TaskLine(&task))?;
        }
        TodoCommand::List { open } => {
            let snapshot = store.load()?;
            write_task_summary(&snapshot, &mut writer)?;
            for task in snapshot.tasks.iter().filter(|task| !open || !task.completed) {
                writeln!(writer, "  {}", TaskLine(task))?;
            }
        }
        TodoCommand::Done { id } => {
            let task = store.toggle_task(&id)?;
            let verb = if task.completed { "Completed" } else { "Reopened" };
            writeln!(writer, "{verb} {}", TaskLine(&task))?;
        }
        TodoCommand::Rename { id, text } => {
            store.rename_task(&id, &text.join(" "))?;
            writeln!(writer, "Renamed {id}")?;
        }
        TodoCommand::Remove { ids } => {
            let summary = RemoveSummary::collect(store, &ids)?;
            summary.write_to(&mut writer)?;
        }
        TodoCommand::Clear => {
            let removed = store.clear_completed()?;
            if removed == 0 {
                writeln!(writer, "No completed tasks")?;
            } else {
                writeln!(writer, "Cleared {}", plural(removed, "completed task"))?;
            }
        }
    }
    Ok(())
}

fn write_task_summary<W: Write>(snapshot: &AppSnapshot, mut writer: W) -> Result<()> {
    let open = snapshot.open_task_count();
    let done = snapshot.tasks.len() - open;
    writeln!(writer, "Tasks: {open} open, {done} done")?;
    Ok(())
}

struct TaskLine<'a>(&'a Task);

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.0.completed { "x" } else { " " };
        write!(f, "[{mark}] {}  {}", self.0.id, self.0.text)
    }
}

struct RemoveSummary {
    removed: usize,
    missing: Vec<String>,
}

impl RemoveSummary {
    fn collect(store: &AppStore, ids: &[String]) -> Result<Self> {
        let mut removed = 0usize;
        let mut missing = Vec::new();
        for id in ids {
            match store.remove_task(id) {
                Ok(()) => removed += 1,
                Err(StoreError::TaskNotFound(id)) => missing.push(id),
                Err(err) => return Err(err.into()),
            }
        }
        Ok(Self { removed, missing })
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.removed > 0 {
            writeln!(writer, "Removed {}", plural(self.removed, "task"))?;
        } else {
            writeln!(writer, "No tasks removed")?;
        }
        if !self.missing.is_empty() {
            writeln!(writer, "Not found: {}", self.missing.join(", "))?;
        }
        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::cli::ThemeArgs;

    fn temp_config() -> (AppConfig, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf());
        (config, dir)
    }

    fn run(config: &AppConfig, command: CliCommand) -> String {
        let mut output = Vec::new();
        execute(config, command, &mut output).expect("execute command");
        String::from_utf8(output).expect("utf8")
    }

    fn add(config: &AppConfig, text: &str) -> Task {
        AppStore::new(config.clone())
            .add_task(text)
            .expect("add task")
    }

    #[test]
    fn status_reports_defaults_on_first_run() {
        let (config, _dir) = temp_config();
        let output = run(&config, CliCommand::Status(StatusArgs { json: false }));
        assert_eq!(
            output,
            "Name: (not set)\nTheme: default\nWallpaper: (none)\nTasks: 0 open, 0 done\n"
        );
    }

    #[test]
    fn status_json_carries_snapshot_fields() {
        let (config, _dir) = temp_config();
        add(&config, "Water plants");
        run(
            &config,
            CliCommand::Name(NameArgs {
                name: vec!["Ava".into()],
            }),
        );

        let output = run(&config, CliCommand::Status(StatusArgs { json: true }));
        let value: Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["name"], "Ava");
        assert_eq!(value["theme"], "default");
        assert_eq!(value["is_data_loaded"], true);
        assert_eq!(value["tasks"][0]["text"], "Water plants");
    }

    #[test]
    fn name_without_argument_clears_it() {
        let (config, _dir) = temp_config();
        run(
            &config,
            CliCommand::Name(NameArgs {
                name: vec!["Ava".into()],
            }),
        );
        let output = run(&config, CliCommand::Name(NameArgs { name: vec![] }));
        assert_eq!(output, "Name cleared\n");

        let snapshot = AppStore::new(config.clone()).load().expect("load");
        assert_eq!(snapshot.name, None);
    }

    #[test]
    fn custom_theme_hints_at_missing_wallpaper() {
        let (config, _dir) = temp_config();
        let output = run(
            &config,
            CliCommand::Theme(ThemeArgs {
                theme: ThemeName::Custom,
            }),
        );
        assert!(output.starts_with("Theme set to custom\n"));
        assert!(output.contains("serene wallpaper"));
    }

    #[test]
    fn remote_wallpaper_is_rejected() {
        let (config, _dir) = temp_config();
        let mut output = Vec::new();
        let err = execute(
            &config,
            CliCommand::Wallpaper(WallpaperArgs {
                uri: Some("https://example.com/bg.jpg".into()),
            }),
            &mut output,
        )
        .unwrap_err();
        assert!(err.to_string().contains("https://example.com/bg.jpg"));
    }

    #[test]
    fn done_toggles_and_list_filters_open() {
        let (config, _dir) = temp_config();
        let first = add(&config, "Water plants");
        add(&config, "Call mum");

        let output = run(
            &config,
            CliCommand::Todo(TodoCommand::Done {
                id: first.id.clone(),
            }),
        );
        assert!(output.starts_with("Completed [x]"));

        let output = run(&config, CliCommand::Todo(TodoCommand::List { open: true }));
        assert!(output.starts_with("Tasks: 1 open, 1 done\n"));
        assert!(output.contains("Call mum"));
        assert!(!output.contains("Water plants"));
    }

    #[test]
    fn remove_reports_removed_and_missing() {
        let (config, _dir) = temp_config();
        let task = add(&config, "Water plants");

        let output = run(
            &config,
            CliCommand::Todo(TodoCommand::Remove {
                ids: vec![task.id, "missing".into()],
            }),
        );
        assert_eq!(output, "Removed 1 task\nNot found: missing\n");
    }

    #[test]
    fn clear_without_completed_tasks_says_so() {
        let (config, _dir) = temp_config();
        add(&config, "Water plants");
        let output = run(&config, CliCommand::Todo(TodoCommand::Clear));
        assert_eq!(output, "No completed tasks\n");
    }
}
