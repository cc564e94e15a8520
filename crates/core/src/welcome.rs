use std::sync::Arc;

use crate::model::{has_display_name, Task};

/// What the welcome block renders: the visitor's name and their task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomePayload {
    pub name: Option<String>,
    pub tasks: Arc<[Task]>,
}

impl WelcomePayload {
    pub fn new(name: Option<String>, tasks: Arc<[Task]>) -> Self {
        Self { name, tasks }
    }

    /// Greeting for a local hour in `0..24`.
    pub fn greeting(&self, hour: u32) -> String {
        let salutation = match hour {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        };
        match self.display_name() {
            Some(name) => format!("{salutation}, {name}"),
            None => salutation.to_string(),
        }
    }

    pub fn open_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn summary(&self) -> String {
        match self.open_tasks() {
            0 => "All clear for today".to_string(),
            1 => "1 task to go".to_string(),
            count => format!("{count} tasks to go"),
        }
    }

    fn display_name(&self) -> Option<&str> {
        if has_display_name(self.name.as_deref()) {
            self.name.as_deref().map(str::trim)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn task(text: &str, completed: bool) -> Task {
        Task {
            id: text.into(),
            text: text.into(),
            completed,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[rstest]
    #[case(4, "Good evening")]
    #[case(5, "Good morning")]
    #[case(11, "Good morning")]
    #[case(12, "Good afternoon")]
    #[case(17, "Good afternoon")]
    #[case(18, "Good evening")]
    fn greeting_follows_hour(#[case] hour: u32, #[case] expected: &str) {
        let payload = WelcomePayload::new(None, Arc::from(Vec::new()));
        assert_eq!(payload.greeting(hour), expected);
    }

    #[test]
    fn greeting_includes_trimmed_name() {
        let payload = WelcomePayload::new(Some(" Ava ".into()), Arc::from(Vec::new()));
        assert_eq!(payload.greeting(9), "Good morning, Ava");
        let blank = WelcomePayload::new(Some("  ".into()), Arc::from(Vec::new()));
        assert_eq!(blank.greeting(9), "Good morning");
    }

    #[test]
    fn summary_counts_open_tasks() {
        let none = WelcomePayload::new(None, Arc::from(vec![task("done", true)]));
        assert_eq!(none.summary(), "All clear for today");
        let one = WelcomePayload::new(None, Arc::from(vec![task("a", false), task("b", true)]));
        assert_eq!(one.summary(), "1 task to go");
        let many = WelcomePayload::new(None, Arc::from(vec![task("a", false), task("b", false)]));
        assert_eq!(many.summary(), "2 tasks to go");
    }
}
