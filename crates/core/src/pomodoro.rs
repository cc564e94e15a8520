//! Pomodoro countdown that cycles focus sessions with short and long breaks.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PomodoroMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl PomodoroMode {
    pub const ALL: &'static [PomodoroMode] = &[
        PomodoroMode::Focus,
        PomodoroMode::ShortBreak,
        PomodoroMode::LongBreak,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PomodoroMode::Focus => "Focus",
            PomodoroMode::ShortBreak => "Short break",
            PomodoroMode::LongBreak => "Long break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroDurations {
    pub focus: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    /// Completed focus sessions between long breaks.
    pub long_break_every: u32,
}

impl PomodoroDurations {
    pub fn for_mode(&self, mode: PomodoroMode) -> Duration {
        match mode {
            PomodoroMode::Focus => self.focus,
            PomodoroMode::ShortBreak => self.short_break,
            PomodoroMode::LongBreak => self.long_break,
        }
    }
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            focus: Duration::from_secs(25 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            long_break_every: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pomodoro {
    durations: PomodoroDurations,
    mode: PomodoroMode,
    status: TimerStatus,
    remaining: Duration,
    completed_focus: u32,
}

impl Pomodoro {
    pub fn new(durations: PomodoroDurations) -> Self {
        Self {
            durations,
            mode: PomodoroMode::Focus,
            status: TimerStatus::Idle,
            remaining: durations.focus,
            completed_focus: 0,
        }
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    /// Share of the current session already elapsed, `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        let total = self.durations.for_mode(self.mode).as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - self.remaining.as_secs_f32() / total).clamp(0.0, 1.0)
    }

    /// `MM:SS`, rounding partial seconds up so the display never shows 00:00 while running.
    pub fn format_remaining(&self) -> String {
        let secs = self.remaining.as_secs() + u64::from(self.remaining.subsec_nanos() > 0);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn start(&mut self) {
        self.status = TimerStatus::Running;
    }

    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    pub fn reset(&mut self) {
        self.status = TimerStatus::Idle;
        self.remaining = self.durations.for_mode(self.mode);
    }

    pub fn select_mode(&mut self, mode: PomodoroMode) {
        self.mode = mode;
        self.reset();
    }

    /// Jump to the following session without crediting the current one.
    pub fn skip(&mut self) {
        let next = self.next_mode();
        self.select_mode(next);
    }

    /// Advance a running countdown. Returns the mode that just finished, if any.
    pub fn tick(&mut self, elapsed: Duration) -> Option<PomodoroMode> {
        if self.status != TimerStatus::Running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return None;
        }

        let finished = self.mode;
        if finished == PomodoroMode::Focus {
            self.completed_focus += 1;
        }
        let next = self.next_mode();
        self.select_mode(next);
        tracing::debug!(finished = finished.label(), next = next.label(), "pomodoro session finished");
        Some(finished)
    }

    fn next_mode(&self) -> PomodoroMode {
        match self.mode {
            PomodoroMode::Focus => {
                let every = self.durations.long_break_every.max(1);
                if self.completed_focus > 0 && self.completed_focus % every == 0 {
                    PomodoroMode::LongBreak
                } else {
                    PomodoroMode::ShortBreak
                }
            }
            PomodoroMode::ShortBreak | PomodoroMode::LongBreak => PomodoroMode::Focus,
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroDurations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quick() -> Pomodoro {
        Pomodoro::new(PomodoroDurations {
            focus: Duration::from_secs(3),
            short_break: Duration::from_secs(1),
            long_break: Duration::from_secs(2),
            long_break_every: 2,
        })
    }

    fn finish_session(timer: &mut Pomodoro) -> Option<PomodoroMode> {
        timer.start();
        timer.tick(timer.remaining())
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = quick();
        assert_eq!(timer.tick(Duration::from_secs(10)), None);
        assert_eq!(timer.remaining(), Duration::from_secs(3));
    }

    #[test]
    fn pause_freezes_countdown() {
        let mut timer = quick();
        timer.start();
        timer.tick(Duration::from_secs(1));
        timer.pause();
        timer.tick(Duration::from_secs(1));
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert_eq!(timer.remaining(), Duration::from_secs(2));
        assert_eq!(timer.format_remaining(), "00:02");
    }

    #[test]
    fn cycles_focus_and_breaks_with_long_break() {
        let mut timer = quick();
        let mut modes = Vec::new();
        for _ in 0..4 {
            modes.push(finish_session(&mut timer).unwrap());
        }
        assert_eq!(
            modes,
            vec![
                PomodoroMode::Focus,
                PomodoroMode::ShortBreak,
                PomodoroMode::Focus,
                PomodoroMode::LongBreak,
            ]
        );
        assert_eq!(timer.mode(), PomodoroMode::Focus);
        assert_eq!(timer.completed_focus(), 2);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn skip_does_not_credit_focus() {
        let mut timer = quick();
        timer.skip();
        assert_eq!(timer.mode(), PomodoroMode::ShortBreak);
        assert_eq!(timer.completed_focus(), 0);
    }

    #[test]
    fn progress_and_format() {
        let mut timer = Pomodoro::default();
        assert_eq!(timer.format_remaining(), "25:00");
        timer.start();
        timer.tick(Duration::from_millis(750 * 1000));
        assert!((timer.progress() - 0.5).abs() < f32::EPSILON);
        timer.tick(Duration::from_millis(500));
        assert_eq!(timer.format_remaining(), "12:30");
    }
}
