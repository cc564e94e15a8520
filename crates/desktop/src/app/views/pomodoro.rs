use iced::font::Weight as FontWeight;
use iced::widget::{button, column, progress_bar, row, text};
use iced::{Alignment, Element, Font, Length};
use serene_core::{PomodoroMode, TimerStatus};

use crate::app::message::{Message, PomodoroAction};

use super::super::desktop::SereneDesktop;
use super::styles::{choice_button_style, ghost_button_style, primary_button_style, progress_style};

impl SereneDesktop {
    pub(crate) fn pomodoro_section(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let timer = &self.pomodoro;

        let modes = PomodoroMode::ALL
            .iter()
            .fold(row![].spacing(6), |modes, mode| {
                let selected = *mode == timer.mode();
                modes.push(
                    button(text(mode.label()).size(12))
                        .on_press(Message::Pomodoro(PomodoroAction::SelectMode(*mode)))
                        .padding([4, 10])
                        .style(move |_, status| choice_button_style(palette, selected, status)),
                )
            });

        let remaining = text(timer.format_remaining())
            .size(56)
            .font(Font {
                weight: FontWeight::Semibold,
                ..Font::MONOSPACE
            })
            .color(palette.text_primary);

        let progress = progress_bar(0.0..=1.0, timer.progress())
            .style(move |_| progress_style(palette));

        let (primary_label, primary_action) = match timer.status() {
            TimerStatus::Running => ("Pause", PomodoroAction::Pause),
            TimerStatus::Paused => ("Resume", PomodoroAction::Start),
            TimerStatus::Idle => ("Start", PomodoroAction::Start),
        };

        let controls = row![
            button(text(primary_label).size(14))
                .on_press(Message::Pomodoro(primary_action))
                .padding([6, 18])
                .style(move |_, status| primary_button_style(palette, status)),
            button(text("Reset").size(14))
                .on_press(Message::Pomodoro(PomodoroAction::Reset))
                .padding([6, 12])
                .style(move |_, status| ghost_button_style(palette, status)),
            button(text("Skip").size(14))
                .on_press(Message::Pomodoro(PomodoroAction::Skip))
                .padding([6, 12])
                .style(move |_, status| ghost_button_style(palette, status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let sessions = text(format!("Focus sessions completed: {}", timer.completed_focus()))
            .size(12)
            .color(palette.text_muted);

        column![
            text("Pomodoro").size(18).color(palette.text_primary),
            modes,
            remaining,
            progress,
            controls,
            sessions,
        ]
        .spacing(14)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
    }
}
