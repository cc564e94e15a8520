use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};
use serene_core::Task;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::SereneDesktop;
use super::styles::{
    choice_button_style, danger_icon_style, ghost_button_style, primary_button_style,
    text_input_style, with_alpha,
};

impl SereneDesktop {
    pub(crate) fn todo_section(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let snapshot = self.home.snapshot();
        let open = snapshot.open_task_count();
        let done = snapshot.tasks.len() - open;

        let title = row![
            text("Today's tasks").size(18).color(palette.text_primary),
            Space::new().width(Length::Fill),
            text(format!("{open} open · {done} done"))
                .size(12)
                .color(palette.text_muted),
        ]
        .align_y(Alignment::Center);

        let input = text_input("What needs doing?", &self.todo.text)
            .id(self.todo_input_id.clone())
            .on_input(Message::TodoInputChanged)
            .on_submit(Message::TodoSubmitted)
            .padding(10)
            .style(move |_, status| text_input_style(palette, status));

        let add = button(text("Add").size(14))
            .on_press_maybe(self.todo.can_submit().then_some(Message::TodoSubmitted))
            .padding([8, 16])
            .style(move |_, status| primary_button_style(palette, status));

        let entry = row![input, add].spacing(8).align_y(Alignment::Center);

        let list: Element<'_, Message> = if snapshot.tasks.is_empty() {
            container(
                text("Nothing here yet. Add something above.")
                    .size(14)
                    .color(palette.text_muted),
            )
            .padding([12, 0])
            .into()
        } else {
            snapshot
                .tasks
                .iter()
                .fold(Column::new().spacing(4), |list, task| {
                    list.push(task_row(task, palette))
                })
                .into()
        };

        let mut section = column![title, entry, list].spacing(14);
        if done > 0 {
            section = section.push(
                row![
                    Space::new().width(Length::Fill),
                    button(text("Clear completed").size(13))
                        .on_press(Message::TodoClearCompleted)
                        .padding([4, 10])
                        .style(move |_, status| ghost_button_style(palette, status)),
                ]
                .align_y(Alignment::Center),
            );
        }

        section.into()
    }
}

fn task_row(task: &Task, palette: Palette) -> Element<'_, Message> {
    let completed = task.completed;
    let marker = if completed { "✓" } else { " " };
    let toggle = button(text(marker).size(13).width(Length::Fixed(14.0)))
        .on_press(Message::TodoToggled(task.id.clone()))
        .padding([2, 6])
        .style(move |_, status| choice_button_style(palette, completed, status));

    let label_color = if completed {
        with_alpha(palette.text_secondary, 0.7)
    } else {
        palette.text_primary
    };
    let label = text(&task.text)
        .size(15)
        .color(label_color)
        .width(Length::Fill);

    let remove = button(text("✕").size(13))
        .on_press(Message::TodoRemoved(task.id.clone()))
        .padding([2, 8])
        .style(move |_, status| danger_icon_style(palette, status));

    row![toggle, label, remove]
        .spacing(10)
        .align_y(Alignment::Center)
        .padding([4, 0])
        .into()
}
