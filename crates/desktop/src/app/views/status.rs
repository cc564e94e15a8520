use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Background, Element, Length};

use crate::app::message::Message;
use crate::app::state::ToastKind;

use super::super::desktop::SereneDesktop;
use super::styles::ghost_button_style;

impl SereneDesktop {
    pub(crate) fn status_line(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let snapshot = self.home.snapshot();

        let left = if self.store.is_none() {
            text("Storage unavailable").size(12).color(palette.danger)
        } else if snapshot.is_data_loaded {
            text(format!("{} tasks stored", snapshot.tasks.len()))
                .size(12)
                .color(palette.text_secondary)
        } else {
            text("Loading…").size(12).color(palette.info)
        };

        let mut line = row![left, Space::new().width(Length::Fill)]
            .spacing(12)
            .align_y(Alignment::Center);

        if let Some(status) = &self.status {
            let color = match status.kind {
                ToastKind::Info => palette.info,
                ToastKind::Error => palette.danger,
            };
            line = line.push(text(&status.message).size(12).color(color));
        }

        if self.store.is_some() && !snapshot.is_data_loaded {
            line = line.push(
                button(text("Reload").size(12))
                    .on_press(Message::ReloadRequested)
                    .padding([2, 8])
                    .style(move |_, status| ghost_button_style(palette, status)),
            );
        }

        container(line)
            .width(Length::Fill)
            .padding([6, 20])
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.surface_muted)),
                ..container::Style::default()
            })
            .into()
    }
}
