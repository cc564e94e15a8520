use chrono::Timelike;
use iced::font::Weight as FontWeight;
use iced::widget::{button, column, lazy, text};
use iced::{Element, Font};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::SereneDesktop;
use super::styles::ghost_button_style;

impl SereneDesktop {
    pub(crate) fn welcome_section(&self) -> Element<'_, Message> {
        let payload = self.home.welcome();
        let hour = self.now.hour();
        let palette = self.palette;
        let invite_name = !self.home.snapshot().has_name();
        let dependency = (
            payload.name.clone(),
            payload.open_tasks(),
            hour,
            self.home.snapshot().theme,
            self.system_dark,
        );

        lazy(dependency, move |_| {
            render_welcome(
                payload.greeting(hour),
                payload.summary(),
                invite_name,
                palette,
            )
        })
        .into()
    }
}

fn render_welcome(
    greeting: String,
    summary: String,
    invite_name: bool,
    palette: Palette,
) -> Element<'static, Message> {
    let heading = text(greeting).size(34).color(palette.text_primary).font(Font {
        weight: FontWeight::Semibold,
        ..Font::DEFAULT
    });
    let mut block = column![heading, text(summary).size(16).color(palette.text_secondary)]
        .spacing(8);

    if invite_name {
        block = block.push(
            button(text("Tell us your name").size(13))
                .on_press(Message::SettingsOpenChanged(true))
                .padding([4, 0])
                .style(move |_, status| ghost_button_style(palette, status)),
        );
    }

    block.into()
}
