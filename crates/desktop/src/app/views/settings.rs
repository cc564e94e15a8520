use iced::font::Weight as FontWeight;
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Font, Length};
use serene_core::ThemeName;

use crate::app::message::Message;

use super::super::desktop::SereneDesktop;
use super::styles::{
    choice_button_style, dialog_style, ghost_button_style, primary_button_style, text_input_style,
};

const DIALOG_WIDTH: f32 = 440.0;

impl SereneDesktop {
    /// Theme and profile dialog, drawn over the page while open.
    pub(crate) fn settings_dialog(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let form = &self.settings_form;

        let title = text("Settings").size(20).color(palette.text_primary).font(Font {
            weight: FontWeight::Semibold,
            ..Font::DEFAULT
        });

        let name = column![
            text("Your name").size(13).color(palette.text_secondary),
            text_input("How should we greet you?", &form.name)
                .id(self.settings_name_id.clone())
                .on_input(Message::SettingsNameChanged)
                .on_submit(Message::SettingsSubmitted)
                .padding(10)
                .style(move |_, status| text_input_style(palette, status)),
        ]
        .spacing(6);

        let themes = ThemeName::ALL
            .chunks(3)
            .fold(column![].spacing(6), |rows, chunk| {
                let line = chunk.iter().fold(row![].spacing(6), |line, theme| {
                    let selected = *theme == form.theme;
                    line.push(
                        button(text(theme.label()).size(13))
                            .on_press(Message::SettingsThemeSelected(*theme))
                            .padding([4, 10])
                            .style(move |_, status| choice_button_style(palette, selected, status)),
                    )
                });
                rows.push(line)
            });

        let mut body = column![
            title,
            name,
            column![text("Theme").size(13).color(palette.text_secondary), themes].spacing(6),
        ]
        .spacing(18);

        if form.theme == ThemeName::Custom {
            body = body.push(
                column![
                    text("Wallpaper").size(13).color(palette.text_secondary),
                    text_input("file:///path/to/image.jpg", &form.wallpaper)
                        .on_input(Message::SettingsWallpaperChanged)
                        .on_submit(Message::SettingsSubmitted)
                        .padding(10)
                        .style(move |_, status| text_input_style(palette, status)),
                ]
                .spacing(6),
            );
        }

        if let Some(error) = &self.settings_error {
            body = body.push(text(error).size(13).color(palette.danger));
        }

        let actions = row![
            Space::new().width(Length::Fill),
            button(text("Cancel").size(14))
                .on_press(Message::SettingsOpenChanged(false))
                .padding([6, 14])
                .style(move |_, status| ghost_button_style(palette, status)),
            button(text("Save").size(14))
                .on_press_maybe((self.pending_mutations == 0).then_some(Message::SettingsSubmitted))
                .padding([6, 18])
                .style(move |_, status| primary_button_style(palette, status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(body.push(actions))
            .width(Length::Fixed(DIALOG_WIDTH))
            .padding(24)
            .style(move |_| dialog_style(palette))
            .into()
    }
}
