use iced::font::Weight as FontWeight;
use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Font, Length};

use crate::app::message::Message;

use super::super::desktop::SereneDesktop;
use super::styles::{ghost_button_style, primary_button_style};

pub(crate) const BRAND: &str = "Serenity Start";

impl SereneDesktop {
    /// Branding, the timetable link and the settings trigger.
    ///
    /// The loading skeleton draws the same header with the trigger disabled.
    pub(crate) fn header(&self) -> Element<'_, Message> {
        let palette = self.page_palette();
        let brand = text(BRAND)
            .size(22)
            .font(Font {
                weight: FontWeight::Semibold,
                ..Font::DEFAULT
            })
            .color(palette.text_primary);

        let mut bar = row![brand, Space::new().width(Length::Fill)]
            .spacing(12)
            .align_y(Alignment::Center);

        if self.pending_mutations > 0 {
            bar = bar.push(text("Saving…").size(13).color(palette.info));
        }

        let timetable = button(text("Timetable Creator").size(14))
            .on_press_maybe(
                self.timetable_url
                    .as_ref()
                    .map(|_| Message::TimetableRequested),
            )
            .padding([6, 12])
            .style(move |_, status| ghost_button_style(palette, status));

        let settings = button(text("Settings").size(14))
            .on_press_maybe(self.settings_toggle())
            .padding([6, 14])
            .style(move |_, status| primary_button_style(palette, status));

        bar.push(timetable).push(settings).into()
    }

    /// Message sent by the header's settings button; `None` while the skeleton is shown.
    pub(crate) fn settings_toggle(&self) -> Option<Message> {
        if self.is_loading() {
            return None;
        }
        Some(Message::SettingsOpenChanged(!self.home.is_settings_open()))
    }
}
