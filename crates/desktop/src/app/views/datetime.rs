use iced::font::Weight as FontWeight;
use iced::widget::{column, text};
use iced::{Alignment, Element, Font};

use crate::app::helpers::{format_clock, format_date};
use crate::app::message::Message;

use super::super::desktop::SereneDesktop;

impl SereneDesktop {
    pub(crate) fn datetime_section(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let clock = text(format_clock(self.now))
            .size(44)
            .font(Font {
                weight: FontWeight::Light,
                ..Font::MONOSPACE
            })
            .color(palette.text_primary);
        let date = text(format_date(self.now))
            .size(15)
            .color(palette.text_secondary);

        column![clock, date]
            .spacing(4)
            .align_x(Alignment::End)
            .width(iced::Length::Fill)
            .into()
    }
}
