use iced::widget::image::{self, Handle};
use iced::widget::{center, column, container, mouse_area, opaque, row, scrollable, stack};
use iced::{ContentFit, Element, Length, Theme};
use serene_core::layout::{POMODORO_SPAN, TODO_SPAN};
use serene_core::{wallpaper_path, LayoutVariant, ThemeName};

use crate::app::message::Message;
use crate::app::theme::{iced_theme, Palette};

use super::super::desktop::SereneDesktop;
use super::styles::{backdrop_style, background_style, card_style};

const PAGE_MAX_WIDTH: f32 = 1120.0;

pub(crate) fn compose(app: &SereneDesktop) -> Element<'_, Message> {
    let palette = app.page_palette();
    let loading = app.is_loading();
    let wallpaper = app.wallpaper();

    let body: Element<'_, Message> = match app.home.layout() {
        LayoutVariant::Loading { mobile } => app.skeleton(mobile),
        LayoutVariant::Mobile => column![
            app.header(),
            app.card(app.welcome_section()),
            app.card(app.pomodoro_section()),
            app.card(app.todo_section()),
        ]
        .spacing(16)
        .into(),
        LayoutVariant::Desktop => column![
            app.header(),
            row![
                app.card(app.welcome_section()).width(Length::FillPortion(2)),
                app.card(app.datetime_section()).width(Length::FillPortion(1)),
            ]
            .spacing(16),
            row![
                app.card(app.todo_section())
                    .width(Length::FillPortion(TODO_SPAN.portion())),
                app.card(app.pomodoro_section())
                    .width(Length::FillPortion(POMODORO_SPAN.portion())),
            ]
            .spacing(16),
        ]
        .spacing(20)
        .into(),
    };

    let content = container(
        container(body)
            .max_width(PAGE_MAX_WIDTH)
            .padding([24, 20]),
    )
    .center_x(Length::Fill);
    let page = column![scrollable(content).height(Length::Fill), app.status_line()];

    let over_wallpaper = wallpaper.is_some();
    let page = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| background_style(palette, over_wallpaper));

    let mut layers = stack![].width(Length::Fill).height(Length::Fill);
    if let Some(wallpaper) = wallpaper {
        layers = layers.push(wallpaper);
    }
    layers = layers.push(page);

    if !loading && app.home.is_settings_open() {
        let dialog = app.settings_dialog();
        layers = layers.push(opaque(
            mouse_area(center(opaque(dialog)).style(|_| backdrop_style()))
                .on_press(Message::SettingsOpenChanged(false)),
        ));
    }

    layers.into()
}

impl SereneDesktop {
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.home.layout(), LayoutVariant::Loading { .. })
    }

    /// Palette for the current layout. The loading skeleton always paints with the default theme.
    pub(crate) fn page_palette(&self) -> Palette {
        if self.is_loading() {
            Palette::for_theme(ThemeName::Default, self.system_dark)
        } else {
            self.palette
        }
    }

    pub(crate) fn page_theme(&self) -> Theme {
        if self.is_loading() {
            iced_theme(ThemeName::Default, self.system_dark)
        } else {
            self.theme.clone()
        }
    }

    pub(super) fn card<'a>(
        &self,
        content: Element<'a, Message>,
    ) -> container::Container<'a, Message> {
        let palette = self.palette;
        let over_wallpaper = self.home.snapshot().shows_wallpaper();
        container(content)
            .width(Length::Fill)
            .padding(20)
            .style(move |_| card_style(palette, over_wallpaper))
    }

    /// Full-bleed background image, present only for the custom theme with a wallpaper set.
    pub(crate) fn wallpaper(&self) -> Option<Element<'_, Message>> {
        let snapshot = self.home.snapshot();
        if self.is_loading() || !snapshot.shows_wallpaper() {
            return None;
        }
        let uri = snapshot.custom_wallpaper.as_deref()?;
        let handle = Handle::from_path(wallpaper_path(uri));
        Some(
            image::Image::new(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }
}
