use iced::widget::{column, container, row, Column, Space};
use iced::{Element, Length};
use serene_core::layout::{ColumnSpan, SkeletonSection};
use serene_core::skeleton_plan;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::SereneDesktop;
use super::styles::skeleton_block_style;

impl SereneDesktop {
    /// Placeholder page drawn until the store reports loaded data.
    pub(crate) fn skeleton(&self, mobile: bool) -> Element<'_, Message> {
        let palette = self.page_palette();
        let plan = skeleton_plan(mobile);

        let mut page = column![self.header()].spacing(20);
        if plan.stacked {
            for section in &plan.sections {
                page = page.push(render_section(section, palette));
            }
            return page.into();
        }

        let (full, partial): (Vec<_>, Vec<_>) = plan
            .sections
            .iter()
            .partition(|section| section.span == ColumnSpan::Full);
        for section in full {
            page = page.push(render_section(section, palette));
        }
        let split = partial
            .into_iter()
            .fold(row![].spacing(16), |row, section| {
                row.push(
                    container(render_section(section, palette))
                        .width(Length::FillPortion(section.span.portion())),
                )
            });
        page.push(split).into()
    }
}

fn render_section(section: &SkeletonSection, palette: Palette) -> Element<'static, Message> {
    section
        .blocks
        .iter()
        .fold(Column::new().spacing(12), |col, shape| {
            col.push(block(palette, shape.width, shape.height))
        })
        .into()
}

fn block(palette: Palette, fraction: f32, height: f32) -> Element<'static, Message> {
    let filled = (fraction.clamp(0.0, 1.0) * 100.0).round() as u16;
    let rest = 100 - filled;

    let bar = container(Space::new().height(Length::Fixed(height)))
        .width(Length::FillPortion(filled.max(1)))
        .style(move |_| skeleton_block_style(palette));

    if rest == 0 {
        return bar.into();
    }
    row![bar, Space::new().width(Length::FillPortion(rest))].into()
}
