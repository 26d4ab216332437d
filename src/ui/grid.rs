use iced::alignment::Vertical;
use iced::widget::{container, image, mouse_area, row, stack, text, Column, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::PathBuf;

use super::{style, AssetSources};
use crate::masonry::{self, GAP};
use crate::state::data::ImageEntry;
use crate::state::gallery::GalleryState;
use crate::Message;

/// Masonry grid of the visible images, `width` pixels wide
pub fn view<'a>(
    gallery: &'a GalleryState,
    sources: &'a AssetSources,
    hovered: Option<usize>,
    width: f32,
    min_column_width: f32,
) -> Element<'a, Message> {
    let visible = gallery.visible();
    let spans = gallery.spans();

    if visible.is_empty() {
        return container(text("No photos from this edition yet.").size(16))
            .center_x(Length::Fill)
            .padding(40)
            .into();
    }

    let columns = masonry::column_count(width, min_column_width);
    let lanes = masonry::distribute(spans, columns)
        .into_iter()
        .map(move |indices| -> Element<'a, Message> {
            let cards = indices.into_iter().map(move |index| {
                let entry = &visible[index];
                card(
                    index,
                    entry,
                    spans[index],
                    sources.for_grid(entry),
                    hovered == Some(index),
                )
            });

            Column::with_children(cards)
                .spacing(GAP)
                .width(Length::FillPortion(1))
                .into()
        });

    Row::with_children(lanes).spacing(GAP).into()
}

fn card<'a>(
    index: usize,
    entry: &'a ImageEntry,
    span: u16,
    source: PathBuf,
    hovered: bool,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(source))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![picture].width(Length::Fill).height(Length::Fill);
    if hovered {
        layers = layers.push(hover_overlay(entry));
    }

    let frame = container(layers)
        .width(Length::Fill)
        .height(Length::Fixed(masonry::span_height(span)))
        .clip(true)
        .style(style::glass_card);

    mouse_area(frame)
        .on_press(Message::OpenImage(index))
        .on_enter(Message::CardEntered(index))
        .on_exit(Message::CardLeft(index))
        .into()
}

fn hover_overlay<'a>(entry: &'a ImageEntry) -> Element<'a, Message> {
    let caption = text(entry.caption.as_deref().unwrap_or_default()).size(17);
    let zoom = container(text("+").size(18))
        .center(40.0)
        .style(style::zoom_badge);

    let strip = container(
        row![caption, Space::with_width(Length::Fill), zoom].align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(24)
    .style(style::card_overlay);

    container(strip)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}
