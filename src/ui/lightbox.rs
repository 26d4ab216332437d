use iced::widget::{button, column, container, image, mouse_area, opaque, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::PathBuf;

use super::style;
use crate::state::data::ImageEntry;
use crate::state::modal::ModalEvent;
use crate::Message;

/// Full-window image viewer drawn over the page.
///
/// Every click inside the window is captured here. Clicks on the backdrop
/// close the viewer, clicks on the image or caption are swallowed by the
/// content's own mouse area and never reach the backdrop.
pub fn view<'a>(entry: &'a ImageEntry, source: PathBuf) -> Element<'a, Message> {
    let close = button(text("×").size(24))
        .padding([2, 14])
        .on_press(Message::Modal(ModalEvent::CloseButton))
        .style(style::close_button);

    let picture = image(image::Handle::from_path(source))
        .content_fit(ContentFit::Contain)
        .height(Length::Fill);

    let mut body = column![picture].spacing(24).align_x(Alignment::Center);
    if let Some(caption) = &entry.caption {
        body = body.push(
            container(text(caption.as_str()).size(19))
                .padding([12, 24])
                .style(style::caption_pill),
        );
    }

    let content = mouse_area(body).on_press(Message::Modal(ModalEvent::Content));

    let viewer = row![
        nav_button("‹", ModalEvent::Previous),
        container(content).center_x(Length::Fill).height(Length::Fill),
        nav_button("›", ModalEvent::Next),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let layout = column![row![Space::with_width(Length::Fill), close], viewer].spacing(16);

    let backdrop = container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(32)
        .style(style::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Modal(ModalEvent::Backdrop)))
}

fn nav_button<'a>(label: &'a str, event: ModalEvent) -> Element<'a, Message> {
    button(text(label).size(32))
        .padding([0, 16])
        .on_press(Message::Modal(event))
        .style(style::nav_button)
        .into()
}
