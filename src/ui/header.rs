use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Page title and tagline
pub fn view<'a>() -> Element<'a, Message> {
    let title = text("Our Gallery").size(48);
    let tagline = text(
        "Dive into the memories of our past events and experience the magic of Samskruthi",
    )
    .size(16);

    container(
        column![title, tagline]
            .spacing(24)
            .max_width(600.0)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .into()
}
