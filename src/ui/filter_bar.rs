use iced::widget::{button, container, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::state::data::{Category, Filter};
use crate::Message;

/// One button per category. "All" is never offered here.
/// Buttons wrap onto more lines when the window is narrow.
pub fn view<'a>(active: Filter) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = Category::ALL
        .iter()
        .map(|&category| {
            let filter = Filter::Only(category);

            button(text(category.label()).size(14))
                .padding([8, 20])
                .on_press(Message::FilterSelected(filter))
                .style(style::filter_button(active == filter))
                .into()
        })
        .collect();

    container(Wrap::with_elements(buttons).spacing(8.0).line_spacing(8.0))
        .center_x(Length::Fill)
        .into()
}
