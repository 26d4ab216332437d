/// Glass-style look for the gallery widgets
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Active filter button fill
const OCEAN: Color = Color { r: 0.0, g: 0.467, b: 0.714, a: 0.8 };
/// Muted text on inactive buttons (#4b5563)
const SLATE: Color = Color { r: 0.294, g: 0.333, b: 0.388, a: 1.0 };
/// Hover accent for the close control
const CORAL: Color = Color { r: 1.0, g: 0.420, b: 0.420, a: 0.7 };
/// Caption overlay on grid cards
const DEEP_SEA: Color = Color { r: 0.012, g: 0.016, b: 0.369, a: 0.8 };

fn glass(alpha: f32) -> Color {
    Color { a: alpha, ..Color::WHITE }
}

fn glass_border(radius: f32) -> Border {
    Border {
        color: glass(0.3),
        width: 1.0,
        radius: radius.into(),
    }
}

/// Category button, highlighted when it is the active filter
pub fn filter_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        let background = match (active, hovered) {
            (true, _) => OCEAN,
            (false, true) => glass(0.4),
            (false, false) => glass(0.2),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { Color::WHITE } else { SLATE },
            border: glass_border(50.0),
            shadow: if hovered {
                Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                    offset: Vector::new(0.0, 5.0),
                    blur_radius: 15.0,
                }
            } else {
                Shadow::default()
            },
        }
    }
}

/// Grid card frame
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass(0.25))),
        border: glass_border(12.0),
        shadow: Shadow {
            color: Color::from_rgba(0.122, 0.149, 0.529, 0.15),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 32.0,
        },
        ..container::Style::default()
    }
}

/// Caption strip shown over a hovered card
pub fn card_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DEEP_SEA)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Round zoom badge on a hovered card
pub fn zoom_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass(0.2))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dimmed layer behind the lightbox content
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.9))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Caption pill under the lightbox image
pub fn caption_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass(0.1))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 50.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Previous/next arrows
pub fn nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.3,
        _ => 0.1,
    };

    button::Style {
        background: Some(Background::Color(glass(alpha))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn close_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => CORAL,
        _ => glass(0.1),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}
