use clap::Parser;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, responsive, scrollable, stack};
use iced::{Element, Length, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod config;
mod error;
mod masonry;
mod state;
mod thumbnail;
mod ui;

use config::Config;
use state::catalog;
use state::data::Filter;
use state::gallery::GalleryState;
use state::modal::ModalEvent;
use thumbnail::ThumbnailBatch;
use ui::AssetSources;

/// Padding around the page content, in pixels
const PAGE_PADDING: f32 = 32.0;

/// Room left for the vertical scrollbar
const SCROLLBAR_ALLOWANCE: f32 = 16.0;

#[derive(Parser, Debug)]
#[command(name = "samskruthi-gallery")]
#[command(about = "Photo gallery of past Samskruthi editions")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/samskruthi-gallery/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the gallery image paths are relative to
    #[arg(short, long)]
    assets: Option<PathBuf>,
}

/// Main application state
struct Gallery {
    /// Filter, visible list, spans and lightbox
    gallery: GalleryState,
    /// Thumbnail / original lookup for each image
    sources: AssetSources,
    config: Config,
    /// Card under the cursor, if any
    hovered: Option<usize>,
    /// Last page scroll position seen while unlocked
    scroll_offset: AbsoluteOffset,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a category button
    FilterSelected(Filter),
    /// User clicked a grid card (index into the visible list)
    OpenImage(usize),
    /// User clicked somewhere in the lightbox
    Modal(ModalEvent),
    CardEntered(usize),
    CardLeft(usize),
    /// The page scrolled
    GridScrolled(scrollable::Viewport),
    /// Background thumbnail generation finished
    ThumbnailsReady(ThumbnailBatch),
}

fn grid_scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery-page")
}

impl Gallery {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let gallery = GalleryState::new(catalog::builtin(), config.span_mode);
        let sources = AssetSources::new(config.assets_root.clone());

        info!(
            "🎨 Gallery initialized with {} images from {}",
            gallery.catalog().len(),
            config.assets_root.display()
        );

        let task = if config.thumbnails {
            match thumbnail::get_thumbnail_cache_dir() {
                Ok(cache_dir) => Task::perform(
                    thumbnail::load_thumbnails(
                        gallery.catalog().to_vec(),
                        config.assets_root.clone(),
                        cache_dir,
                    ),
                    Message::ThumbnailsReady,
                ),
                Err(err) => {
                    warn!("Thumbnails disabled: {}", err);
                    Task::none()
                }
            }
        } else {
            Task::none()
        };

        (
            Gallery {
                gallery,
                sources,
                config,
                hovered: None,
                scroll_offset: AbsoluteOffset::default(),
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(filter) => {
                self.gallery.set_filter(filter);
                self.hovered = None;
                Task::none()
            }
            Message::OpenImage(index) => {
                if let Err(err) = self.gallery.open(index) {
                    warn!("Ignoring click: {}", err);
                }
                Task::none()
            }
            Message::Modal(event) => {
                self.gallery.handle_modal(event);
                debug!(?event, index = ?self.gallery.modal().index(), "Lightbox click");
                Task::none()
            }
            Message::CardEntered(index) => {
                self.hovered = Some(index);
                Task::none()
            }
            Message::CardLeft(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::GridScrolled(viewport) => {
                if self.gallery.scroll_locked() {
                    // Page stays where it was when the lightbox opened
                    return scrollable::scroll_to(grid_scroll_id(), self.scroll_offset);
                }
                self.scroll_offset = viewport.absolute_offset();
                Task::none()
            }
            Message::ThumbnailsReady(batch) => {
                self.sources.set_thumbnails(batch);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = responsive(move |size| {
            let grid_width = size.width - 2.0 * PAGE_PADDING - SCROLLBAR_ALLOWANCE;

            let content = column![
                ui::header::view(),
                ui::filter_bar::view(self.gallery.filter()),
                ui::grid::view(
                    &self.gallery,
                    &self.sources,
                    self.hovered,
                    grid_width,
                    self.config.min_column_width,
                ),
            ]
            .spacing(40)
            .padding(PAGE_PADDING);

            scrollable(content)
                .id(grid_scroll_id())
                .on_scroll(Message::GridScrolled)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        });

        match self.gallery.selected() {
            Some((_, entry)) => {
                stack![page, ui::lightbox::view(entry, self.sources.original(entry))].into()
            }
            None => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.theme()
    }
}

fn main() -> iced::Result {
    // Set RUST_LOG to control log level (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref());
    if let Some(assets) = cli.assets {
        config.assets_root = assets;
    }
    if let Ok(json) = config.to_json() {
        debug!("Effective config:\n{}", json);
    }

    iced::application("Samskruthi Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(move || Gallery::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::Category;

    fn gallery() -> Gallery {
        let config = Config {
            thumbnails: false,
            ..Config::default()
        };
        Gallery::new(config).0
    }

    #[test]
    fn test_card_click_opens_lightbox() {
        let mut app = gallery();
        let _ = app.update(Message::OpenImage(3));
        assert_eq!(app.gallery.modal().index(), Some(3));
        assert!(app.gallery.scroll_locked());
    }

    #[test]
    fn test_click_on_empty_category_does_nothing() {
        let mut app = gallery();
        let _ = app.update(Message::FilterSelected(Filter::Only(Category::Samskruthi2k22)));
        let _ = app.update(Message::OpenImage(0));
        assert!(app.gallery.selected().is_none());
    }

    #[test]
    fn test_lightbox_clicks() {
        let mut app = gallery();
        let _ = app.update(Message::FilterSelected(Filter::Only(Category::Samskruthi2k23)));
        let _ = app.update(Message::OpenImage(12));

        let _ = app.update(Message::Modal(ModalEvent::Next));
        assert_eq!(app.gallery.modal().index(), Some(0));

        let _ = app.update(Message::Modal(ModalEvent::Content));
        assert_eq!(app.gallery.modal().index(), Some(0));

        let _ = app.update(Message::Modal(ModalEvent::Backdrop));
        assert!(!app.gallery.modal().is_open());
        assert!(!app.gallery.scroll_locked());
    }

    #[test]
    fn test_page_builds_with_and_without_lightbox() {
        let mut app = gallery();
        let _ = app.view();

        let _ = app.update(Message::OpenImage(0));
        let _ = app.view();
    }

    #[test]
    fn test_hover_tracks_the_last_card_entered() {
        let mut app = gallery();
        let _ = app.update(Message::CardEntered(2));
        let _ = app.update(Message::CardEntered(5));
        let _ = app.update(Message::CardLeft(2));
        assert_eq!(app.hovered, Some(5));

        let _ = app.update(Message::CardLeft(5));
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn test_thumbnails_replace_grid_sources() {
        let mut app = gallery();
        let entry = app.gallery.visible()[0].clone();
        let _ = app.update(Message::ThumbnailsReady(vec![(
            entry.path.clone(),
            PathBuf::from("/cache/thumb.jpg"),
        )]));
        assert_eq!(app.sources.for_grid(&entry), PathBuf::from("/cache/thumb.jpg"));
    }
}
