pub mod termio;

mod client;
mod episode;
mod page;
mod series;
mod templates;
mod view;

pub use client::Client;
pub use episode::Episode;
pub use page::{Page, StaticPage, TORRENT_LIST};
pub use series::{Series, SeriesView};
pub use templates::{RenderContext, TemplateId, TemplateRegistry};
pub use view::{Control, ViewUpdater};
