//! The view updater: change event in, refreshed torrent listing out.

use crate::{
    page::TORRENT_LIST, termio, Client, Episode, Page, RenderContext, Series,
    SeriesView, TemplateId, TemplateRegistry,
};
use eyre::{Result, WrapErr};
use std::{fmt, str::FromStr};

/// Endpoint behind the episodes control.
const EPISODES_PATH: &str = "/torrents/tv/episodes";
/// Endpoint behind the series control.
const SERIES_PATH: &str = "/torrents/tv/series";

/// The two page controls whose change events drive the listing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    /// The episodes selector (`#search_episodes`).
    Episodes,
    /// The series selector (`#search_series`).
    Series,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Episodes => write!(f, "episodes"),
            Self::Series => write!(f, "series"),
        }
    }
}

impl FromStr for Control {
    type Err = eyre::Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "episodes" => Ok(Self::Episodes),
            "series" => Ok(Self::Series),
            _ => Err(eyre::eyre!("{value} is not a known control")),
        }
    }
}

/// Keeps the torrent listing in sync with the page controls.
///
/// One instance per page. Change events come in through [`on_change`]; each
/// one triggers a single fetch whose outcome either replaces the listing or
/// is written off with a diagnostic. Nothing fetched survives past its own
/// render cycle.
///
/// Rapid re-triggering is not de-duplicated: every change event fetches, and
/// whichever completion runs last owns the container.
///
/// [`on_change`]: ViewUpdater::on_change
pub struct ViewUpdater<P: Page> {
    /// HTTP client for the tracker.
    client: Client,
    /// The two compiled templates.
    templates: TemplateRegistry,
    /// Page holding the listing container.
    page: P,
}

impl<P: Page> ViewUpdater<P> {
    /// Reads both template sources from the page and compiles them.
    ///
    /// This is the page-ready step: after it returns, change events can be
    /// delivered.
    pub fn attach(client: Client, page: P) -> Result<Self> {
        let episodes_source = page
            .template_markup(TemplateId::Episodes.source_element())
            .context("read episodes template")?;
        let series_source = page
            .template_markup(TemplateId::Series.source_element())
            .context("read series template")?;
        let templates =
            TemplateRegistry::new(&episodes_source, &series_source)
                .context("compile page templates")?;

        Ok(Self {
            client,
            templates,
            page,
        })
    }

    /// Handles a change event on `control`.
    ///
    /// Failures never escape: the container is left as it was and a warning
    /// goes to the terminal instead.
    pub fn on_change(&mut self, control: Control) {
        let outcome = self.fetch(control);
        self.complete(control, outcome);
    }

    /// Fetches and reshapes the payload behind `control`.
    fn fetch(&self, control: Control) -> Result<RenderContext> {
        match control {
            Control::Episodes => self
                .client
                .get_json::<Vec<Episode>>(EPISODES_PATH)
                .map(RenderContext::Episodes)
                .context("load episodes"),
            Control::Series => self
                .client
                .get_json::<Vec<Series>>(SERIES_PATH)
                .map(|list| {
                    RenderContext::Series(
                        list.into_iter().map(SeriesView::from).collect(),
                    )
                })
                .context("load series"),
        }
    }

    /// Completes one fetch: render and swap on success, warn and leave the
    /// container alone otherwise.
    pub(crate) fn complete(
        &mut self,
        control: Control,
        outcome: Result<RenderContext>,
    ) {
        let rendered =
            outcome.and_then(|context| self.templates.render(&context));

        match rendered {
            Ok(markup) => {
                self.page.replace_content(TORRENT_LIST, &markup);
            },
            Err(err) => {
                termio::print_warn(&format!(
                    "{control} listing not refreshed: {err:#}"
                ));
            },
        }
    }

    /// Returns the page.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Consumes the updater and returns the page.
    pub fn into_page(self) -> P {
        self.page
    }
}
