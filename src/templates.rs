//! Compiled template registry.

use crate::{Episode, SeriesView};
use eyre::{Result, WrapErr};
use handlebars::Handlebars;
use serde::Serialize;

/// The two templates the page ships with.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TemplateId {
    /// Latest episodes listing.
    Episodes,
    /// Latest series listing.
    Series,
}

impl TemplateId {
    /// Name the template is registered under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Episodes => "search_episodes",
            Self::Series => "search_series",
        }
    }

    /// ID of the page element holding the template source.
    #[must_use]
    pub fn source_element(self) -> &'static str {
        match self {
            Self::Episodes => "t-search-episodes",
            Self::Series => "t-search-series",
        }
    }
}

/// Wrapper handed to the templates, matching the shape they iterate over.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// `{"episodes": [...]}`
    Episodes(Vec<Episode>),
    /// `{"series": [...]}`
    Series(Vec<SeriesView>),
}

impl RenderContext {
    /// Returns the template matching this context.
    #[must_use]
    pub fn template(&self) -> TemplateId {
        match *self {
            Self::Episodes(_) => TemplateId::Episodes,
            Self::Series(_) => TemplateId::Series,
        }
    }
}

/// Holds the two compiled templates.
///
/// Built once at startup and passed around explicitly, there is no ambient
/// template cache.
pub struct TemplateRegistry {
    registry: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compiles both templates from their markup sources.
    pub fn new(episodes_source: &str, series_source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(
                TemplateId::Episodes.name(),
                episodes_source,
            )
            .context("compile episodes template")?;
        registry
            .register_template_string(TemplateId::Series.name(), series_source)
            .context("compile series template")?;

        Ok(Self { registry })
    }

    /// Renders `context` with the template it calls for.
    pub fn render(&self, context: &RenderContext) -> Result<String> {
        self.registry
            .render(context.template().name(), context)
            .with_context(|| {
                format!("render {}", context.template().name())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_wraps_episodes() {
        let context =
            RenderContext::Episodes(vec![json!({"id": 1, "name": "Pilot"})
                .into()]);
        let value = serde_json::to_value(&context).expect("serialize context");

        assert_eq!(value, json!({"episodes": [{"id": 1, "name": "Pilot"}]}));
    }

    #[test]
    fn test_context_wraps_series() {
        let series: crate::Series =
            serde_json::from_value(json!({"name": "Show A", "episodes": []}))
                .expect("valid series");
        let context = RenderContext::Series(vec![series.into()]);
        let value = serde_json::to_value(&context).expect("serialize context");

        assert_eq!(
            value,
            json!({"series": [{
                "name": "Show A",
                "episodes": [],
                "tail": [],
                "numEpisodes": 0,
            }]})
        );
    }

    #[test]
    fn test_render_picks_matching_template() {
        let registry = TemplateRegistry::new(
            "{{#each episodes}}<li>{{name}}</li>{{/each}}",
            "{{#each series}}<h2>{{name}}</h2>{{/each}}",
        )
        .expect("compile templates");

        let episodes = RenderContext::Episodes(vec![
            json!({"name": "Pilot"}).into(),
        ]);
        assert_eq!(
            registry.render(&episodes).expect("render episodes"),
            "<li>Pilot</li>"
        );

        let series: crate::Series =
            serde_json::from_value(json!({"name": "Show A", "episodes": []}))
                .expect("valid series");
        let context = RenderContext::Series(vec![series.into()]);
        assert_eq!(
            registry.render(&context).expect("render series"),
            "<h2>Show A</h2>"
        );
    }

    #[test]
    fn test_render_empty_series_head_is_falsy() {
        let registry = TemplateRegistry::new(
            "",
            "{{#each series}}{{#if head}}{{head.name}}{{else}}no episodes{{/if}} ({{numEpisodes}}){{/each}}",
        )
        .expect("compile templates");

        let series: crate::Series =
            serde_json::from_value(json!({"name": "Show A", "episodes": []}))
                .expect("valid series");
        let context = RenderContext::Series(vec![series.into()]);

        assert_eq!(
            registry.render(&context).expect("render series"),
            "no episodes (0)"
        );
    }
}
