//! tvlist - Fetch TV torrent listings and render them through page templates

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]

// }}}

use clap::Parser;
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use tvlist::{
    termio, Client, Control, StaticPage, TemplateId, ViewUpdater,
    TORRENT_LIST,
};
use url::Url;

/// Listing used when no episodes template is supplied.
const DEFAULT_EPISODES_TEMPLATE: &str = "<ul>\
{{#each episodes}}<li>{{number}} - {{name}} [{{format}}/{{resolution}}]</li>\
{{/each}}</ul>";

/// Listing used when no series template is supplied.
const DEFAULT_SERIES_TEMPLATE: &str = "{{#each series}}\
<h2>{{name}} ({{numEpisodes}} episodes)</h2>\
{{#if head}}<p>Latest: {{head.name}}</p>{{/if}}\
<ul>{{#each tail}}<li>{{name}}</li>{{/each}}</ul>\
{{/each}}";

fn main() -> Result<()> {
    let opts = Opts::parse();
    let client = Client::new(opts.tracker.clone());

    // Build the page: two template sources and an empty listing container.
    let mut page = StaticPage::new();
    page.set_element(
        TemplateId::Episodes.source_element(),
        &template_source(
            opts.episodes_template.as_deref(),
            DEFAULT_EPISODES_TEMPLATE,
        )
        .context("load episodes template")?,
    );
    page.set_element(
        TemplateId::Series.source_element(),
        &template_source(
            opts.series_template.as_deref(),
            DEFAULT_SERIES_TEMPLATE,
        )
        .context("load series template")?,
    );
    page.set_element(TORRENT_LIST, "");

    let mut updater = ViewUpdater::attach(client, page)
        .with_context(|| format!("attach to {}", opts.tracker))?;

    // Fire the requested change event and show what the container holds.
    updater.on_change(opts.control);

    let page = updater.into_page();
    match page.element(TORRENT_LIST) {
        Some(markup) if !markup.is_empty() => println!("{markup}"),
        _ => termio::print_warn("listing is empty"),
    }

    Ok(())
}

/// Reads the template from `path`, or falls back to the built-in one.
fn template_source(
    path: Option<&std::path::Path>,
    default: &str,
) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display())),
        None => Ok(default.to_owned()),
    }
}

/// CLI options.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Base URL of the tracker.
    #[clap(short, long)]
    tracker: Url,

    /// Which control changed (episodes or series).
    #[clap(short, long)]
    control: Control,

    /// Path to a Handlebars template overriding the episodes listing.
    #[clap(long)]
    episodes_template: Option<PathBuf>,

    /// Path to a Handlebars template overriding the series listing.
    #[clap(long)]
    series_template: Option<PathBuf>,
}
