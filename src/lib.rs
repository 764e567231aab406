//! # EZCTO Site
//!
//! Turns a meme-token project's data and its style analysis into a single,
//! self-contained landing page. No template files, no runtime assets: the
//! output is one HTML document with its stylesheet and script inlined.
//!
//! # Architecture: Select → Plan → Render → Assemble
//!
//! ```text
//! ProjectAnalysis ─┐
//!                  ├─ select   score the catalog, pick one LayoutTemplate
//! TemplateData ────┤
//!                  ├─ sections plan blocks, render each with maud
//!                  └─ page     wrap in <head> meta + <style> + <script>
//! ```
//!
//! Every step is a pure function of its inputs and the static [`catalog`].
//! The only randomness is the selector's tie-breaking jitter, which callers
//! pass in explicitly (see [`select::Jitter`]), so any render can be
//! reproduced with a seed or with jitter disabled.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Input records: `ProjectAnalysis`, `TemplateData` and their enums |
//! | [`catalog`] | The six layout templates and their integrity check |
//! | [`select`] | Template scoring: match points, bonus table, jitter |
//! | [`sections`] | Block planning and per-section HTML, hero variants per layout style |
//! | [`escape`] | Five-character HTML escaping for user-supplied text |
//! | [`style`] | Palette custom properties, fixed stylesheet and script |
//! | [`page`] | Full document assembly |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`build`] | Parallel batch rendering of a directory of project files |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Static Catalog
//!
//! Templates are a `static` table of plain data, checked once by
//! [`catalog::validate_catalog`] rather than on every render. Adding a layout
//! means adding a table row and, if it scores specially, a row in
//! [`select::BONUSES`].
//!
//! ## Maud Over Template Engines
//!
//! HTML is built with [Maud](https://maud.lambda.xyz/). Malformed markup is a
//! compile error, and every section is an ordinary Rust function that can be
//! unit tested on its own.
//!
//! ## Escaping Boundary
//!
//! Names, tickers, descriptions, contract addresses and generated copy are
//! user-supplied and always rendered through [`escape::Text`]. Logo, banner,
//! poster and social URLs come from the asset pipeline and are emitted as
//! given. Palette colors go into the stylesheet unchecked.

pub mod build;
pub mod catalog;
pub mod config;
pub mod escape;
pub mod output;
pub mod page;
pub mod sections;
pub mod select;
pub mod style;
pub mod types;

pub use page::{RenderedSite, generate_website_html, render_website};

#[cfg(test)]
pub(crate) mod test_helpers;
