//! Cube overview generator for CubeCobra.
//!
//! Renders a cube's overview document: title, description, and a list of
//! archetype decks, each with mana symbols, a star rating and inline card
//! images. Card images are resolved by looking each name up in the cube's
//! cached CSV export and then pinning the exact printing via the Scryfall
//! search API. All HTTP responses are cached on disk, one file per URL.
//!
//! # Quick start
//!
//! ```no_run
//! use cube_overview::{Deck, Overview, OverviewGenerator};
//!
//! let generator = OverviewGenerator::builder().build().unwrap();
//!
//! let overview = Overview {
//!     title: "My cube".to_string(),
//!     description: "A 360 card cube.".to_string(),
//!     decks: vec![Deck::new("Monored Aggro", "r", 4, &["Goblin Guide"])],
//! };
//!
//! println!("{}", generator.render(&overview).unwrap());
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
mod render;
pub mod scryfall;

pub use cache::ResponseCache;
pub use error::{OverviewError, Result};
pub use models::{CubeCard, Deck, Overview, ScryfallCard};

use std::cell::{Ref, RefCell};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// OverviewGeneratorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OverviewGenerator`].
///
/// Use [`OverviewGenerator::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](OverviewGeneratorBuilder::build).
pub struct OverviewGeneratorBuilder {
    cache_dir: Option<PathBuf>,
    timeout: Duration,
    cube_id: String,
    cubecobra_base: String,
    scryfall_base: String,
}

impl Default for OverviewGeneratorBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            timeout: Duration::from_secs(120),
            cube_id: config::DEFAULT_CUBE_ID.to_string(),
            cubecobra_base: config::CUBECOBRA_BASE.to_string(),
            scryfall_base: config::SCRYFALL_BASE.to_string(),
        }
    }
}

impl OverviewGeneratorBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/cube-overview` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the CubeCobra cube id whose list is consulted.
    pub fn cube_id(mut self, cube_id: &str) -> Self {
        self.cube_id = cube_id.to_string();
        self
    }

    /// Override the CubeCobra base URL. Used by tests to point the catalog
    /// at a local mock server.
    pub fn cubecobra_base_url(mut self, base: &str) -> Self {
        self.cubecobra_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Override the Scryfall base URL. Used by tests to point the search
    /// at a local mock server.
    pub fn scryfall_base_url(mut self, base: &str) -> Self {
        self.scryfall_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Build the generator, initializing the response cache.
    ///
    /// No data is fetched eagerly; the cube list and search results are
    /// retrieved lazily on first use.
    pub fn build(self) -> Result<OverviewGenerator> {
        let cache = ResponseCache::new(self.cache_dir, self.timeout)?;
        Ok(OverviewGenerator {
            cache: RefCell::new(cache),
            catalog_url: config::catalog_url(&self.cubecobra_base, &self.cube_id),
            scryfall_base: self.scryfall_base,
            cube_id: self.cube_id,
            catalog: RefCell::new(None),
        })
    }
}

// ---------------------------------------------------------------------------
// OverviewGenerator
// ---------------------------------------------------------------------------

/// The main entry point of the crate.
///
/// Owns the shared [`ResponseCache`] and the lazily loaded cube list, and
/// exposes the catalog and search interfaces as lightweight borrowing
/// wrappers. Created via [`OverviewGenerator::builder()`].
pub struct OverviewGenerator {
    cache: RefCell<ResponseCache>,
    catalog_url: String,
    scryfall_base: String,
    cube_id: String,
    /// Parsed cube list; `None` until the first catalog lookup.
    catalog: RefCell<Option<Vec<CubeCard>>>,
}

impl OverviewGenerator {
    /// Create a new builder for configuring the generator.
    pub fn builder() -> OverviewGeneratorBuilder {
        OverviewGeneratorBuilder::default()
    }

    // -- Component accessors -----------------------------------------------

    /// Access the cube list lookup interface.
    pub fn catalog(&self) -> catalog::CatalogClient<'_> {
        catalog::CatalogClient::new(self)
    }

    /// Access the Scryfall search interface.
    pub fn scryfall(&self) -> scryfall::ScryfallClient<'_> {
        scryfall::ScryfallClient::new(self)
    }

    // -- Rendering ---------------------------------------------------------

    /// Render the whole overview document.
    ///
    /// Validates that no card name is used as the image for more than one
    /// deck before any lookup happens, then renders each deck in order.
    /// Every error is terminal; there is no partial output.
    pub fn render(&self, overview: &Overview) -> Result<String> {
        render::render_overview(self, overview)
    }

    /// Render a single deck block: heading plus image row.
    pub fn render_deck(&self, deck: &Deck) -> Result<String> {
        render::render_deck(self, deck)
    }

    // -- Shared plumbing for the clients -----------------------------------

    /// Fetch a URL through the shared response cache.
    pub(crate) fn fetch(&self, url: &str) -> Result<String> {
        self.cache.borrow_mut().fetch(url)
    }

    pub(crate) fn scryfall_base(&self) -> &str {
        &self.scryfall_base
    }

    /// Load and parse the cube list if it has not been loaded yet.
    pub(crate) fn ensure_catalog(&self) -> Result<()> {
        if self.catalog.borrow().is_some() {
            return Ok(());
        }
        let body = self.fetch(&self.catalog_url)?;
        let cards = catalog::parse(&body)?;
        log::info!("loaded cube list with {} cards", cards.len());
        *self.catalog.borrow_mut() = Some(cards);
        Ok(())
    }

    pub(crate) fn catalog_rows(&self) -> Ref<'_, Option<Vec<CubeCard>>> {
        self.catalog.borrow()
    }
}

impl fmt::Display for OverviewGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        write!(
            f,
            "OverviewGenerator(cube={}, cache_dir={}, catalog_loaded={})",
            self.cube_id,
            cache.cache_dir.display(),
            self.catalog.borrow().is_some()
        )
    }
}
