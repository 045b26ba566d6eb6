use std::path::PathBuf;

pub const CUBECOBRA_BASE: &str = "https://cubecobra.com";
pub const SCRYFALL_BASE: &str = "https://api.scryfall.com";

/// Cube id of the list this tool renders by default.
pub const DEFAULT_CUBE_ID: &str = "5ec423906c26474a6ce5eb85";

/// Display-ordering parameters baked into the CubeCobra CSV export link.
const CSV_PARAMS: &str = "primary=Color%20Category&secondary=Types-Multicolor&tertiary=Mana%20Value&quaternary=Alphabetical&showother=false";

/// CSV download URL for a cube's full card list.
pub fn catalog_url(base: &str, cube_id: &str) -> String {
    format!("{}/cube/download/csv/{}?{}", base, cube_id, CSV_PARAMS)
}

/// Scryfall search URL for a percent-encoded query.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}/cards/search?q={}", base, urlencoding::encode(query))
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("cube-overview")
    } else {
        PathBuf::from(".cube-overview-cache")
    }
}
