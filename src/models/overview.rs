use serde::{Deserialize, Serialize};

/// The full overview document input: a cube title, its free-text
/// description, and the archetype decks in display order.
///
/// Constructed once from caller-supplied data and rendered once. The card
/// names across all decks must be unique; rendering validates this before
/// any lookups happen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overview {
    pub title: String,
    pub description: String,
    pub decks: Vec<Deck>,
}

/// A named, color-tagged, star-rated grouping of representative cards
/// within the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    /// Single-letter color codes in display order, e.g. `"wub"`.
    /// Duplicates are displayed as given, not rejected.
    pub mana: String,
    /// Star rating, rendered as that many repeated glyphs.
    pub stars: u8,
    /// Card names in display order. Each is resolved against the cube list
    /// and Scryfall to produce its image embed.
    pub cards: Vec<String>,
}

impl Deck {
    pub fn new(title: &str, mana: &str, stars: u8, cards: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            mana: mana.to_string(),
            stars,
            cards: cards.iter().map(|c| c.to_string()).collect(),
        }
    }
}
