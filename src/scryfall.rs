//! Scryfall card search.

use crate::config;
use crate::error::{OverviewError, Result};
use crate::models::{ScryfallCard, SearchResponse};
use crate::OverviewGenerator;

/// Search interface for the Scryfall `/cards/search` endpoint.
///
/// Queries are expected to pin down a single printing (exact name plus set
/// and collector number filters); an ambiguous query is a hard error, never
/// silently resolved by taking the first result.
pub struct ScryfallClient<'a> {
    gen: &'a OverviewGenerator,
}

impl<'a> ScryfallClient<'a> {
    /// Create a new `ScryfallClient` bound to the given generator.
    pub fn new(gen: &'a OverviewGenerator) -> Self {
        Self { gen }
    }

    /// Resolve a search query to exactly one card.
    pub fn find_card_by(&self, query: &str) -> Result<ScryfallCard> {
        let url = config::search_url(self.gen.scryfall_base(), query);
        let body = self.gen.fetch(&url)?;
        let response: SearchResponse = serde_json::from_str(&body)?;

        log::debug!(
            "search {:?} returned {} records ({:?} total)",
            query,
            response.data.len(),
            response.total_cards
        );

        let mut data = response.data;
        match data.len() {
            1 => Ok(data.remove(0)),
            0 => Err(OverviewError::SearchCardNotFound(query.to_string())),
            count => Err(OverviewError::TooManyCards {
                query: query.to_string(),
                count,
            }),
        }
    }
}

/// Build the search query used to resolve one cube card to one printing:
/// exact-name phrase plus set and collector number filters.
pub(crate) fn printing_query(name: &str, set: &str, collector_number: &str) -> String {
    format!("!\"{}\" s:{} cn:{}", name, set, collector_number)
}

#[cfg(test)]
mod tests {
    use super::printing_query;

    #[test]
    fn printing_query_quotes_the_exact_name() {
        assert_eq!(
            printing_query("Card A", "XYZ", "7"),
            "!\"Card A\" s:XYZ cn:7"
        );
    }
}
