//! Cube list lookups backed by the CubeCobra CSV export.

use crate::error::{OverviewError, Result};
use crate::models::CubeCard;
use crate::OverviewGenerator;

/// Lookup interface for the cube's card list.
///
/// The CSV export is fetched through the response cache and parsed once per
/// process on first access; later lookups reuse the parsed rows.
pub struct CatalogClient<'a> {
    gen: &'a OverviewGenerator,
}

impl<'a> CatalogClient<'a> {
    /// Create a new `CatalogClient` bound to the given generator.
    pub fn new(gen: &'a OverviewGenerator) -> Self {
        Self { gen }
    }

    /// Find a card in the cube by exact, case-sensitive name.
    ///
    /// Returns the first matching row, with its collector number normalized
    /// to bare digits. Repeated lookups are idempotent: normalization is a
    /// derivation on the returned copy, never a mutation of the parsed rows.
    pub fn card_by_name(&self, name: &str) -> Result<CubeCard> {
        self.gen.ensure_catalog()?;

        let rows = self.gen.catalog_rows();
        let rows = rows.as_ref().expect("catalog loaded above");
        let found = rows
            .iter()
            .find(|card| card.name == name)
            .ok_or_else(|| OverviewError::CubeCardNotFound(name.to_string()))?;

        let mut card = found.clone();
        card.collector_number = card.normalized_collector_number();
        Ok(card)
    }
}

/// Parse the CSV export: first row is the header, remaining rows are
/// records keyed by header name.
pub(crate) fn parse(csv_text: &str) -> Result<Vec<CubeCard>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut cards = Vec::new();
    for row in reader.deserialize() {
        let card: CubeCard = row?;
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parse_keys_records_by_header_name() {
        let csv = "name,CMC,Type,Set,Collector Number\n\
                   Lightning Bolt,1,Instant,lea,161\n\
                   \"Jace, the Mind Sculptor\",4,Planeswalker,wwk,31\n";
        let cards = parse(csv).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Lightning Bolt");
        assert_eq!(cards[0].set, "lea");
        assert_eq!(cards[0].collector_number, "161");
        assert_eq!(cards[1].name, "Jace, the Mind Sculptor");
    }

    #[test]
    fn parse_keeps_raw_collector_number() {
        let csv = "name,Set,Collector Number\nSix,plst,\"MH1-168\"\n";
        let cards = parse(csv).unwrap();
        assert_eq!(cards[0].collector_number, "MH1-168");
        assert_eq!(cards[0].normalized_collector_number(), "168");
    }
}
