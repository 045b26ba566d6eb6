use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CubeCard — one row of the cube's CSV export
// ---------------------------------------------------------------------------

/// One row of the CubeCobra CSV export.
///
/// Only the columns the generator consumes are modeled; the export carries
/// many more, which serde ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeCard {
    pub name: String,
    #[serde(rename = "Set")]
    pub set: String,
    /// Raw collector number as exported. May carry a set prefix, e.g. The
    /// List exports "XLN-1" for the reprint of XLN 1.
    #[serde(rename = "Collector Number")]
    pub collector_number: String,
}

impl CubeCard {
    /// Collector number with all non-digit characters stripped:
    /// `"XLN-1"` -> `"1"`, `"42"` -> `"42"`. Idempotent.
    pub fn normalized_collector_number(&self) -> String {
        self.collector_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ScryfallCard / SearchResponse
// ---------------------------------------------------------------------------

/// A single card record from a Scryfall search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
    /// Scryfall's stable card id, used to build the image embed.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub collector_number: String,
}

/// The Scryfall list envelope returned by `/cards/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_cards: Option<usize>,
    #[serde(default)]
    pub data: Vec<ScryfallCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(collector_number: &str) -> CubeCard {
        CubeCard {
            name: "Test".to_string(),
            set: "tst".to_string(),
            collector_number: collector_number.to_string(),
        }
    }

    #[test]
    fn normalization_strips_set_prefix() {
        assert_eq!(card("XLN-1").normalized_collector_number(), "1");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = card("XLN-1").normalized_collector_number();
        let twice = card(&once).normalized_collector_number();
        assert_eq!(once, "1");
        assert_eq!(twice, "1");
    }

    #[test]
    fn normalization_leaves_plain_numbers_unchanged() {
        assert_eq!(card("42").normalized_collector_number(), "42");
    }

    #[test]
    fn search_response_deserializes_list_envelope() {
        let json = r#"{"object":"list","total_cards":1,"data":[{"id":"abc123","name":"Bolt","set":"lea","collector_number":"161"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_cards, Some(1));
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "abc123");
    }
}
