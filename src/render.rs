//! Markdown assembly for the overview document.

use std::collections::BTreeMap;

use crate::error::{OverviewError, Result};
use crate::models::{Deck, Overview};
use crate::scryfall;
use crate::OverviewGenerator;

fn h2(text: &str) -> String {
    format!("## {}", text)
}

fn h3(text: &str) -> String {
    format!("### {}", text)
}

fn hr() -> String {
    "-".repeat(30)
}

/// Each color code wrapped as `{code}`, concatenated in stored order.
fn mana_symbols(deck: &Deck) -> String {
    deck.mana.chars().map(|m| format!("{{{}}}", m)).collect()
}

fn heading(deck: &Deck) -> String {
    h3(&format!(
        "{} {} {}",
        mana_symbols(deck),
        deck.title,
        "⭐".repeat(deck.stars as usize)
    ))
}

/// Resolve every card in the deck to an image embed token and wrap the
/// concatenation in the `<<...>>` delimiter pair.
///
/// Any lookup failure aborts the whole deck; there is no partial output.
fn card_images(gen: &OverviewGenerator, deck: &Deck) -> Result<String> {
    let mut images = String::new();
    for card_name in &deck.cards {
        let cube_card = gen.catalog().card_by_name(card_name)?;
        let query =
            scryfall::printing_query(card_name, &cube_card.set, &cube_card.collector_number);
        let scryfall_card = gen.scryfall().find_card_by(&query)?;
        images.push_str(&format!("[[!{}|{}]]", card_name, scryfall_card.id));
    }
    Ok(format!("<<{}>>", images))
}

/// Render one deck: heading and image row, joined by a single line break.
pub(crate) fn render_deck(gen: &OverviewGenerator, deck: &Deck) -> Result<String> {
    Ok(format!("{}\n{}", heading(deck), card_images(gen, deck)?))
}

/// Reject any card name used as the image for more than one deck.
///
/// This is a whole-document invariant and runs before any lookup, so a bad
/// overview never issues a single network request.
pub(crate) fn validate(overview: &Overview) -> Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for deck in &overview.decks {
        for card in &deck.cards {
            *counts.entry(card.as_str()).or_insert(0) += 1;
        }
    }
    for (name, count) in counts {
        if count > 1 {
            return Err(OverviewError::RepeatedCard {
                name: name.to_string(),
                count,
            });
        }
    }
    Ok(())
}

/// Render the whole overview document.
pub(crate) fn render_overview(gen: &OverviewGenerator, overview: &Overview) -> Result<String> {
    validate(overview)?;

    let mut sections = vec![
        h2(&overview.title),
        hr(),
        overview.description.clone(),
        h2("Archetypes and inspiration"),
        hr(),
    ];
    for deck in &overview.decks {
        sections.push(render_deck(gen, deck)?);
    }
    Ok(sections.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mana_symbols_wrap_each_code_in_order() {
        let deck = Deck::new("Esper Control", "wub", 3, &[]);
        assert_eq!(mana_symbols(&deck), "{w}{u}{b}");
    }

    #[test]
    fn heading_combines_symbols_title_and_stars() {
        let deck = Deck::new("Mono", "w", 2, &[]);
        assert_eq!(heading(&deck), "### {w} Mono ⭐⭐");
    }

    #[test]
    fn validate_accepts_unique_cards() {
        let overview = Overview {
            title: "T".to_string(),
            description: "D".to_string(),
            decks: vec![
                Deck::new("A", "w", 1, &["Card A", "Card B"]),
                Deck::new("B", "u", 1, &["Card C"]),
            ],
        };
        assert!(validate(&overview).is_ok());
    }

    #[test]
    fn validate_reports_card_repeated_across_decks() {
        let overview = Overview {
            title: "T".to_string(),
            description: "D".to_string(),
            decks: vec![
                Deck::new("A", "w", 1, &["Card A"]),
                Deck::new("B", "u", 1, &["Card A"]),
                Deck::new("C", "b", 1, &["Card A"]),
            ],
        };
        match validate(&overview) {
            Err(OverviewError::RepeatedCard { name, count }) => {
                assert_eq!(name, "Card A");
                assert_eq!(count, 3);
            }
            other => panic!("expected RepeatedCard, got {:?}", other),
        }
    }

    #[test]
    fn validate_reports_card_repeated_within_one_deck() {
        let overview = Overview {
            title: "T".to_string(),
            description: "D".to_string(),
            decks: vec![Deck::new("A", "w", 1, &["Card A", "Card A"])],
        };
        assert!(matches!(
            validate(&overview),
            Err(OverviewError::RepeatedCard { count: 2, .. })
        ));
    }
}
