//! Feature builder
//!
//! Flattens validated cards into the feature matrix. Vocabularies (type
//! tokens, colors, keywords) are enumerated once over the whole catalog in
//! first-appearance order and become immutable schema metadata; column order
//! never depends on hash iteration order.

use crate::core::Card;
use crate::features::FeatureTable;
use rustc_hash::FxHashSet;

/// Fixed rules-text vocabulary: one `oracle_cares_*` column per word
pub const CARE_WORDS: &[&str] = &[
    "creature",
    "token",
    "instant",
    "sorcery",
    "legend",
    "land",
    "artifact",
    "enchantment",
    "damage",
    "prevent",
    "dies",
    "destroy",
    "life",
];

/// Type-line separator token carrying no type information
const TYPE_SEPARATOR: &str = "—";

/// Boolean feature encoding
#[inline]
const fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Numeric parse with the NaN sentinel for missing or non-numeric text
///
/// Power/toughness fields like `"*"` or `"1+*"` do not parse; the sentinel
/// keeps the column rectangular and drops such rows out of every
/// real-valued comparison downstream.
fn parse_numeric(text: Option<&str>) -> f64 {
    text.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Remove parenthetical reminder-text spans from rules text
///
/// Spans are non-nested and non-greedy: each `(` swallows up to the next
/// `)`. An unclosed `(` swallows the rest of the text.
fn strip_reminder_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_reminder = false;

    for ch in text.chars() {
        match (in_reminder, ch) {
            (false, '(') => in_reminder = true,
            (false, _) => out.push(ch),
            (true, ')') => in_reminder = false,
            (true, _) => {}
        }
    }

    out
}

/// Distinct strings in first-appearance order
fn ordered_distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut ordered = Vec::new();

    for item in items {
        if seen.insert(item) {
            ordered.push(item.to_string());
        }
    }

    ordered
}

fn type_tokens(card: &Card) -> impl Iterator<Item = &str> {
    card.type_line()
        .unwrap_or_default()
        .split_whitespace()
        .filter(|token| *token != TYPE_SEPARATOR)
}

/// Build the feature table for a catalog
///
/// One row per card, keyed by name; every row has a value (possibly the NaN
/// sentinel) for every column. Column families, in schema order:
/// `oracle_cares_*`, `power_float`, `toughness_float`, `cmc`, `is_type_*`,
/// `is_color_C` plus `is_color_*`, `is_keyword_*`.
#[must_use]
pub fn build_table(cards: &[Card]) -> FeatureTable {
    let type_vocab = ordered_distinct(cards.iter().flat_map(type_tokens));
    let color_vocab = ordered_distinct(
        cards
            .iter()
            .filter_map(Card::colors)
            .flatten()
            .map(String::as_str),
    );
    let keyword_vocab = ordered_distinct(
        cards
            .iter()
            .flat_map(|card| card.keywords().iter().map(String::as_str)),
    );

    let mut columns = Vec::new();
    for care in CARE_WORDS {
        columns.push(format!("oracle_cares_{care}"));
    }
    columns.push("power_float".to_string());
    columns.push("toughness_float".to_string());
    columns.push("cmc".to_string());
    for token in &type_vocab {
        columns.push(format!("is_type_{token}"));
    }
    columns.push("is_color_C".to_string());
    for color in &color_vocab {
        columns.push(format!("is_color_{color}"));
    }
    for keyword in &keyword_vocab {
        columns.push(format!("is_keyword_{keyword}"));
    }

    let mut names = Vec::with_capacity(cards.len());
    let mut rows = Vec::with_capacity(cards.len());

    for card in cards {
        let mut row = Vec::with_capacity(columns.len());

        let text = card
            .oracle_text()
            .map(|t| strip_reminder_text(t).to_lowercase())
            .unwrap_or_default();
        for care in CARE_WORDS {
            row.push(flag(text.contains(care)));
        }

        row.push(parse_numeric(card.power()));
        row.push(parse_numeric(card.toughness()));
        row.push(card.cmc().unwrap_or(f64::NAN));

        let tokens: FxHashSet<&str> = type_tokens(card).collect();
        for token in &type_vocab {
            row.push(flag(tokens.contains(token.as_str())));
        }

        // Empty or absent color list means colorless
        let colors = card.colors().unwrap_or_default();
        row.push(flag(colors.is_empty()));
        for color in &color_vocab {
            row.push(flag(colors.contains(color)));
        }

        let keywords = card.keywords();
        for keyword in &keyword_vocab {
            row.push(flag(keywords.contains(keyword)));
        }

        names.push(card.name().to_string());
        rows.push(row);
    }

    FeatureTable::new(columns, names, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::new("Grizzly Bears")
                .unwrap()
                .with_oracle_text("")
                .with_cmc(2.0)
                .with_power("2")
                .with_toughness("2")
                .with_type_line("Creature — Bear")
                .with_colors(vec!["G".to_string()]),
            Card::new("Tarmogoyf")
                .unwrap()
                .with_oracle_text(
                    "Tarmogoyf's power is equal to the number of card types \
                     among cards in all graveyards.",
                )
                .with_cmc(2.0)
                .with_power("*")
                .with_toughness("1+*")
                .with_type_line("Creature — Lhurgoyf")
                .with_colors(vec!["G".to_string()]),
            Card::new("Sol Ring")
                .unwrap()
                .with_oracle_text("{T}: Add {C}{C}.")
                .with_cmc(1.0)
                .with_type_line("Artifact")
                .with_colors(vec![]),
            Card::new("Serra Angel")
                .unwrap()
                .with_oracle_text(
                    "Flying (This creature can't be blocked except by creatures \
                     with flying or reach.) Vigilance",
                )
                .with_cmc(5.0)
                .with_power("4")
                .with_toughness("4")
                .with_type_line("Creature — Angel")
                .with_colors(vec!["W".to_string()])
                .with_keywords(vec!["Flying".to_string(), "Vigilance".to_string()]),
        ]
    }

    fn column_value(table: &FeatureTable, name: &str, column: &str) -> f64 {
        let row = table.row_of(name).expect("row exists");
        let col = table
            .columns()
            .iter()
            .position(|c| c == column)
            .expect("column exists");
        table.value(row, col)
    }

    #[test]
    fn every_row_has_every_column() {
        let table = build_table(&sample_cards());

        assert_eq!(table.len(), 4);
        // FeatureTable::new asserts rectangularity; spot-check a cell from
        // each family anyway
        for name in ["Grizzly Bears", "Tarmogoyf", "Sol Ring", "Serra Angel"] {
            for column in ["oracle_cares_creature", "power_float", "cmc", "is_color_C"] {
                let _ = column_value(&table, name, column);
            }
        }
    }

    #[test]
    fn schema_order_is_deterministic() {
        let cards = sample_cards();
        let first = build_table(&cards);
        let second = build_table(&cards);
        assert_eq!(first.columns(), second.columns());

        // First-appearance order for vocabularies
        let types: Vec<&str> = first
            .columns()
            .iter()
            .filter(|c| c.starts_with("is_type_"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            types,
            vec![
                "is_type_Creature",
                "is_type_Bear",
                "is_type_Lhurgoyf",
                "is_type_Artifact",
                "is_type_Angel",
            ]
        );
    }

    #[test]
    fn type_separator_token_excluded() {
        let table = build_table(&sample_cards());
        assert!(
            !table.columns().iter().any(|c| c == "is_type_—"),
            "separator token must not become a column"
        );
    }

    #[test]
    fn non_numeric_power_is_nan() {
        let table = build_table(&sample_cards());

        assert!(column_value(&table, "Tarmogoyf", "power_float").is_nan());
        assert!(column_value(&table, "Tarmogoyf", "toughness_float").is_nan());
        assert_eq!(column_value(&table, "Grizzly Bears", "power_float"), 2.0);
        // Missing fields share the sentinel
        assert!(column_value(&table, "Sol Ring", "power_float").is_nan());
    }

    #[test]
    fn cmc_carried_through() {
        let table = build_table(&sample_cards());
        assert_eq!(column_value(&table, "Serra Angel", "cmc"), 5.0);
        assert_eq!(column_value(&table, "Sol Ring", "cmc"), 1.0);
    }

    #[test]
    fn empty_color_list_is_colorless() {
        let table = build_table(&sample_cards());

        assert_eq!(column_value(&table, "Sol Ring", "is_color_C"), 1.0);
        assert_eq!(column_value(&table, "Sol Ring", "is_color_G"), 0.0);
        assert_eq!(column_value(&table, "Sol Ring", "is_color_W"), 0.0);

        assert_eq!(column_value(&table, "Grizzly Bears", "is_color_C"), 0.0);
        assert_eq!(column_value(&table, "Grizzly Bears", "is_color_G"), 1.0);
    }

    #[test]
    fn reminder_text_excluded_from_care_matching() {
        let table = build_table(&sample_cards());

        // "creature"/"creatures" only occur inside Serra Angel's reminder text
        assert_eq!(
            column_value(&table, "Serra Angel", "oracle_cares_creature"),
            0.0
        );

        // The same word outside parentheses still matches
        let cards = vec![
            Card::new("Doom Blade")
                .unwrap()
                .with_oracle_text("Destroy target nonblack creature."),
            Card::new("Blank").unwrap().with_oracle_text("No match here."),
        ];
        let table = build_table(&cards);
        assert_eq!(
            column_value(&table, "Doom Blade", "oracle_cares_creature"),
            1.0
        );
        assert_eq!(
            column_value(&table, "Doom Blade", "oracle_cares_destroy"),
            1.0
        );
    }

    #[test]
    fn care_matching_is_case_insensitive() {
        let cards = vec![
            Card::new("Shock")
                .unwrap()
                .with_oracle_text("Shock deals 2 DAMAGE to any target."),
            Card::new("Healing Salve")
                .unwrap()
                .with_oracle_text("You gain 4 life."),
        ];
        let table = build_table(&cards);

        assert_eq!(column_value(&table, "Shock", "oracle_cares_damage"), 1.0);
        assert_eq!(column_value(&table, "Shock", "oracle_cares_life"), 0.0);
        assert_eq!(
            column_value(&table, "Healing Salve", "oracle_cares_life"),
            1.0
        );
    }

    #[test]
    fn keyword_indicators_membership() {
        let table = build_table(&sample_cards());

        assert_eq!(
            column_value(&table, "Serra Angel", "is_keyword_Flying"),
            1.0
        );
        assert_eq!(
            column_value(&table, "Serra Angel", "is_keyword_Vigilance"),
            1.0
        );
        // No keywords: all keyword columns false
        assert_eq!(
            column_value(&table, "Grizzly Bears", "is_keyword_Flying"),
            0.0
        );
    }

    #[test]
    fn strip_reminder_text_spans() {
        assert_eq!(
            strip_reminder_text("Flying (can't be blocked) and haste"),
            "Flying  and haste"
        );
        assert_eq!(strip_reminder_text("(a)(b)c"), "c");
        assert_eq!(strip_reminder_text("no parens"), "no parens");
        // Unclosed span swallows the tail
        assert_eq!(strip_reminder_text("text (unclosed"), "text ");
    }

    #[test]
    fn parse_numeric_sentinel() {
        assert_eq!(parse_numeric(Some("3")), 3.0);
        assert_eq!(parse_numeric(Some("-1.5")), -1.5);
        assert!(parse_numeric(Some("*")).is_nan());
        assert!(parse_numeric(Some("1+*")).is_nan());
        assert!(parse_numeric(None).is_nan());
    }
}
