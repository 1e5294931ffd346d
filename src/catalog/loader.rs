//! Card catalog loading utilities
//!
//! Parses a bulk catalog JSON array into validated cards. A record without a
//! name fails the whole load: the feature builder assumes validated input
//! and never repairs rows. Unknown JSON keys are ignored (bulk files carry
//! far more fields than the game consumes).

use crate::core::Card;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Raw catalog record as it appears on disk
///
/// Every field is optional at the decode layer; validation happens when
/// converting to [`Card`].
#[derive(Debug, Deserialize)]
struct RawCard {
    name: Option<String>,
    oracle_text: Option<String>,
    cmc: Option<f64>,
    power: Option<String>,
    toughness: Option<String>,
    type_line: Option<String>,
    colors: Option<Vec<String>>,
    keywords: Option<Vec<String>>,
}

/// Error type for catalog loading failures
#[derive(Debug)]
pub enum CatalogError {
    /// File could not be read
    Io(std::io::Error),
    /// JSON was not a valid card array
    Decode(serde_json::Error),
    /// Record at the given index is missing its name
    MissingName { index: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read catalog: {e}"),
            Self::Decode(e) => write!(f, "Failed to decode catalog JSON: {e}"),
            Self::MissingName { index } => {
                write!(f, "Catalog record {index} has no name")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::MissingName { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

/// Decode a JSON array of card records into validated cards
///
/// # Errors
///
/// Returns `CatalogError::Decode` for malformed JSON and
/// `CatalogError::MissingName` if any record lacks a usable name. One bad
/// record fails the whole load; the game never sees partial data.
pub fn cards_from_json(json: &str) -> Result<Vec<Card>, CatalogError> {
    let raw: Vec<RawCard> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut card = record
                .name
                .as_deref()
                .ok_or(CatalogError::MissingName { index })
                .and_then(|name| {
                    Card::new(name).map_err(|_| CatalogError::MissingName { index })
                })?;

            if let Some(text) = record.oracle_text {
                card = card.with_oracle_text(text);
            }
            if let Some(cmc) = record.cmc {
                card = card.with_cmc(cmc);
            }
            if let Some(power) = record.power {
                card = card.with_power(power);
            }
            if let Some(toughness) = record.toughness {
                card = card.with_toughness(toughness);
            }
            if let Some(type_line) = record.type_line {
                card = card.with_type_line(type_line);
            }
            if let Some(colors) = record.colors {
                card = card.with_colors(colors);
            }
            if let Some(keywords) = record.keywords {
                card = card.with_keywords(keywords);
            }

            Ok(card)
        })
        .collect()
}

/// Load and validate a card catalog from a JSON file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, plus everything
/// [`cards_from_json`] can return.
///
/// # Examples
/// ```no_run
/// use cardseeker::catalog::load_from_file;
///
/// let cards = load_from_file("data/oracle-cards.json").unwrap();
/// println!("Loaded {} cards", cards.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, CatalogError> {
    let content = fs::read_to_string(path)?;
    cards_from_json(&content)
}
