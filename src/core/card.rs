//! Catalog card representation
//!
//! A `Card` is one validated catalog entry. The name is the unique, stable
//! identity used as the row key throughout the game; every other attribute
//! is optional raw material for the feature builder.

use std::fmt;

/// One validated trading-card record
///
/// All attribute fields are optional: the catalog carries partial records
/// (lands have no power, colorless cards have no color list). Only the name
/// is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    name: String,
    oracle_text: Option<String>,
    cmc: Option<f64>,
    power: Option<String>,
    toughness: Option<String>,
    type_line: Option<String>,
    colors: Option<Vec<String>>,
    keywords: Option<Vec<String>>,
}

/// Error type for invalid card records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    MissingName,
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Card record has no name"),
        }
    }
}

impl std::error::Error for CardError {}

impl Card {
    /// Create a new card with the given name and no other attributes
    ///
    /// # Errors
    /// Returns `CardError::MissingName` if the name is empty or whitespace-only.
    ///
    /// # Examples
    /// ```
    /// use cardseeker::core::Card;
    ///
    /// let card = Card::new("Grizzly Bears").unwrap();
    /// assert_eq!(card.name(), "Grizzly Bears");
    ///
    /// assert!(Card::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, CardError> {
        let name: String = name.into();

        if name.trim().is_empty() {
            return Err(CardError::MissingName);
        }

        Ok(Self {
            name,
            oracle_text: None,
            cmc: None,
            power: None,
            toughness: None,
            type_line: None,
            colors: None,
            keywords: None,
        })
    }

    /// Set the rules text
    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = Some(text.into());
        self
    }

    /// Set the converted mana cost
    #[must_use]
    pub const fn with_cmc(mut self, cmc: f64) -> Self {
        self.cmc = Some(cmc);
        self
    }

    /// Set the power field (free text, may not be numeric, e.g. `"*"`)
    #[must_use]
    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self
    }

    /// Set the toughness field (free text, may not be numeric)
    #[must_use]
    pub fn with_toughness(mut self, toughness: impl Into<String>) -> Self {
        self.toughness = Some(toughness.into());
        self
    }

    /// Set the type line, e.g. `"Legendary Creature — Elf Warrior"`
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    /// Set the color list (an empty list means colorless)
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Set the keyword list
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Unique card name; the row key for the feature table
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules text, if any
    #[inline]
    #[must_use]
    pub fn oracle_text(&self) -> Option<&str> {
        self.oracle_text.as_deref()
    }

    /// Converted mana cost, if present
    #[inline]
    #[must_use]
    pub const fn cmc(&self) -> Option<f64> {
        self.cmc
    }

    /// Raw power text, if present
    #[inline]
    #[must_use]
    pub fn power(&self) -> Option<&str> {
        self.power.as_deref()
    }

    /// Raw toughness text, if present
    #[inline]
    #[must_use]
    pub fn toughness(&self) -> Option<&str> {
        self.toughness.as_deref()
    }

    /// Type line, if present
    #[inline]
    #[must_use]
    pub fn type_line(&self) -> Option<&str> {
        self.type_line.as_deref()
    }

    /// Color list; `None` and `Some(&[])` both mean colorless
    #[inline]
    #[must_use]
    pub fn colors(&self) -> Option<&[String]> {
        self.colors.as_deref()
    }

    /// Keyword list; missing reads as empty
    #[inline]
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or(&[])
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
