//! Error types for card loading and validation.

use thiserror::Error;

/// Result type alias using [`CardError`].
pub type Result<T> = std::result::Result<T, CardError>;

/// Everything that can go wrong while turning card data into validated cards.
#[derive(Debug, Error)]
pub enum CardError {
    /// A card or team broke a schema rule.
    #[error("Invalid card \"{card}\": {reason}")]
    InvalidCard {
        /// Id of the offending card (may be empty).
        card: String,
        /// Which rule was broken.
        reason: String,
    },

    /// A heading was not followed by a markdown image line.
    #[error("Missing or invalid image line after card heading on line {heading_line}. Expected markdown image syntax on line {image_line}.")]
    MissingImage {
        heading_line: usize,
        image_line: usize,
    },

    /// The image alt text differs from the card name.
    #[error("Image alt text \"{alt}\" does not match card name \"{name}\" on line {line}.")]
    AltTextMismatch {
        alt: String,
        name: String,
        line: usize,
    },

    /// The rarity column holds an unknown value.
    #[error("Invalid rarity \"{rarity}\" on line {line}. Supported values: common, uncommon, rare, legendary")]
    InvalidRarity { rarity: String, line: usize },

    /// A lineup referenced a card id the catalog does not know.
    #[error("Unknown card id \"{0}\"")]
    UnknownCard(String),

    /// Card or team JSON did not match the expected shape.
    #[error("Malformed card data: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardError {
    pub(crate) fn invalid(card: &str, reason: impl Into<String>) -> Self {
        CardError::InvalidCard {
            card: card.to_string(),
            reason: reason.into(),
        }
    }
}
