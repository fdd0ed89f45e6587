//! Patent card data and modal display content

use crate::validation::trim_js;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNTITLED: &str = "Untitled Patent";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_IMAGE_ALT: &str = "Patent image";

/// Raw values read off a patent card
///
/// `data-*` attributes plus the two DOM fallbacks (description paragraph
/// and logo image). Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardData {
    pub image: Option<String>,
    pub number: Option<String>,
    pub inventor: Option<String>,
    pub filing: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Text of the card's description paragraph
    pub description: Option<String>,
    /// `src` of the card's logo image
    pub logo_src: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Patent details shown in the modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentInfo {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub image: String,
    pub number: String,
    pub inventor: String,
    pub filing_date: String,
    pub status: String,
}

impl Default for PatentInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            abstract_text: String::new(),
            image: String::new(),
            number: NOT_AVAILABLE.to_string(),
            inventor: NOT_AVAILABLE.to_string(),
            filing_date: NOT_AVAILABLE.to_string(),
            status: NOT_AVAILABLE.to_string(),
        }
    }
}

impl PatentInfo {
    /// Resolve a card into patent details
    ///
    /// Title prefers the trimmed description paragraph, then the abstract
    /// attribute. The abstract falls back to the title. The image falls back
    /// to the card logo, then `placeholder_image`.
    pub fn from_card(card: &CardData, placeholder_image: &str) -> Self {
        let title = card
            .description
            .as_deref()
            .map(trim_js)
            .filter(|s| !s.is_empty())
            .or_else(|| present(&card.abstract_text))
            .unwrap_or_default()
            .to_string();

        let abstract_text = present(&card.abstract_text)
            .map(str::to_string)
            .unwrap_or_else(|| title.clone());

        let image = present(&card.image)
            .or_else(|| present(&card.logo_src))
            .unwrap_or(placeholder_image)
            .to_string();

        let or_na = |v: &Option<String>| present(v).unwrap_or(NOT_AVAILABLE).to_string();

        Self {
            title,
            abstract_text,
            image,
            number: or_na(&card.number),
            inventor: or_na(&card.inventor),
            filing_date: or_na(&card.filing),
            status: or_na(&card.status),
        }
    }
}

/// Final text for every modal display slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub abstract_text: String,
    pub image_src: String,
    pub image_alt: String,
    pub number: String,
    pub inventor: String,
    pub filing: String,
    pub status: String,
}

impl ModalContent {
    pub fn from_info(info: &PatentInfo, placeholder_image: &str) -> Self {
        let or = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            title: or(&info.title, UNTITLED),
            abstract_text: or(&info.abstract_text, NO_DESCRIPTION),
            image_src: or(&info.image, placeholder_image),
            image_alt: or(&info.title, DEFAULT_IMAGE_ALT),
            number: or(&info.number, NOT_AVAILABLE),
            inventor: or(&info.inventor, NOT_AVAILABLE),
            filing: or(&info.filing_date, NOT_AVAILABLE),
            status: or(&info.status, NOT_AVAILABLE),
        }
    }
}
