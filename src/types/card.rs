use crate::enums::{self, WithCode};
use crate::types::money_source::{MoneySource, MoneySourceBuilder};
use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Card brand.
///
/// Codes outside the known set parse to [`CardType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CardType {
    Visa,
    MasterCard,
    AmericanExpress,
    Jcb,
    #[default]
    Unknown,
}

impl CardType {
    /// Parse a wire code, falling back to [`CardType::Unknown`].
    #[must_use]
    pub fn parse(code: &str) -> Self {
        enums::parse(code, Self::Unknown, Self::VALUES)
    }

    /// Label of the card verification code printed on this brand (e.g. `CVV2`).
    #[must_use]
    pub fn csc_abbr(&self) -> &'static str {
        match self {
            Self::Visa => "CVV2",
            Self::MasterCard => "CVC2",
            // also printed as 4DBC
            Self::AmericanExpress => "CID",
            Self::Jcb => "CAV2",
            Self::Unknown => "CSC",
        }
    }

    /// Expected number of digits in the card verification code.
    #[must_use]
    pub fn csc_length(&self) -> usize {
        match self {
            Self::Visa | Self::MasterCard | Self::Jcb => 3,
            Self::AmericanExpress | Self::Unknown => 4,
        }
    }
}

impl WithCode for CardType {
    const VALUES: &'static [Self] = &[
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Jcb,
        Self::Unknown,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "AmericanExpress",
            Self::Jcb => "JCB",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        enums::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enums::deserialize(deserializer, Self::Unknown)
    }
}

/// Bank card linked as a money source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Masked fragment of the card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pan_fragment: Option<String>,
    #[serde(rename = "type", default)]
    card_type: CardType,
}

impl Card {
    #[must_use]
    pub fn builder() -> CardBuilder {
        CardBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn pan_fragment(&self) -> Option<&str> {
        self.pan_fragment.as_deref()
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }
}

/// Staging object for [`Card`].
///
/// Setters never fail; [`CardBuilder::build`] checks the collected fields.
#[derive(Debug, Clone)]
pub struct CardBuilder {
    id: Option<String>,
    pan_fragment: Option<String>,
    card_type: Option<CardType>,
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self {
            id: None,
            pan_fragment: None,
            card_type: Some(CardType::Unknown),
        }
    }
}

impl CardBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<Option<String>>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn pan_fragment(mut self, pan_fragment: impl Into<Option<String>>) -> Self {
        self.pan_fragment = pan_fragment.into();
        self
    }

    /// Set the card brand. Passing `None` makes [`CardBuilder::build`] fail.
    #[must_use]
    pub fn card_type(mut self, card_type: impl Into<Option<CardType>>) -> Self {
        self.card_type = card_type.into();
        self
    }

    pub fn build(self) -> Result<Card, Error> {
        let card_type = self
            .card_type
            .ok_or_else(|| Error::invalid_argument("type is null"))?;
        Ok(Card {
            id: self.id,
            pan_fragment: self.pan_fragment,
            card_type,
        })
    }
}

impl MoneySourceBuilder for CardBuilder {
    fn id(self, id: Option<String>) -> Self {
        CardBuilder::id(self, id)
    }

    fn create(self) -> Result<MoneySource, Error> {
        self.build().map(MoneySource::Card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(card: &Card) -> u64 {
        let mut hasher = DefaultHasher::new();
        card.hash(&mut hasher);
        hasher.finish()
    }

    fn visa() -> Card {
        Card::builder()
            .id("card-1".to_string())
            .pan_fragment("5280****7918".to_string())
            .card_type(CardType::Visa)
            .build()
            .unwrap()
    }

    #[test]
    fn parse_maps_every_known_code() {
        for card_type in CardType::VALUES {
            assert_eq!(CardType::parse(card_type.code()), *card_type);
        }
    }

    #[test]
    fn parse_unknown_codes_to_unknown() {
        assert_eq!(CardType::parse("Maestro"), CardType::Unknown);
        assert_eq!(CardType::parse("visa"), CardType::Unknown);
        assert_eq!(CardType::parse(""), CardType::Unknown);
    }

    #[test]
    fn verification_code_metadata() {
        assert_eq!(CardType::Visa.csc_abbr(), "CVV2");
        assert_eq!(CardType::MasterCard.csc_abbr(), "CVC2");
        assert_eq!(CardType::AmericanExpress.csc_length(), 4);
        assert_eq!(CardType::Jcb.csc_length(), 3);
        assert_eq!(CardType::Unknown.csc_abbr(), "CSC");
    }

    #[test]
    fn builder_defaults_type_to_unknown() {
        let card = Card::builder().build().unwrap();
        assert_eq!(card.card_type(), CardType::Unknown);
        assert_eq!(card.id(), None);
        assert_eq!(card.pan_fragment(), None);
    }

    #[test]
    fn builder_rejects_missing_type() {
        let err = Card::builder().card_type(None).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn equal_fields_mean_equal_cards() {
        assert_eq!(visa(), visa());
        assert_eq!(hash_of(&visa()), hash_of(&visa()));
    }

    #[test]
    fn any_field_change_breaks_equality() {
        let base = visa();
        let other_id = Card::builder()
            .id("card-2".to_string())
            .pan_fragment("5280****7918".to_string())
            .card_type(CardType::Visa)
            .build()
            .unwrap();
        let other_pan = Card::builder()
            .id("card-1".to_string())
            .card_type(CardType::Visa)
            .build()
            .unwrap();
        let other_type = Card::builder()
            .id("card-1".to_string())
            .pan_fragment("5280****7918".to_string())
            .card_type(CardType::MasterCard)
            .build()
            .unwrap();

        assert_ne!(base, other_id);
        assert_ne!(base, other_pan);
        assert_ne!(base, other_type);
    }

    #[test]
    fn json_uses_wire_field_names() {
        let json = serde_json::to_value(visa()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "card-1",
                "pan_fragment": "5280****7918",
                "type": "VISA",
            })
        );
    }

    #[test]
    fn json_with_new_brand_decodes_as_unknown() {
        let card: Card =
            serde_json::from_str(r#"{"pan_fragment":"2200****0001","type":"Mir"}"#).unwrap();
        assert_eq!(card.card_type(), CardType::Unknown);
        assert_eq!(card.pan_fragment(), Some("2200****0001"));
    }

    #[test]
    fn json_with_null_or_missing_type_decodes_as_unknown() {
        let card: Card = serde_json::from_str(r#"{"id":"c","type":null}"#).unwrap();
        assert_eq!(card.card_type(), CardType::Unknown);
        assert_eq!(card.id(), Some("c"));

        let card: Card = serde_json::from_str(r#"{"id":"c"}"#).unwrap();
        assert_eq!(card.card_type(), CardType::Unknown);
    }
}
