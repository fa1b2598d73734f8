use crate::Error;
use crate::types::card::Card;
use serde::{Deserialize, Serialize};

/// A place money can be drawn from or sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MoneySource {
    Card(Card),
    Wallet(Wallet),
}

impl MoneySource {
    /// Source identifier, if the API assigned one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Card(card) => card.id(),
            Self::Wallet(wallet) => wallet.id(),
        }
    }

    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            Self::Wallet(_) => None,
        }
    }
}

impl From<Card> for MoneySource {
    fn from(value: Card) -> Self {
        Self::Card(value)
    }
}

impl From<Wallet> for MoneySource {
    fn from(value: Wallet) -> Self {
        Self::Wallet(value)
    }
}

/// Construction capability shared by every money source kind.
pub trait MoneySourceBuilder: Sized {
    fn id(self, id: Option<String>) -> Self;

    fn create(self) -> Result<MoneySource, Error>;
}

/// The account's own wallet balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Wallet {
    #[must_use]
    pub fn builder() -> WalletBuilder {
        WalletBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalletBuilder {
    id: Option<String>,
}

impl WalletBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<Option<String>>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn build(self) -> Wallet {
        Wallet { id: self.id }
    }
}

impl MoneySourceBuilder for WalletBuilder {
    fn id(self, id: Option<String>) -> Self {
        WalletBuilder::id(self, id)
    }

    fn create(self) -> Result<MoneySource, Error> {
        Ok(MoneySource::Wallet(self.build()))
    }
}
