//! Models exchanged with the API.

pub mod card;
pub mod error_code;
pub mod money_source;
pub mod token;

pub use card::*;
pub use error_code::*;
pub use money_source::*;
pub use token::*;
