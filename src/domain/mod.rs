//! Pure domain values and calculations.
//!
//! Nothing in here performs I/O: prices and articles arrive already fetched,
//! and the results are plain values the application layer acts on.

pub mod alert;
pub mod error;
pub mod news;
pub mod price;

pub use alert::compose_alert;
pub use error::DomainError;
pub use news::{Article, RelevanceFilter};
pub use price::{calculate_move, ClosingPrices, Direction, PriceMove};
