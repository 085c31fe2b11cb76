//! Domain validation errors.
//!
//! Returned by `try_new` constructors when an input would break a domain
//! invariant.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use stockwatch::domain::{ClosingPrices, DomainError};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
//! let result = ClosingPrices::try_new(dec!(0), dec!(251.52), date);
//!
//! assert!(matches!(result, Err(DomainError::NonPositivePrice { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Closing prices must be strictly positive.
    #[error("closing price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: Decimal,
    },
}
