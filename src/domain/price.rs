//! Day-over-day price movement.
//!
//! The percentage change is measured against the average of the two closing
//! prices rather than against the previous close, so a move up and the same
//! move back down report the same magnitude.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::DomainError;

/// The two most recent daily closes for a security.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosingPrices {
    latest: Decimal,
    previous: Decimal,
    date: NaiveDate,
}

impl ClosingPrices {
    /// Create closing prices, rejecting zero or negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositivePrice`] if either close is not
    /// strictly positive.
    pub fn try_new(
        latest: Decimal,
        previous: Decimal,
        date: NaiveDate,
    ) -> Result<Self, DomainError> {
        for price in [latest, previous] {
            if price <= Decimal::ZERO {
                return Err(DomainError::NonPositivePrice { price });
            }
        }
        Ok(Self {
            latest,
            previous,
            date,
        })
    }

    /// Close of the most recent trading day.
    #[must_use]
    pub const fn latest(&self) -> Decimal {
        self.latest
    }

    /// Close of the trading day before that.
    #[must_use]
    pub const fn previous(&self) -> Decimal {
        self.previous
    }

    /// Trading date of the latest close.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Movement from the previous close to the latest one.
    #[must_use]
    pub fn movement(&self) -> PriceMove {
        calculate_move(self.latest, self.previous)
    }
}

/// Which way the price went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
    Same,
}

impl Direction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Same => "same",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction and magnitude of a day-over-day move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceMove {
    pub direction: Direction,
    /// Non-negative percentage, rounded to two decimal places.
    pub percentage: Decimal,
}

impl PriceMove {
    /// True when the move is large enough to alert on.
    #[must_use]
    pub fn reaches(&self, threshold: Decimal) -> bool {
        self.percentage >= threshold
    }
}

impl fmt::Display for PriceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shortest form, keeping one decimal on whole numbers: 7.0, 5.1, 9.52.
        let percentage = self.percentage.normalize();
        if percentage.scale() == 0 {
            write!(f, "{} by {percentage}.0%", self.direction)
        } else {
            write!(f, "{} by {percentage}%", self.direction)
        }
    }
}

/// Compute the move between two closes.
///
/// `percentage = |round((latest - previous) / ((latest + previous) / 2) * 100, 2)|`,
/// rounding midpoints to even.
#[must_use]
pub fn calculate_move(latest: Decimal, previous: Decimal) -> PriceMove {
    let difference = latest - previous;
    let average = (latest + previous) / dec!(2);

    let percentage = difference
        .checked_div(average)
        .map(|ratio| (ratio * dec!(100)).round_dp(2).abs())
        .unwrap_or(Decimal::ZERO);

    let direction = if difference.is_zero() {
        Direction::Same
    } else if difference.is_sign_negative() {
        Direction::Decrease
    } else {
        Direction::Increase
    };

    PriceMove {
        direction,
        percentage,
    }
}
