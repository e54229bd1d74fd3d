//! # Monetary Amounts
//!
//! Penalty and coverage figures are whole currency units (`u64`), never
//! floats. [`Money`] renders them with a currency symbol and thousands
//! separators, e.g. `$1,271,078` or `€10,000,000`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency of a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Currency symbol used in formatted amounts.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

/// A whole-unit monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: u64,
    /// Currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Amount in US dollars.
    pub const fn usd(amount: u64) -> Self {
        Self {
            amount,
            currency: Currency::Usd,
        }
    }

    /// Amount in euros.
    pub const fn eur(amount: u64) -> Self {
        Self {
            amount,
            currency: Currency::Eur,
        }
    }

    /// Amount in pounds sterling.
    pub const fn gbp(amount: u64) -> Self {
        Self {
            amount,
            currency: Currency::Gbp,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), group_thousands(self.amount))
    }
}

/// Render an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
