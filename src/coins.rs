use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A quantity of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Decimal,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Decimal) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A multi-asset amount: an ordered set of (denomination, quantity) pairs.
///
/// Canonical form has denominations strictly ascending (therefore unique)
/// and no zero-quantity entries. Construction does not canonicalize; callers
/// that accept external input check [`Coins::is_valid`] before acting on it.
/// Arithmetic results are always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Canonical-form check: denominations strictly ascending (unique) and
    /// no zero quantities.
    pub fn is_valid(&self) -> bool {
        if self.0.iter().any(|c| c.amount.is_zero()) {
            return false;
        }
        self.0.windows(2).all(|w| w[0].denom < w[1].denom)
    }

    /// Non-empty and strictly positive in every denomination.
    pub fn is_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|c| c.amount > Decimal::ZERO)
    }

    /// No denomination is negative. Vacuously true when empty.
    pub fn is_non_negative(&self) -> bool {
        self.0.iter().all(|c| c.amount >= Decimal::ZERO)
    }

    /// Quantity of `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> Decimal {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Per-denomination sum. The result is canonical.
    pub fn add(&self, other: &Coins) -> Coins {
        self.merge(other, Decimal::ONE)
    }

    /// Per-denomination difference (`self - other`). Zero results are
    /// dropped; negative entries are kept so callers can detect overdraw
    /// with [`Coins::is_non_negative`].
    pub fn sub(&self, other: &Coins) -> Coins {
        self.merge(other, -Decimal::ONE)
    }

    fn merge(&self, other: &Coins, sign: Decimal) -> Coins {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for c in &self.0 {
            *totals.entry(c.denom.as_str()).or_default() += c.amount;
        }
        for c in &other.0 {
            *totals.entry(c.denom.as_str()).or_default() += sign * c.amount;
        }
        Coins(
            totals
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(denom, amount)| Coin::new(denom, amount))
                .collect(),
        )
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}
