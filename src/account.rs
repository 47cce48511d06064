use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// A bank account: an account number and a balance.
///
/// Immutable once constructed — the storage backends hand out shared
/// references and never need to change a stored account. The account
/// number is an opaque, orderable string; the benchmark uses zero-padded
/// 10-character numbers, but nothing here depends on the width.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(rename = "account")]
    number: String,
    #[serde(default, deserialize_with = "deserialize_balance_4dp")]
    balance: Decimal,
}

impl Account {
    /// Creates an account with a zero balance.
    pub fn new(number: impl Into<String>) -> Self {
        Self::with_balance(number, Decimal::ZERO)
    }

    pub fn with_balance(number: impl Into<String>, balance: Decimal) -> Self {
        Self {
            number: number.into(),
            balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

/// An empty balance field means a freshly opened account, i.e. zero.
fn deserialize_balance_4dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(|opt_dec| {
        opt_dec
            .map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero))
            .unwrap_or(Decimal::ZERO)
    })
}
