//! Domain models for Tally

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether a transaction moves money out (expense) or in (income)
///
/// Stored in the `Type` column as `Expense` / `Income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Exact match on the stored `Type` text (`Expense` / `Income`)
    ///
    /// Stricter than `FromStr`, which also accepts user input in any case.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "Expense" => Some(Self::Expense),
            "Income" => Some(Self::Income),
            _ => None,
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction type: {} (expected Expense or Income)", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar month bucket (year + month), displayed as `YYYY-MM`
///
/// Ordering is chronological, so a `BTreeMap<Month, _>` iterates oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Build a month from its parts, returning None if `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month (December rolls over into January)
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| format!("Invalid month: {} (use YYYY-MM)", s))
    }
}

impl TryFrom<String> for Month {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    /// Always non-negative; direction comes from `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: Option<String>,
}

impl Transaction {
    /// Month bucket of this transaction, derived from `date` on every call
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// A transaction to be inserted, or the full replacement record for an update
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub kind: TransactionType,
    pub description: Option<String>,
}

impl NewTransaction {
    /// Check the record before it reaches storage
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidData(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }
        if self.amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "amount must not be negative, got {}",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData("category is required".to_string()));
        }
        Ok(())
    }
}

/// Sum of expenses for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: f64,
}

/// Sum of expenses for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}
