//! Banking data model: purchases, merchants, accounts, and the closed
//! category set every purchase resolves into.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spending categories assigned deterministically to every purchase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionCategory {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "other")]
    Other,
}

impl TransactionCategory {
    /// Every category, in declaration order. Keyword tables and
    /// aggregations iterate in this order, so it must stay fixed.
    pub const ALL: [TransactionCategory; 12] = [
        TransactionCategory::Food,
        TransactionCategory::Shopping,
        TransactionCategory::Entertainment,
        TransactionCategory::Travel,
        TransactionCategory::Transportation,
        TransactionCategory::Utilities,
        TransactionCategory::Health,
        TransactionCategory::Education,
        TransactionCategory::Personal,
        TransactionCategory::Home,
        TransactionCategory::Income,
        TransactionCategory::Other,
    ];

    /// Display name for dashboards and narrative text
    pub fn label(&self) -> &'static str {
        match self {
            TransactionCategory::Food => "Food & Dining",
            TransactionCategory::Shopping => "Shopping",
            TransactionCategory::Entertainment => "Entertainment",
            TransactionCategory::Travel => "Travel",
            TransactionCategory::Transportation => "Transportation",
            TransactionCategory::Utilities => "Utilities",
            TransactionCategory::Health => "Health & Medical",
            TransactionCategory::Education => "Education",
            TransactionCategory::Personal => "Personal Care",
            TransactionCategory::Home => "Home",
            TransactionCategory::Income => "Income",
            TransactionCategory::Other => "Other",
        }
    }
}

/// A purchase as handed over by the banking collaborator.
/// Immutable once fetched; the pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: String,
    pub merchant_id: String,
    #[serde(default)]
    pub payer_id: String,
    /// Date of the purchase (YYYY-MM-DD)
    pub purchase_date: NaiveDate,
    /// Non-negative amount in USD
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub description: String,
}

impl Purchase {
    /// Create a new Purchase with empty free-text fields
    pub fn new(
        id: impl Into<String>,
        merchant_id: impl Into<String>,
        purchase_date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            merchant_id: merchant_id.into(),
            payer_id: String::new(),
            purchase_date,
            amount,
            status: String::new(),
            medium: String::new(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Merchant reference data. `category` is free text controlled by the
/// upstream sandbox, so absent or unexpected values must never break
/// categorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Merchant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub geocode: Option<Geocode>,
}

impl Merchant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            address: String::new(),
            geocode: None,
        }
    }
}

/// Merchant location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Geocode {
    pub lat: f64,
    pub lng: f64,
}

/// A bank account snapshot; only `balance` feeds the health score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    #[serde(rename = "type", default)]
    pub account_type: String,
    #[serde(default)]
    pub nickname: String,
    pub balance: f64,
}

impl Account {
    pub fn new(id: impl Into<String>, balance: f64) -> Self {
        Self {
            id: id.into(),
            account_type: String::new(),
            nickname: String::new(),
            balance,
        }
    }
}

/// A purchase enriched with its resolved category and merchant name.
/// Recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizedPurchase {
    #[serde(flatten)]
    pub purchase: Purchase,
    pub category: TransactionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl CategorizedPurchase {
    pub fn amount(&self) -> f64 {
        self.purchase.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.purchase.purchase_date
    }

    pub fn merchant_id(&self) -> &str {
        &self.purchase.merchant_id
    }

    pub fn description(&self) -> &str {
        &self.purchase.description
    }
}

/// Total and share of spending for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingByCategory {
    pub category: TransactionCategory,
    pub amount: f64,
    /// Share of the grand total, 0-100. 0 when there is no spending.
    pub percentage: f64,
}

/// Spending summed into one time bucket (see `time::bucket_key`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingTrend {
    pub date: String,
    pub amount: f64,
}
