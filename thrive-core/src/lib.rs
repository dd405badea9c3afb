//! thrive-core: data model, purchase categorizer, and time helpers
//! for the thrive insight pipeline.

pub mod categorizer;
pub mod finance;
pub mod health;
pub mod time;

pub use categorizer::categorize;
pub use finance::{
    Account, CategorizedPurchase, Geocode, Merchant, Purchase, SpendingByCategory,
    SpendingTrend, TransactionCategory,
};
pub use health::{HealthAnomaly, HealthLog, HealthTrendPoint, Mood, Severity, UserInsight};
pub use time::{TrendPeriod, bucket_key, parse_date, parse_timestamp};
