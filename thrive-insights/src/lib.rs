//! thrive-insights: aggregation, scoring, and narrative insight
//! generation over categorized purchases and daily health check-ins.

pub mod finance_score;
pub mod health_score;
pub mod insights;
pub mod spending;

pub use finance_score::{calculate_financial_health_score, score_advice, score_label};
pub use health_score::{
    calculate_average_exercise, calculate_average_meals, calculate_average_sleep,
    calculate_health_score, calculate_health_trends, calculate_mood_score,
    detect_health_anomalies,
};
pub use insights::generate_health_finance_insights;
pub use spending::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_MIN_OCCURRENCES, DEFAULT_RECURRING_TIMEFRAME_DAYS,
    calculate_spending_by_category, calculate_spending_trends, detect_spending_anomalies,
    identify_recurring_expenses,
};
