//! Fixture-driven regression for the whole pipeline: categorize raw
//! purchases, aggregate and score them, then generate the weekly
//! insight alongside the health check-ins.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use thrive_core::{
    Account, CategorizedPurchase, HealthLog, Merchant, Purchase, TransactionCategory,
    TrendPeriod, categorize,
};
use thrive_insights::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_MIN_OCCURRENCES, DEFAULT_RECURRING_TIMEFRAME_DAYS,
    calculate_financial_health_score, calculate_health_score, calculate_spending_by_category,
    calculate_spending_trends, detect_health_anomalies, detect_spending_anomalies,
    generate_health_finance_insights, identify_recurring_expenses, score_label,
};

fn load_fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let data = std::fs::read_to_string(&path).expect("fixture should be readable");
    serde_json::from_str(&data).expect("fixture should parse")
}

fn categorized_purchases() -> Vec<CategorizedPurchase> {
    let purchases: Vec<Purchase> = load_fixture("purchases.json");
    let merchants: Vec<Merchant> = load_fixture("merchants.json");
    let by_id: HashMap<&str, &Merchant> =
        merchants.iter().map(|m| (m.id.as_str(), m)).collect();

    purchases
        .iter()
        .map(|p| categorize(p, by_id.get(p.merchant_id.as_str()).copied()))
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
}

#[test]
fn test_fixture_purchases_all_categorized() {
    let categorized = categorized_purchases();
    assert_eq!(categorized.len(), 16);
    // The fixture never needs the Other fallback.
    assert!(
        categorized
            .iter()
            .all(|p| p.category != TransactionCategory::Other)
    );

    let by_id: HashMap<&str, TransactionCategory> = categorized
        .iter()
        .map(|p| (p.purchase.id.as_str(), p.category))
        .collect();
    assert_eq!(by_id["p-coffee1"], TransactionCategory::Food);
    assert_eq!(by_id["p-feast"], TransactionCategory::Food);
    assert_eq!(by_id["p-netflix1"], TransactionCategory::Entertainment);
    assert_eq!(by_id["p-ride1"], TransactionCategory::Transportation);
    assert_eq!(by_id["p-gym1"], TransactionCategory::Health);
    assert_eq!(by_id["p-pharm1"], TransactionCategory::Health);
    assert_eq!(by_id["p-dept1"], TransactionCategory::Shopping);
    assert_eq!(by_id["p-util1"], TransactionCategory::Utilities);
}

#[test]
fn test_spending_breakdown_from_fixture() {
    let rows = calculate_spending_by_category(&categorized_purchases());
    assert_eq!(rows.len(), 12);

    // Food leads the board.
    assert_eq!(rows[0].category, TransactionCategory::Food);
    assert!((rows[0].amount - 358.15).abs() < 1e-9);

    let total_pct: f64 = rows.iter().map(|r| r.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-6);

    // Categories with no purchases still show up, zeroed.
    let travel = rows
        .iter()
        .find(|r| r.category == TransactionCategory::Travel)
        .unwrap();
    assert_eq!(travel.amount, 0.0);
    assert_eq!(travel.percentage, 0.0);
}

#[test]
fn test_monthly_trends_from_fixture() {
    let purchases: Vec<Purchase> = load_fixture("purchases.json");
    let trends = calculate_spending_trends(&purchases, TrendPeriod::Monthly);

    let dates: Vec<&str> = trends.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, ["2024-01", "2024-02", "2024-03"]);
    assert!((trends[0].amount - 15.99).abs() < 1e-9);
    assert!((trends[1].amount - 245.77).abs() < 1e-9);
    assert!((trends[2].amount - 431.93).abs() < 1e-9);
}

#[test]
fn test_delivery_feast_is_the_only_spending_anomaly() {
    let anomalies =
        detect_spending_anomalies(&categorized_purchases(), DEFAULT_ANOMALY_THRESHOLD);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].purchase.id, "p-feast");
}

#[test]
fn test_subscriptions_detected_as_recurring() {
    let recurring = identify_recurring_expenses(
        &categorized_purchases(),
        DEFAULT_RECURRING_TIMEFRAME_DAYS,
        DEFAULT_MIN_OCCURRENCES,
    );

    let ids: Vec<&str> = recurring.iter().map(|p| p.purchase.id.as_str()).collect();
    // Netflix three months running, gym two; members oldest first.
    assert_eq!(
        ids,
        ["p-netflix1", "p-netflix2", "p-netflix3", "p-gym1", "p-gym2"]
    );
}

#[test]
fn test_financial_health_score_from_fixture() {
    let purchases: Vec<Purchase> = load_fixture("purchases.json");
    let accounts: Vec<Account> = load_fixture("accounts.json");

    // 431.93 spent in the 30-day window against 11,700 in balances
    // and 4,200 of income: both ratio bonuses max out, and nine
    // window purchases are too few for the trend factor.
    let score = calculate_financial_health_score(&accounts, &purchases, 4200.0, today());
    assert_eq!(score, 90.0);
    assert_eq!(score_label(score), "Excellent");
}

#[test]
fn test_health_score_and_anomalies_from_fixture() {
    let logs: Vec<HealthLog> = load_fixture("health_logs.json");
    assert_eq!(calculate_health_score(&logs), 77);

    let anomalies = detect_health_anomalies(&logs);
    // Two zero-exercise days, one Sad day, one Anxious day, one
    // symptom report.
    assert_eq!(anomalies.len(), 5);
    assert_eq!(
        anomalies
            .iter()
            .filter(|a| a.severity == thrive_core::Severity::High)
            .count(),
        1
    );
}

#[test]
fn test_weekly_insight_from_fixture() {
    let logs: Vec<HealthLog> = load_fixture("health_logs.json");
    let transactions = categorized_purchases();
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();

    let insight = generate_health_finance_insights(&logs, &transactions, now);

    assert_eq!(insight.user_id, "u-1");
    assert_eq!(insight.week_of, now);
    assert!(insight.health_summary.starts_with("Your health score is 77/100."));
    assert!(insight.health_summary.contains("averaging only"));
    assert!(insight.health_summary.contains("7+ hours of sleep"));

    assert!(
        insight
            .financial_summary
            .contains("You've spent $260.00 on food delivery recently.")
    );
    assert!(insight.financial_summary.contains("You've spent $82.78 on healthcare."));
    assert!(insight.financial_summary.contains("You've invested $82.78 in fitness."));

    assert_eq!(insight.recommendations.len(), 6);
    assert!(
        insight
            .recommendations
            .iter()
            .any(|r| r.contains("cooking at home"))
    );
}

#[test]
fn test_empty_world_yields_fixed_insight() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let insight = generate_health_finance_insights(&[], &[], now);
    assert_eq!(
        insight.health_summary,
        "Not enough health data to generate insights."
    );
    assert_eq!(insight.recommendations.len(), 1);
}
