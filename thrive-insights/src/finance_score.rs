//! Financial health score: a 0-100 composite of savings cushion,
//! income coverage, and the direction of 30-day spending.

use chrono::{Duration, NaiveDate};
use thrive_core::{Account, Purchase};

/// Compute the 0-100 financial health score.
///
/// `income` is monthly income, 0 when unknown; `today` anchors the
/// 30-day spending window. Starts from a neutral 50 and moves by
/// banded bonuses and penalties, clamped to the scale.
pub fn calculate_financial_health_score(
    accounts: &[Account],
    purchases: &[Purchase],
    income: f64,
    today: NaiveDate,
) -> f64 {
    let total_balance: f64 = accounts.iter().map(|a| a.balance).sum();

    let window_start = today - Duration::days(30);
    let mut recent: Vec<&Purchase> = purchases
        .iter()
        .filter(|p| p.purchase_date >= window_start)
        .collect();
    let monthly_spending: f64 = recent.iter().map(|p| p.amount).sum();

    let mut score: f64 = 50.0;

    // Savings cushion: months of spending covered by balances.
    let savings_ratio = if monthly_spending > 0.0 {
        total_balance / monthly_spending
    } else {
        0.0
    };
    if savings_ratio > 6.0 {
        score += 20.0;
    } else if savings_ratio > 3.0 {
        score += 15.0;
    } else if savings_ratio > 1.0 {
        score += 10.0;
    } else if savings_ratio > 0.5 {
        score += 5.0;
    }

    // Income coverage. A month with income but no spending counts as
    // the best band; the ratio is never computed against zero.
    if income > 0.0 {
        if monthly_spending <= 0.0 {
            score += 20.0;
        } else {
            let ratio = income / monthly_spending;
            if ratio > 2.0 {
                score += 20.0;
            } else if ratio > 1.5 {
                score += 15.0;
            } else if ratio > 1.2 {
                score += 10.0;
            } else if ratio > 1.0 {
                score += 5.0;
            } else {
                score -= 10.0;
            }
        }
    }

    // Direction of spend across the window: compare chronological
    // halves once there is enough volume.
    if recent.len() >= 10 {
        recent.sort_by_key(|p| p.purchase_date);
        let half = recent.len() / 2;
        let first_half: f64 = recent[..half].iter().map(|p| p.amount).sum();
        let second_half: f64 = recent[half..].iter().map(|p| p.amount).sum();

        if second_half < first_half {
            score += 10.0;
        } else if second_half - first_half > first_half * 0.2 {
            score -= 10.0;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Qualitative band for a score
pub fn score_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Band-specific next steps shown alongside the score
pub fn score_advice(score: f64) -> Vec<&'static str> {
    if score >= 80.0 {
        vec![
            "Continue your excellent financial habits",
            "Consider increasing your investments",
            "Look into optimizing your tax strategy",
        ]
    } else if score >= 60.0 {
        vec![
            "Build up your emergency fund",
            "Look for ways to reduce unnecessary expenses",
            "Consider increasing your savings rate",
        ]
    } else if score >= 40.0 {
        vec![
            "Create a budget and stick to it",
            "Reduce non-essential spending",
            "Start building an emergency fund",
        ]
    } else {
        vec![
            "Create a detailed budget immediately",
            "Cut back on all non-essential spending",
            "Consider seeking financial counseling",
        ]
    }
}
