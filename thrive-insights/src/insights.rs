//! Cross-domain narrative insights: a weekly health recap joined with
//! health-adjacent spending, plus an always-non-empty recommendation
//! list.

use chrono::{DateTime, Utc};
use thrive_core::{CategorizedPurchase, HealthLog, TransactionCategory, UserInsight};

use crate::health_score::{
    calculate_average_exercise, calculate_average_sleep, calculate_health_score,
    calculate_mood_score,
};

/// Description substrings that mark a Food purchase as delivery
const DELIVERY_KEYWORDS: &[&str] = &["delivery", "doordash", "uber eats", "grubhub"];

/// Number of most-recent logs the weekly summary looks at
const RECENT_LOG_WINDOW: usize = 7;

/// Generate the weekly narrative insight from health logs and
/// categorized transactions. `now` is stamped into `week_of` as-is.
pub fn generate_health_finance_insights(
    health_logs: &[HealthLog],
    transactions: &[CategorizedPurchase],
    now: DateTime<Utc>,
) -> UserInsight {
    if health_logs.is_empty() {
        return UserInsight {
            user_id: String::new(),
            week_of: now,
            health_summary: "Not enough health data to generate insights.".to_string(),
            financial_summary: "Not enough financial data to generate insights.".to_string(),
            recommendations: vec![
                "Start logging your daily health to get personalized insights.".to_string(),
            ],
        };
    }

    // Most recent week of check-ins, newest first.
    let mut sorted: Vec<&HealthLog> = health_logs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    let recent: Vec<HealthLog> = sorted.into_iter().take(RECENT_LOG_WINDOW).cloned().collect();

    let health_score = calculate_health_score(&recent);
    let avg_sleep = calculate_average_sleep(&recent);
    let avg_exercise = calculate_average_exercise(&recent);
    let mood_score = calculate_mood_score(&recent);

    let mut health_summary = format!("Your health score is {health_score}/100. ");
    let mut recommendations: Vec<String> = Vec::new();

    if avg_sleep < 7.0 {
        health_summary.push_str(&format!(
            "You're averaging only {avg_sleep:.1} hours of sleep. "
        ));
        recommendations
            .push("Try to get 7-8 hours of sleep each night for better health.".to_string());
    } else {
        health_summary.push_str(&format!(
            "You're getting a healthy {avg_sleep:.1} hours of sleep on average. "
        ));
    }

    if avg_exercise < 20.0 {
        health_summary.push_str(&format!(
            "You're only exercising {avg_exercise:.1} minutes per day on average. "
        ));
        recommendations.push("Aim for at least 20-30 minutes of exercise daily.".to_string());
    } else {
        health_summary.push_str(&format!(
            "You're maintaining a good exercise routine with {avg_exercise:.1} minutes per day. "
        ));
    }

    if mood_score < 2.5 {
        health_summary.push_str("Your mood has been lower than optimal. ");
        recommendations.push(
            "Consider speaking with a mental health professional about your mood.".to_string(),
        );
    } else if mood_score >= 3.5 {
        health_summary.push_str("Your mood has been consistently positive. ");
    }

    // Direction across the window, from its endpoint check-ins.
    if recent.len() >= 3 {
        let newest = calculate_health_score(std::slice::from_ref(&recent[0]));
        let oldest = calculate_health_score(std::slice::from_ref(&recent[recent.len() - 1]));
        let delta = i64::from(newest) - i64::from(oldest);

        if delta >= 10 {
            health_summary.push_str("Your daily health score has been trending up this week. ");
        } else if delta <= -10 {
            health_summary.push_str("Your daily health score has been slipping this week. ");
            recommendations.push(
                "Revisit the habits that were working for you earlier in the week.".to_string(),
            );
        }
    }

    if recent.len() >= 5 {
        append_mood_correlations(&recent, &mut health_summary, &mut recommendations);
    }

    let user_id = health_logs[0].user_id.clone();

    if transactions.is_empty() {
        if recommendations.is_empty() {
            recommendations = default_recommendations();
        }
        return UserInsight {
            user_id,
            week_of: now,
            health_summary,
            financial_summary: "Not enough financial data to generate insights.".to_string(),
            recommendations,
        };
    }

    let mut financial_summary = String::new();

    let (delivery_count, delivery_total) = sum_matching(transactions, |t| {
        t.category == TransactionCategory::Food
            && contains_any(t.description(), DELIVERY_KEYWORDS)
    });
    let (healthcare_count, healthcare_total) =
        sum_matching(transactions, |t| t.category == TransactionCategory::Health);
    let (fitness_count, fitness_total) = sum_matching(transactions, |t| {
        t.category == TransactionCategory::Health
            || contains_any(t.description(), &["gym", "fitness"])
    });

    if delivery_count > 0 {
        financial_summary.push_str(&format!(
            "You've spent ${delivery_total:.2} on food delivery recently. "
        ));
        if avg_exercise < 20.0 && delivery_total > 50.0 {
            recommendations.push(
                "Consider cooking at home more often and using the savings for fitness activities."
                    .to_string(),
            );
        }
    }

    if healthcare_count > 0 {
        financial_summary.push_str(&format!(
            "You've spent ${healthcare_total:.2} on healthcare. "
        ));
    }

    if fitness_count > 0 {
        financial_summary.push_str(&format!(
            "You've invested ${fitness_total:.2} in fitness. "
        ));
        if avg_exercise < 20.0 && fitness_total > 20.0 {
            recommendations.push(
                "Make the most of your fitness investments by using them regularly.".to_string(),
            );
        }
    }

    if recommendations.is_empty() {
        recommendations = default_recommendations();
    }

    UserInsight {
        user_id,
        week_of: now,
        health_summary,
        financial_summary,
        recommendations,
    }
}

/// Append clauses for mood-vs-sleep and mood-vs-exercise splits when
/// the gap between the groups is meaningful.
fn append_mood_correlations(
    recent: &[HealthLog],
    summary: &mut String,
    recommendations: &mut Vec<String>,
) {
    let (well_slept, short_slept): (Vec<&HealthLog>, Vec<&HealthLog>) =
        recent.iter().partition(|l| l.sleep_hours >= 7.0);
    if let Some(delta) = mood_delta(&well_slept, &short_slept) {
        if delta > 0.5 {
            summary.push_str(
                "Your mood is noticeably better after nights with 7+ hours of sleep. ",
            );
            recommendations
                .push("Keep a consistent bedtime to protect your mood.".to_string());
        }
    }

    let (active_days, rest_days): (Vec<&HealthLog>, Vec<&HealthLog>) =
        recent.iter().partition(|l| l.exercise_minutes >= 20);
    if let Some(delta) = mood_delta(&active_days, &rest_days) {
        if delta > 0.5 {
            summary.push_str("You report better moods on days you exercise. ");
            recommendations.push(
                "Schedule short workouts on busy days to keep your mood steady.".to_string(),
            );
        }
    }
}

/// Mean mood difference between two groups; None if either is empty
fn mood_delta(high: &[&HealthLog], low: &[&HealthLog]) -> Option<f64> {
    if high.is_empty() || low.is_empty() {
        return None;
    }
    let mean =
        |group: &[&HealthLog]| group.iter().map(|l| l.mood.score()).sum::<f64>() / group.len() as f64;
    Some(mean(high) - mean(low))
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

fn sum_matching<F>(transactions: &[CategorizedPurchase], pred: F) -> (usize, f64)
where
    F: Fn(&CategorizedPurchase) -> bool,
{
    let mut count = 0;
    let mut total = 0.0;
    for t in transactions.iter().filter(|t| pred(t)) {
        count += 1;
        total += t.amount();
    }
    (count, total)
}

fn default_recommendations() -> Vec<String> {
    vec![
        "Continue maintaining your healthy lifestyle.".to_string(),
        "Consider tracking your water intake for better hydration.".to_string(),
    ]
}
