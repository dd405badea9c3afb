//! Health scoring: averages over daily check-ins, a 0-100 composite
//! score, per-log anomaly detection, and score trends over time.

use std::collections::BTreeMap;

use thrive_core::{
    HealthAnomaly, HealthLog, HealthTrendPoint, Mood, Severity, TrendPeriod, bucket_key,
};

/// Average mood value across logs (Happy=4 .. Anxious=1). 0 when empty.
pub fn calculate_mood_score(logs: &[HealthLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| l.mood.score()).sum::<f64>() / logs.len() as f64
}

/// Average nightly sleep hours. 0 when empty.
pub fn calculate_average_sleep(logs: &[HealthLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| l.sleep_hours).sum::<f64>() / logs.len() as f64
}

/// Average meals per day. 0 when empty.
pub fn calculate_average_meals(logs: &[HealthLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| f64::from(l.meals)).sum::<f64>() / logs.len() as f64
}

/// Average exercise minutes per day. 0 when empty.
pub fn calculate_average_exercise(logs: &[HealthLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| f64::from(l.exercise_minutes)).sum::<f64>() / logs.len() as f64
}

/// Composite 0-100 health score: mood 40%, sleep 30%, meals 15%,
/// exercise 15%. Sleep and exercise cap at their 8h/30min targets.
/// The meal component has no cap at its 3-meal target, so heavy
/// eating days push the score harder than the capped components can;
/// the final value still clamps at 100. Empty input scores 0.
pub fn calculate_health_score(logs: &[HealthLog]) -> u32 {
    if logs.is_empty() {
        return 0;
    }

    let mood_score = calculate_mood_score(logs) / 4.0;
    let sleep_score = (calculate_average_sleep(logs) / 8.0).min(1.0);
    let meal_score = calculate_average_meals(logs) / 3.0;
    let exercise_score = (calculate_average_exercise(logs) / 30.0).min(1.0);

    let weighted =
        mood_score * 0.4 + sleep_score * 0.3 + meal_score * 0.15 + exercise_score * 0.15;

    ((weighted * 100.0).round() as u32).min(100)
}

/// Scan logs for readings far from the user's own averages.
/// Needs at least 3 logs; a single log can raise several anomalies.
/// Output follows ascending log date.
pub fn detect_health_anomalies(logs: &[HealthLog]) -> Vec<HealthAnomaly> {
    if logs.len() < 3 {
        return Vec::new();
    }

    let mut sorted: Vec<&HealthLog> = logs.iter().collect();
    sorted.sort_by_key(|l| l.date);

    let avg_sleep = calculate_average_sleep(logs);
    let avg_meals = calculate_average_meals(logs);
    let avg_exercise = calculate_average_exercise(logs);

    let mut anomalies = Vec::new();

    for log in sorted {
        if log.sleep_hours < avg_sleep * 0.7 {
            anomalies.push(HealthAnomaly {
                date: log.date,
                description: format!(
                    "Significantly less sleep than usual ({:.1} hours vs. avg {:.1})",
                    log.sleep_hours, avg_sleep
                ),
                severity: if log.sleep_hours < avg_sleep * 0.5 {
                    Severity::High
                } else {
                    Severity::Medium
                },
            });
        }

        if f64::from(log.meals) < avg_meals * 0.7 {
            anomalies.push(HealthAnomaly {
                date: log.date,
                description: format!(
                    "Fewer meals than usual ({} vs. avg {:.1})",
                    log.meals, avg_meals
                ),
                severity: if f64::from(log.meals) < avg_meals * 0.5 {
                    Severity::High
                } else {
                    Severity::Medium
                },
            });
        }

        if f64::from(log.exercise_minutes) < avg_exercise * 0.5 && avg_exercise > 10.0 {
            anomalies.push(HealthAnomaly {
                date: log.date,
                description: format!(
                    "Less exercise than usual ({} mins vs. avg {:.1})",
                    log.exercise_minutes, avg_exercise
                ),
                severity: Severity::Medium,
            });
        }

        if log.mood.is_negative() {
            anomalies.push(HealthAnomaly {
                date: log.date,
                description: format!("Mood reported as {:?}", log.mood),
                severity: if log.mood == Mood::Anxious {
                    Severity::High
                } else {
                    Severity::Medium
                },
            });
        }

        if !log.symptoms.trim().is_empty() {
            anomalies.push(HealthAnomaly {
                date: log.date,
                description: format!("Reported symptoms: {}", log.symptoms),
                severity: Severity::Medium,
            });
        }
    }

    anomalies
}

/// Health score per time bucket, ascending by bucket key.
pub fn calculate_health_trends(
    logs: &[HealthLog],
    period: TrendPeriod,
) -> Vec<HealthTrendPoint> {
    let mut buckets: BTreeMap<String, Vec<HealthLog>> = BTreeMap::new();
    for log in logs {
        buckets
            .entry(bucket_key(log.date.date_naive(), period))
            .or_default()
            .push(log.clone());
    }

    buckets
        .into_iter()
        .map(|(date, group)| HealthTrendPoint {
            date,
            score: calculate_health_score(&group),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap()
    }

    fn log(day: u32, mood: Mood, sleep: f64, meals: u32, exercise: u32) -> HealthLog {
        HealthLog::new("u-1", at(day), mood, sleep, meals, exercise)
    }

    #[test]
    fn test_averages_zero_for_empty_input() {
        assert_eq!(calculate_mood_score(&[]), 0.0);
        assert_eq!(calculate_average_sleep(&[]), 0.0);
        assert_eq!(calculate_average_meals(&[]), 0.0);
        assert_eq!(calculate_average_exercise(&[]), 0.0);
        assert_eq!(calculate_health_score(&[]), 0);
    }

    #[test]
    fn test_perfect_day_scores_100() {
        let logs = vec![log(1, Mood::Happy, 8.0, 3, 30)];
        assert_eq!(calculate_health_score(&logs), 100);
    }

    #[test]
    fn test_sleep_and_exercise_cap_at_target() {
        // Oversleeping and marathon workouts score no higher than the
        // 8h/30min targets.
        let logs = vec![log(1, Mood::Happy, 12.0, 3, 180)];
        assert_eq!(calculate_health_score(&logs), 100);
    }

    #[test]
    fn test_meal_component_is_uncapped_but_score_clamps() {
        // Six meals a day doubles the meal component (0.30 instead of
        // 0.15) while everything else is at target, so the raw sum
        // would exceed the scale; the result clamps at 100.
        let logs = vec![log(1, Mood::Happy, 8.0, 6, 30)];
        assert_eq!(calculate_health_score(&logs), 100);

        // The extra meals also paper over a weak mood: Anxious alone
        // would lose 30 points, heavy meals claw 15 of them back.
        let anxious_heavy = vec![log(1, Mood::Anxious, 8.0, 6, 30)];
        let anxious_normal = vec![log(1, Mood::Anxious, 8.0, 3, 30)];
        assert_eq!(calculate_health_score(&anxious_normal), 70);
        assert_eq!(calculate_health_score(&anxious_heavy), 85);
    }

    #[test]
    fn test_weighted_mix() {
        // mood 3/4 * 0.4 + sleep 6/8 * 0.3 + meals 2/3 * 0.15 +
        // exercise 15/30 * 0.15 = 0.3 + 0.225 + 0.1 + 0.075 = 0.7
        let logs = vec![log(1, Mood::Neutral, 6.0, 2, 15)];
        assert_eq!(calculate_health_score(&logs), 70);
    }

    #[test]
    fn test_anomalies_require_three_logs() {
        let logs = vec![
            log(1, Mood::Sad, 2.0, 0, 0).with_symptoms("fever"),
            log(2, Mood::Anxious, 2.0, 0, 0),
        ];
        assert!(detect_health_anomalies(&logs).is_empty());
    }

    #[test]
    fn test_short_sleep_flagged_with_severity() {
        let logs = vec![
            log(1, Mood::Neutral, 8.0, 3, 0),
            log(2, Mood::Neutral, 8.0, 3, 0),
            log(3, Mood::Neutral, 8.0, 3, 0),
            log(4, Mood::Neutral, 3.0, 3, 0),
        ];
        // avg sleep 6.75; 3.0 < 0.5 * 6.75 so severity is High.
        let anomalies = detect_health_anomalies(&logs);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::High);
        assert!(anomalies[0].description.contains("less sleep"));
    }

    #[test]
    fn test_exercise_dip_ignored_for_sedentary_users() {
        // avg exercise 7.5 is under the 10-minute floor, so a zero
        // day is not an anomaly.
        let logs = vec![
            log(1, Mood::Neutral, 8.0, 3, 10),
            log(2, Mood::Neutral, 8.0, 3, 10),
            log(3, Mood::Neutral, 8.0, 3, 10),
            log(4, Mood::Neutral, 8.0, 3, 0),
        ];
        assert!(detect_health_anomalies(&logs).is_empty());
    }

    #[test]
    fn test_one_log_can_raise_multiple_anomalies() {
        let logs = vec![
            log(1, Mood::Happy, 8.0, 3, 60),
            log(2, Mood::Happy, 8.0, 3, 60),
            log(3, Mood::Anxious, 3.0, 1, 0).with_symptoms("migraine"),
        ];
        let anomalies = detect_health_anomalies(&logs);
        // Sleep, meals, exercise, mood, and symptoms all fire on the
        // last log.
        assert_eq!(anomalies.len(), 5);
        assert!(anomalies.iter().all(|a| a.date == at(3)));
        assert!(
            anomalies
                .iter()
                .any(|a| a.severity == Severity::High && a.description.contains("Anxious"))
        );
    }

    #[test]
    fn test_anomalies_in_date_order() {
        let logs = vec![
            log(5, Mood::Sad, 8.0, 3, 0),
            log(1, Mood::Anxious, 8.0, 3, 0),
            log(3, Mood::Neutral, 8.0, 3, 0),
        ];
        let anomalies = detect_health_anomalies(&logs);
        assert_eq!(anomalies.len(), 2);
        assert_eq!(anomalies[0].date, at(1));
        assert_eq!(anomalies[1].date, at(5));
    }

    #[test]
    fn test_health_trends_bucket_and_sort() {
        let logs = vec![
            log(20, Mood::Happy, 8.0, 3, 30),
            log(1, Mood::Sad, 4.0, 1, 0),
            log(2, Mood::Sad, 4.0, 1, 0),
        ];
        let trends = calculate_health_trends(&logs, TrendPeriod::Daily);
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].date, "2024-03-01");
        assert_eq!(trends[2].date, "2024-03-20");
        assert_eq!(trends[2].score, 100);
        assert!(trends[0].score < trends[2].score);

        let monthly = calculate_health_trends(&logs, TrendPeriod::Monthly);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].date, "2024-03");
    }
}
