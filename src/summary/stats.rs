//! Stats aggregation for a session

use crate::{round1, OverallScore, PerformanceLevel, SessionData, Stats};
use std::collections::BTreeMap;

/// Response times are not measured; every report shows this value.
pub const AVG_RESPONSE_PLACEHOLDER: &str = "45s";

/// Aggregate a session into [`Stats`]. Deterministic, no side effects.
pub fn compute_stats(session: &SessionData) -> Stats {
    let total_questions = session.questions.len();
    let overall_score = if total_questions == 0 {
        OverallScore::NoQuestions
    } else {
        let sum: f64 = session.questions.iter().map(|q| q.score()).sum();
        OverallScore::from_mean(sum / total_questions as f64)
    };

    Stats {
        overall_score,
        performance_level: PerformanceLevel::from_score(overall_score.value()),
        total_questions,
        session_duration: format_duration(session.duration_seconds()),
        avg_response_time: AVG_RESPONSE_PLACEHOLDER.to_string(),
        category_scores: category_scores(session),
    }
}

/// Format seconds as "m:ss"; absent or zero yields "N/A"
pub fn format_duration(seconds: Option<u64>) -> String {
    match seconds {
        None | Some(0) => "N/A".to_string(),
        Some(s) => format!("{}:{:02}", s / 60, s % 60),
    }
}

fn category_scores(session: &SessionData) -> BTreeMap<String, f64> {
    let mut buckets: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for q in &session.questions {
        let entry = buckets.entry(q.category().to_string()).or_insert((0.0, 0));
        entry.0 += q.score();
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|(cat, (sum, n))| (cat, round1(sum / n as f64)))
        .collect()
}
