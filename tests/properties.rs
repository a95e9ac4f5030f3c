//! Property tests for aggregation, escaping and the recommendation rules.

use interview_report::reporter::html::{escape_html, question_block};
use interview_report::{
    compute_stats, format_duration, recommendations, EvaluationResult, OverallScore,
    PerformanceLevel, QuestionRecord, SessionData,
};
use proptest::prelude::*;

fn question(score: Option<f64>) -> QuestionRecord {
    QuestionRecord {
        question: "Q".into(),
        evaluation: score.map(|score| EvaluationResult {
            score,
            ..EvaluationResult::default()
        }),
        ..QuestionRecord::default()
    }
}

fn session_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(0u8..=100).prop_map(|o| o.map(|s| s as f64 / 10.0)), 0..20)
}

proptest! {
    #[test]
    fn total_questions_matches_input(scores in session_strategy()) {
        let session = SessionData {
            questions: scores.iter().map(|s| question(*s)).collect(),
            ..SessionData::default()
        };
        prop_assert_eq!(compute_stats(&session).total_questions, scores.len());
    }

    #[test]
    fn overall_score_is_rounded_mean(scores in session_strategy()) {
        let session = SessionData {
            questions: scores.iter().map(|s| question(*s)).collect(),
            ..SessionData::default()
        };
        let stats = compute_stats(&session);
        if scores.is_empty() {
            prop_assert_eq!(stats.overall_score, OverallScore::NoQuestions);
        } else {
            let sum: f64 = scores.iter().map(|s| s.unwrap_or(0.0)).sum();
            let mean = sum / scores.len() as f64;
            let value = stats.overall_score.value();
            prop_assert!((value - mean).abs() <= 0.05 + 1e-9);
            prop_assert_eq!(value, format!("{:.1}", value).parse::<f64>().unwrap());
        }
    }

    #[test]
    fn performance_level_matches_buckets(scores in session_strategy()) {
        let session = SessionData {
            questions: scores.iter().map(|s| question(*s)).collect(),
            ..SessionData::default()
        };
        let stats = compute_stats(&session);
        let score = stats.overall_score.value();
        let expected = if score < 6.0 {
            PerformanceLevel::Poor
        } else if score < 7.0 {
            PerformanceLevel::Average
        } else if score < 8.0 {
            PerformanceLevel::Good
        } else {
            PerformanceLevel::Excellent
        };
        prop_assert_eq!(stats.performance_level, expected);
    }

    #[test]
    fn duration_format_round_trips(seconds in 1u64..1_000_000) {
        let formatted = format_duration(Some(seconds));
        let (minutes, secs) = formatted.split_once(':').unwrap();
        prop_assert_eq!(secs.len(), 2);
        let total = minutes.parse::<u64>().unwrap() * 60 + secs.parse::<u64>().unwrap();
        prop_assert_eq!(total, seconds);
    }

    #[test]
    fn escaped_text_has_no_markup_characters(input in ".*") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn question_text_never_leaks_raw(text in "[a-z ]{0,10}", payload in prop::sample::select(vec!["<script>", "\" onmouseover=\"x", "<img src=x>", "'><b>"])) {
        let q = QuestionRecord {
            question: format!("{}{}", text, payload),
            user_answer: Some(format!("{}{}", payload, text)),
            ..QuestionRecord::default()
        };
        let block = question_block(0, &q);
        let rendered = format!("{}{}", block.header, block.body);
        prop_assert!(!rendered.contains(payload));
    }

    #[test]
    fn recommendations_follow_rule_order(score in 0u8..=100) {
        let score = score as f64 / 10.0;
        let recs = recommendations(score);
        let expected = if score < 7.0 { 3 } else if score < 8.0 { 2 } else { 1 };
        prop_assert_eq!(recs.len(), expected);
        prop_assert_eq!(recs.last().unwrap().title, "Practice Regularly");
    }
}
