//! Interview Report: results summary rendering for practice-interview sessions
//!
//! This library aggregates per-question evaluation scores into session-level
//! statistics and renders them as HTML sections, console output, JSON, text,
//! markdown and PDF reports.

pub mod config;
pub mod error;
mod lenient;
pub mod reporter;
pub mod session;
pub mod summary;
pub mod view;

pub use error::{ReportError, SessionError};
pub use summary::{compute_stats, format_duration, recommendations, Recommendation};
pub use view::{toggle_question, Document, PageDocument, RenderedView, ResultsView};

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Category assigned to questions that carry none
pub const DEFAULT_CATEGORY: &str = "general";

/// A completed practice-interview session, as produced by the evaluation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// Questions in the order they were asked
    pub questions: Vec<QuestionRecord>,
    /// Total session length in seconds
    #[serde(default, deserialize_with = "lenient::seconds")]
    pub duration: Option<u64>,
    /// Identifier assigned by the interview host
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub session_id: Option<String>,
    /// Session start (epoch seconds)
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub start_time: Option<f64>,
    /// Session end (epoch seconds)
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub end_time: Option<f64>,
}

impl SessionData {
    /// Session length in whole seconds.
    ///
    /// Prefers the explicit `duration`; otherwise falls back to
    /// `end_time - start_time` when both timestamps are present.
    pub fn duration_seconds(&self) -> Option<u64> {
        if self.duration.is_some() {
            return self.duration;
        }
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end >= start => Some((end - start).floor() as u64),
            _ => None,
        }
    }
}

/// One asked question with the candidate's answer and its evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question text as it was asked
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: String,
    /// Candidate's transcribed answer
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub user_answer: Option<String>,
    /// Evaluation engine output (absent when the question was not scored)
    #[serde(default, deserialize_with = "lenient::optional_object")]
    pub evaluation: Option<EvaluationResult>,
    /// Topic category (e.g. "technical", "behavioral")
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub category: Option<String>,
    /// Reference answer supplied with the question bank
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub ideal_answer: Option<String>,
}

impl QuestionRecord {
    /// Evaluation score, or 0 when the question was not evaluated
    pub fn score(&self) -> f64 {
        self.evaluation.as_ref().map_or(0.0, |e| e.score)
    }

    /// The user's answer, treating an empty string as no answer
    pub fn answer(&self) -> Option<&str> {
        self.user_answer.as_deref().filter(|a| !a.is_empty())
    }

    /// Category name, falling back to [`DEFAULT_CATEGORY`]
    pub fn category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Reference answer: the evaluation's copy wins over the question bank's
    pub fn model_answer(&self) -> Option<&str> {
        self.evaluation
            .as_ref()
            .and_then(|e| e.ideal_answer.as_deref())
            .or(self.ideal_answer.as_deref())
            .filter(|a| !a.is_empty())
    }
}

/// Per-question evaluation produced by the external scoring engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall question score (0-10)
    #[serde(default, deserialize_with = "lenient::score")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub keyword_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub sentiment_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub completeness_score: Option<f64>,
    /// Expected keywords found in the answer
    #[serde(default, deserialize_with = "lenient::strings")]
    pub matched_keywords: Vec<String>,
    /// Expected keywords the answer did not cover
    #[serde(default, deserialize_with = "lenient::strings")]
    pub missing_keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub ideal_answer: Option<String>,
}

/// Session-wide mean score, rounded to one decimal.
///
/// A session without questions has no mean; it displays and serializes as
/// the integer `0` rather than `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverallScore {
    NoQuestions,
    Mean(f64),
}

impl OverallScore {
    /// Build from a raw mean, rounding to one decimal place
    pub fn from_mean(mean: f64) -> Self {
        OverallScore::Mean(round1(mean))
    }

    /// Numeric value used for threshold comparisons
    pub fn value(&self) -> f64 {
        match self {
            OverallScore::NoQuestions => 0.0,
            OverallScore::Mean(v) => *v,
        }
    }
}

impl std::fmt::Display for OverallScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallScore::NoQuestions => write!(f, "0"),
            OverallScore::Mean(v) => write!(f, "{:.1}", v),
        }
    }
}

impl Serialize for OverallScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OverallScore::NoQuestions => serializer.serialize_u8(0),
            OverallScore::Mean(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Performance tier derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

impl PerformanceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            PerformanceLevel::Excellent
        } else if score >= 7.0 {
            PerformanceLevel::Good
        } else if score >= 6.0 {
            PerformanceLevel::Average
        } else {
            PerformanceLevel::Poor
        }
    }

    /// Lower-cased name used as a style-class suffix
    pub fn css_suffix(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "poor",
            PerformanceLevel::Average => "average",
            PerformanceLevel::Good => "good",
            PerformanceLevel::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceLevel::Poor => write!(f, "Poor"),
            PerformanceLevel::Average => write!(f, "Average"),
            PerformanceLevel::Good => write!(f, "Good"),
            PerformanceLevel::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Aggregated session statistics for one render pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub overall_score: OverallScore,
    pub performance_level: PerformanceLevel,
    pub total_questions: usize,
    /// "m:ss" or "N/A"
    pub session_duration: String,
    /// Placeholder; response times are not measured
    pub avg_response_time: String,
    /// Mean score per question category, one decimal
    pub category_scores: BTreeMap<String, f64>,
}

/// Round to one decimal place from the exact stored value.
///
/// Values stored just below a `.x5` boundary (6.05 is 6.0499...) round down.
/// Exact ties (`.25`, `.75`) round away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_display() {
        assert_eq!(OverallScore::NoQuestions.to_string(), "0");
        assert_eq!(OverallScore::from_mean(7.0).to_string(), "7.0");
        assert_eq!(OverallScore::from_mean(6.66).to_string(), "6.7");
    }

    #[test]
    fn test_overall_score_serializes_zero_as_integer() {
        let json = serde_json::to_string(&OverallScore::NoQuestions).unwrap();
        assert_eq!(json, "0");
        let json = serde_json::to_string(&OverallScore::from_mean(7.25)).unwrap();
        assert_eq!(json, "7.3");
    }

    #[test]
    fn test_round1_uses_stored_value() {
        assert_eq!(round1(6.05), 6.0);
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(7.75), 7.8);
        assert_eq!(round1(8.349), 8.3);
        assert_eq!(round1(5.0 / 3.0), 1.7);
        assert_eq!(OverallScore::from_mean(6.05).to_string(), "6.0");
    }

    #[test]
    fn test_performance_level_boundaries() {
        assert_eq!(PerformanceLevel::from_score(5.9), PerformanceLevel::Poor);
        assert_eq!(PerformanceLevel::from_score(6.0), PerformanceLevel::Average);
        assert_eq!(PerformanceLevel::from_score(6.9), PerformanceLevel::Average);
        assert_eq!(PerformanceLevel::from_score(7.0), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_score(7.9), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_score(8.0), PerformanceLevel::Excellent);
        assert_eq!(PerformanceLevel::from_score(10.0), PerformanceLevel::Excellent);
    }

    #[test]
    fn test_duration_from_timestamps() {
        let session = SessionData {
            start_time: Some(1_000.0),
            end_time: Some(1_125.7),
            ..SessionData::default()
        };
        assert_eq!(session.duration_seconds(), Some(125));

        let reversed = SessionData {
            start_time: Some(2_000.0),
            end_time: Some(1_000.0),
            ..SessionData::default()
        };
        assert_eq!(reversed.duration_seconds(), None);
    }

    #[test]
    fn test_explicit_duration_wins() {
        let session = SessionData {
            duration: Some(59),
            start_time: Some(0.0),
            end_time: Some(600.0),
            ..SessionData::default()
        };
        assert_eq!(session.duration_seconds(), Some(59));
    }

    #[test]
    fn test_question_defaults() {
        let q: QuestionRecord =
            serde_json::from_str(r#"{"question": "Why Rust?", "user_answer": ""}"#).unwrap();
        assert_eq!(q.score(), 0.0);
        assert_eq!(q.answer(), None);
        assert_eq!(q.category(), "general");
        assert_eq!(q.model_answer(), None);
    }

    #[test]
    fn test_model_answer_prefers_evaluation() {
        let q: QuestionRecord = serde_json::from_str(
            r#"{
                "question": "Explain ownership",
                "ideal_answer": "bank answer",
                "evaluation": {"score": 6, "ideal_answer": "graded answer"}
            }"#,
        )
        .unwrap();
        assert_eq!(q.model_answer(), Some("graded answer"));
    }
}
