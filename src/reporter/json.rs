//! JSON reporter for machine-readable output

use crate::summary::{recommendations, Recommendation};
use crate::{SessionData, Stats};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report stats, recommendations and per-question scores
    pub fn report(&self, session: &SessionData, stats: &Stats) -> String {
        let output = JsonOutput {
            session_id: session.session_id.as_deref(),
            stats,
            recommendations: recommendations(stats.overall_score.value()),
            questions: session
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| JsonQuestion {
                    index: i + 1,
                    question: &q.question,
                    category: q.category(),
                    score: q.evaluation.as_ref().map(|e| e.score),
                    matched_keywords: q
                        .evaluation
                        .as_ref()
                        .map_or(&[] as &[String], |e| e.matched_keywords.as_slice()),
                    missing_keywords: q
                        .evaluation
                        .as_ref()
                        .map_or(&[] as &[String], |e| e.missing_keywords.as_slice()),
                })
                .collect(),
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
    stats: &'a Stats,
    recommendations: Vec<Recommendation>,
    questions: Vec<JsonQuestion<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonQuestion<'a> {
    index: usize,
    question: &'a str,
    category: &'a str,
    score: Option<f64>,
    matched_keywords: &'a [String],
    missing_keywords: &'a [String],
}
