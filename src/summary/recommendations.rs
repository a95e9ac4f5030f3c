//! Recommendation rules evaluated against the overall score

use serde::Serialize;

/// A piece of advice shown under the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Icon class name rendered next to the title
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const FOCUS_ON_CONTENT: Recommendation = Recommendation {
    icon: "fas fa-book-open",
    title: "Focus on Content",
    description: "Give more detailed answers: structure them clearly and back each point with a concrete example from your experience.",
};

const IMPROVE_KEYWORDS: Recommendation = Recommendation {
    icon: "fas fa-key",
    title: "Improve Keyword Usage",
    description: "Make sure your answers cover the key points and terminology the interviewer is listening for.",
};

const PRACTICE_REGULARLY: Recommendation = Recommendation {
    icon: "fas fa-redo",
    title: "Practice Regularly",
    description: "Repeat practice sessions regularly to build confidence and fluency in your delivery.",
};

/// All rules whose condition holds, in fixed order
pub fn recommendations(overall_score: f64) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if overall_score < 7.0 {
        recs.push(FOCUS_ON_CONTENT);
    }

    if overall_score < 8.0 {
        recs.push(IMPROVE_KEYWORDS);
    }

    recs.push(PRACTICE_REGULARLY);
    recs
}
