//! Plain-text report, suitable for saving or emailing

use crate::{SessionData, Stats};
use chrono::NaiveDateTime;

/// Reporter for plain-text output
pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }

    /// Generate the report, stamped with `generated_at`
    pub fn report(&self, session: &SessionData, stats: &Stats, generated_at: NaiveDateTime) -> String {
        let mut out = String::from("INTERVIEW PERFORMANCE REPORT\n============================\n\n");
        out.push_str(&format!(
            "Session ID: {}\n",
            session.session_id.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!("Date: {}\n\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
        out.push_str(&format!("Overall Score: {}/10\n", stats.overall_score));
        out.push_str(&format!("Performance Level: {}\n", stats.performance_level));
        out.push_str(&format!("Total Questions: {}\n", stats.total_questions));
        out.push_str(&format!("Session Duration: {}\n", stats.session_duration));

        if !stats.category_scores.is_empty() {
            out.push_str("\nCategory-wise Performance:\n");
            for (category, score) in &stats.category_scores {
                out.push_str(&format!("  {}: {:.1}/10\n", title_case(category), score));
            }
        }

        out.push_str("\nDetailed Analysis:\n");
        for (i, q) in session.questions.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, q.question));
            out.push_str(&format!(
                "   Your Answer: {}\n",
                q.answer().unwrap_or("No answer provided")
            ));
            match &q.evaluation {
                Some(eval) => {
                    let matched = eval.matched_keywords.len();
                    out.push_str(&format!("   Score: {}/10\n", eval.score));
                    out.push_str(&format!(
                        "   Keywords Matched: {}/{}\n",
                        matched,
                        matched + eval.missing_keywords.len()
                    ));
                    if matched > 0 {
                        out.push_str(&format!(
                            "   Matched Keywords: {}\n",
                            eval.matched_keywords.join(", ")
                        ));
                    }
                    if !eval.missing_keywords.is_empty() {
                        out.push_str(&format!(
                            "   Missing Keywords: {}\n",
                            eval.missing_keywords.join(", ")
                        ));
                    }
                }
                None => out.push_str("   Score: N/A\n"),
            }
            if let Some(model) = q.model_answer() {
                out.push_str(&format!("   Model Answer: {}\n", model));
            }
        }
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
