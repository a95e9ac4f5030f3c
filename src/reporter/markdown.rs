//! Markdown summary for chat or notes

use crate::reporter::html::escape_html;
use crate::{SessionData, Stats};

/// Reporter for markdown output
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn new() -> Self {
        Self
    }

    /// Question and answer text is HTML-escaped, since markdown renderers pass raw HTML through.
    pub fn report(&self, session: &SessionData, stats: &Stats) -> String {
        let mut md = format!(
            "## Interview Summary\n\n- Questions: **{}**\n- Average Score: **{}/10**\n- Performance: **{}**\n- Duration: **{}**\n\n---\n\n",
            stats.total_questions,
            stats.overall_score,
            stats.performance_level,
            stats.session_duration
        );

        for (i, q) in session.questions.iter().enumerate() {
            md.push_str(&format!("### Q{}: {}\n\n", i + 1, escape_html(&q.question)));
            md.push_str(&format!(
                "**Your Answer:**  \n{}\n\n",
                escape_html(q.answer().unwrap_or("No answer provided"))
            ));
            if let Some(model) = q.model_answer() {
                md.push_str(&format!("**Model Answer:**  \n{}\n\n", escape_html(model)));
            }
            let score = q
                .evaluation
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |e| format!("{}/10", e.score));
            md.push_str(&format!("**Score:** {}\n\n---\n\n", score));
        }
        md
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}
