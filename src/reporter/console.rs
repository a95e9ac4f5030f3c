//! Console reporter with colored output

use crate::summary::recommendations;
use crate::{PerformanceLevel, SessionData, Stats};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output (answers and keyword lists per question)
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a session summary
    pub fn report(&self, session: &SessionData, stats: &Stats) {
        self.print_header(session);
        self.print_score(stats);
        self.print_categories(stats);
        self.print_questions(session);
        self.print_recommendations(stats);
        println!();
    }

    /// Report in quiet mode (just score and level)
    pub fn report_quiet(&self, stats: &Stats) {
        println!(
            "{} ({})",
            stats.overall_score,
            self.colorize_level(stats.performance_level)
        );
    }

    fn print_header(&self, session: &SessionData) {
        println!();
        println!("{}", self.paint("🎤 Interview Results", |s| s.bold()));
        if let Some(ref id) = session.session_id {
            println!("   Session: {}", id);
        }
        println!();
    }

    fn print_score(&self, stats: &Stats) {
        let bar = self.create_score_bar(stats.overall_score.value());
        println!(
            "   Score: {} {}",
            bar,
            self.colorize_level(stats.performance_level)
        );
        println!(
            "   Questions: {} | Duration: {} | Avg response: {}",
            stats.total_questions, stats.session_duration, stats.avg_response_time
        );
        println!();
    }

    fn print_categories(&self, stats: &Stats) {
        if stats.category_scores.len() < 2 {
            return;
        }
        println!("   {}", self.paint("By Category:", |s| s.bold()));
        for (category, score) in &stats.category_scores {
            let score_str = format!("{:>4.1}/10", score);
            println!("   {} {}", self.colorize_score(*score, score_str), category);
        }
        println!();
    }

    fn print_questions(&self, session: &SessionData) {
        if session.questions.is_empty() {
            return;
        }
        println!("   {}", self.paint("Questions:", |s| s.bold()));
        for (i, q) in session.questions.iter().enumerate() {
            let score = match &q.evaluation {
                Some(e) => self.colorize_score(e.score, format!("{:>4}/10", e.score)),
                None => self.paint("   N/A", |s| s.dimmed()),
            };
            let number = format!("Q{}", i + 1);
            println!("   {} {} {}", self.paint(&number, |s| s.dimmed()), score, q.question);

            if self.verbose {
                let answer = q.answer().unwrap_or("No answer provided");
                println!(
                    "       {} {}",
                    self.paint("↳", |s| s.dimmed()),
                    self.paint(answer, |s| s.italic())
                );
                if let Some(eval) = &q.evaluation {
                    if !eval.matched_keywords.is_empty() {
                        println!(
                            "       {} {}",
                            self.paint("✓", |s| s.green()),
                            eval.matched_keywords.join(", ")
                        );
                    }
                    if !eval.missing_keywords.is_empty() {
                        println!(
                            "       {} {}",
                            self.paint("✗", |s| s.red()),
                            eval.missing_keywords.join(", ")
                        );
                    }
                }
            }
        }
        println!();
    }

    fn print_recommendations(&self, stats: &Stats) {
        println!("   {}", self.paint("Recommendations:", |s| s.bold()));
        for rec in recommendations(stats.overall_score.value()) {
            println!(
                "   {} {}",
                self.paint("→", |s| s.cyan()),
                self.paint(rec.title, |s| s.bold())
            );
            println!("     {}", self.paint(rec.description, |s| s.dimmed()));
        }
    }

    /// Apply `style` unless colors are disabled
    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn colorize_level(&self, level: PerformanceLevel) -> String {
        let s = level.to_string();
        self.paint(&s, |s| match level {
            PerformanceLevel::Excellent => s.green().bold(),
            PerformanceLevel::Good => s.green(),
            PerformanceLevel::Average => s.yellow(),
            PerformanceLevel::Poor => s.red(),
        })
    }

    fn colorize_score(&self, score: f64, text: String) -> String {
        if !self.use_colors {
            return text;
        }
        if score >= 8.0 {
            text.green().to_string()
        } else if score >= 6.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let filled = ((score.clamp(0.0, 10.0) * 2.0).round() as usize).min(20);
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>4.1}/10", "█".repeat(filled), "░".repeat(empty), score);
        self.colorize_score(score, bar)
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_plain() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(
            reporter.create_score_bar(7.5),
            format!("[{}{}]  7.5/10", "█".repeat(15), "░".repeat(5))
        );
        assert_eq!(
            reporter.create_score_bar(0.0),
            format!("[{}]  0.0/10", "░".repeat(20))
        );
    }

    #[test]
    fn test_score_bar_clamps_out_of_range() {
        let reporter = ConsoleReporter::new().without_colors();
        let bar = reporter.create_score_bar(12.0);
        assert!(bar.starts_with(&format!("[{}]", "█".repeat(20))));
    }

    #[test]
    fn test_colorize_level_without_colors() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(reporter.colorize_level(PerformanceLevel::Excellent), "Excellent");
        assert_eq!(reporter.colorize_level(PerformanceLevel::Poor), "Poor");
        assert_eq!(reporter.paint("Questions:", |s| s.bold()), "Questions:");
    }

    #[test]
    fn test_colorize_score_without_colors() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(reporter.colorize_score(3.0, "x".into()), "x");
    }
}
