//! Mount adapter: applies rendered sections to a page

use super::{anchors, Anchor, Content, Mount};
use crate::reporter::html::{self, QuestionBlock};

/// A page that rendered sections can be written into
pub trait Document {
    /// Apply a mount. Returns false when the anchor is not on the page.
    fn mount(&mut self, mount: &Mount) -> bool;

    /// Flip a question detail block between collapsed and expanded.
    /// Returns false, changing nothing, when `id` does not resolve.
    fn toggle(&mut self, id: &str) -> bool;
}

/// Toggle handler wired to the `onclick` attribute of each question header
pub fn toggle_question<D: Document + ?Sized>(doc: &mut D, id: &str) -> bool {
    doc.toggle(id)
}

#[derive(Debug, Clone)]
enum SlotContent {
    Empty,
    Html(String),
    Questions(Vec<(QuestionBlock, bool)>),
}

#[derive(Debug, Clone)]
struct Slot {
    anchor: Anchor,
    content: SlotContent,
    class: Option<String>,
}

/// In-memory results page with the fixed anchor layout
#[derive(Debug, Clone)]
pub struct PageDocument {
    title: String,
    slots: Vec<Slot>,
}

impl PageDocument {
    pub fn new(title: impl Into<String>) -> Self {
        let slots = anchors::ALL
            .iter()
            .map(|&anchor| Slot {
                anchor,
                content: SlotContent::Empty,
                class: None,
            })
            .collect();
        Self {
            title: title.into(),
            slots,
        }
    }

    fn slot(&self, anchor: Anchor) -> Option<&Slot> {
        self.slots.iter().find(|s| s.anchor == anchor)
    }

    /// Current inner HTML of an anchor (None when the anchor is not on the page)
    pub fn inner_html(&self, anchor: Anchor) -> Option<String> {
        self.slot(anchor).map(|s| match &s.content {
            SlotContent::Empty => String::new(),
            SlotContent::Html(h) => h.clone(),
            SlotContent::Questions(blocks) => blocks
                .iter()
                .map(|(b, expanded)| b.to_markup(*expanded))
                .collect(),
        })
    }

    /// Extra class applied to an anchor by its last mount
    pub fn class_of(&self, anchor: Anchor) -> Option<&str> {
        self.slot(anchor).and_then(|s| s.class.as_deref())
    }

    /// Expanded state of a question detail block
    pub fn is_expanded(&self, id: &str) -> Option<bool> {
        self.slots.iter().find_map(|s| match &s.content {
            SlotContent::Questions(blocks) => blocks
                .iter()
                .find(|(b, _)| b.detail_id == id)
                .map(|(_, expanded)| *expanded),
            _ => None,
        })
    }

    /// Serialize the whole page as a standalone HTML document
    pub fn to_html(&self) -> String {
        let inner = |anchor| self.inner_html(anchor).unwrap_or_default();
        let class = |anchor, base: &str| match self.class_of(anchor) {
            Some(extra) => format!("{} {}", base, extra),
            None => base.to_string(),
        };

        let mut out = String::with_capacity(16_384);
        out.push_str(&html::page_head(&self.title));
        out.push_str("<div class=\"results-container\">\n<header class=\"results-header\">\n");
        out.push_str(&format!("<h1>{}</h1>\n", html::escape_html(&self.title)));
        out.push_str(&format!(
            "<p class=\"session-info\">Completed on <span id=\"session-date\">{}</span></p>\n",
            inner(anchors::SESSION_DATE)
        ));
        out.push_str("</header>\n<section class=\"summary-cards\">\n");

        let cards = [
            (anchors::OVERALL_SCORE, "Overall Score"),
            (anchors::PERFORMANCE_LEVEL, "Performance"),
            (anchors::TOTAL_QUESTIONS, "Questions"),
            (anchors::SESSION_DURATION, "Duration"),
            (anchors::AVG_RESPONSE, "Avg Response"),
        ];
        for (anchor, label) in cards {
            out.push_str(&format!(
                "<div class=\"summary-card\"><span class=\"{}\" id=\"{}\">{}</span><span class=\"card-label\">{}</span></div>\n",
                class(anchor, "card-value"),
                anchor.name(),
                inner(anchor),
                label
            ));
        }
        out.push_str("</section>\n");

        out.push_str(&format!(
            "<section class=\"{}\">\n<h2>Question Analysis</h2>\n{}</section>\n",
            class(anchors::QUESTIONS_SECTION, "questions-section"),
            inner(anchors::QUESTIONS_SECTION)
        ));
        out.push_str(&format!(
            "<section class=\"recommendations-section\">\n<h2>Recommendations</h2>\n<div class=\"{}\">{}</div>\n</section>\n",
            class(anchors::RECOMMENDATIONS, "recommendations"),
            inner(anchors::RECOMMENDATIONS)
        ));
        out.push_str("</div>\n");
        out.push_str(html::PAGE_SCRIPT);
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl Document for PageDocument {
    fn mount(&mut self, mount: &Mount) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.anchor == mount.anchor) else {
            return false;
        };
        slot.content = match &mount.content {
            Content::Text(text) => SlotContent::Html(html::escape_html(text)),
            Content::Markup(markup) => SlotContent::Html(markup.clone()),
            Content::Questions(blocks) => {
                SlotContent::Questions(blocks.iter().map(|b| (b.clone(), false)).collect())
            }
        };
        if mount.class.is_some() {
            slot.class = mount.class.clone();
        }
        true
    }

    fn toggle(&mut self, id: &str) -> bool {
        for slot in &mut self.slots {
            if let SlotContent::Questions(blocks) = &mut slot.content {
                if let Some((_, expanded)) = blocks.iter_mut().find(|(b, _)| b.detail_id == id) {
                    *expanded = !*expanded;
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvaluationResult, QuestionRecord, ResultsView, SessionData};
    use chrono::NaiveDate;

    fn mounted() -> PageDocument {
        let session = SessionData {
            questions: vec![QuestionRecord {
                question: "What is a <lifetime>?".into(),
                user_answer: Some("A scope".into()),
                evaluation: Some(EvaluationResult {
                    score: 8.5,
                    ..EvaluationResult::default()
                }),
                ..QuestionRecord::default()
            }],
            duration: Some(90),
            ..SessionData::default()
        };
        let mut doc = PageDocument::new("Interview Results");
        ResultsView::new(session).mount(&mut doc, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        doc
    }

    #[test]
    fn test_mount_fills_anchors() {
        let doc = mounted();
        assert_eq!(doc.inner_html(anchors::OVERALL_SCORE).unwrap(), "8.5");
        assert_eq!(doc.inner_html(anchors::PERFORMANCE_LEVEL).unwrap(), "Excellent");
        assert_eq!(doc.class_of(anchors::PERFORMANCE_LEVEL), Some("performance-excellent"));
        assert_eq!(doc.inner_html(anchors::SESSION_DURATION).unwrap(), "1:30");
        assert_eq!(doc.inner_html(anchors::AVG_RESPONSE).unwrap(), "45s");
        assert_eq!(doc.inner_html(anchors::SESSION_DATE).unwrap(), "March 14, 2025");
    }

    #[test]
    fn test_text_mount_is_escaped() {
        let mut doc = PageDocument::new("t");
        assert!(doc.mount(&Mount::text(anchors::TOTAL_QUESTIONS, "<b>")));
        assert_eq!(doc.inner_html(anchors::TOTAL_QUESTIONS).unwrap(), "&lt;b&gt;");
    }

    #[test]
    fn test_unknown_anchor_is_ignored() {
        let mut doc = PageDocument::new("t");
        assert!(!doc.mount(&Mount::text(Anchor::Id("nope"), "x")));
        assert_eq!(doc.inner_html(Anchor::Id("nope")), None);
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let mut doc = mounted();
        assert_eq!(doc.is_expanded("question-details-1"), Some(false));
        assert!(toggle_question(&mut doc, "question-details-1"));
        assert_eq!(doc.is_expanded("question-details-1"), Some(true));
        assert!(toggle_question(&mut doc, "question-details-1"));
        assert_eq!(doc.is_expanded("question-details-1"), Some(false));
    }

    #[test]
    fn test_toggle_missing_id_changes_nothing() {
        let mut doc = mounted();
        let before = doc.to_html();
        assert!(!toggle_question(&mut doc, "question-details-99"));
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_toggle_reflected_in_markup() {
        let mut doc = mounted();
        let section = doc.inner_html(anchors::QUESTIONS_SECTION).unwrap();
        assert!(section.contains("question-details collapsed"));
        toggle_question(&mut doc, "question-details-1");
        let section = doc.inner_html(anchors::QUESTIONS_SECTION).unwrap();
        assert!(!section.contains("question-details collapsed"));
        assert!(section.contains("question-details expanded"));
    }

    #[test]
    fn test_to_html_page_structure() {
        let html = mounted().to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"overall-score\">8.5</span>"));
        assert!(html.contains("card-value performance-excellent"));
        assert!(html.contains("class=\"questions-section\""));
        assert!(html.contains("What is a &lt;lifetime&gt;?"));
        assert!(html.contains("function toggleQuestion"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
