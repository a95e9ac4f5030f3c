//! View controller: owns a session and turns it into mountable sections
//!
//! Rendering is pure: [`ResultsView::render`] produces a [`RenderedView`]
//! (stats plus an ordered list of [`Mount`]s). Applying those mounts to a
//! page is the job of a [`Document`] implementation.

mod document;

pub use document::{toggle_question, Document, PageDocument};

use crate::reporter::html::{self, QuestionBlock};
use crate::summary::{compute_stats, recommendations};
use crate::{QuestionRecord, SessionData, Stats};
use chrono::NaiveDate;

/// Page anchors the renderer writes into
pub mod anchors {
    use super::Anchor;

    pub const OVERALL_SCORE: Anchor = Anchor::Id("overall-score");
    pub const PERFORMANCE_LEVEL: Anchor = Anchor::Id("performance-level");
    pub const TOTAL_QUESTIONS: Anchor = Anchor::Id("total-questions");
    pub const SESSION_DURATION: Anchor = Anchor::Id("session-duration");
    pub const AVG_RESPONSE: Anchor = Anchor::Id("avg-response");
    pub const SESSION_DATE: Anchor = Anchor::Id("session-date");
    pub const QUESTIONS_SECTION: Anchor = Anchor::Class("questions-section");
    pub const RECOMMENDATIONS: Anchor = Anchor::Class("recommendations");

    /// Every anchor on the results page, in page order
    pub const ALL: [Anchor; 8] = [
        SESSION_DATE,
        OVERALL_SCORE,
        PERFORMANCE_LEVEL,
        TOTAL_QUESTIONS,
        SESSION_DURATION,
        AVG_RESPONSE,
        QUESTIONS_SECTION,
        RECOMMENDATIONS,
    ];
}

/// A page location, addressed by element id or class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Id(&'static str),
    Class(&'static str),
}

impl Anchor {
    pub fn name(&self) -> &'static str {
        match self {
            Anchor::Id(name) | Anchor::Class(name) => name,
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Id(name) => write!(f, "#{}", name),
            Anchor::Class(name) => write!(f, ".{}", name),
        }
    }
}

/// What gets written into an anchor
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text; escaped when mounted
    Text(String),
    /// Markup fragment, already escaped by the renderer
    Markup(String),
    /// Collapsible question blocks
    Questions(Vec<QuestionBlock>),
}

/// One write into the page
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    pub anchor: Anchor,
    pub content: Content,
    /// Extra style class added to the anchor element
    pub class: Option<String>,
}

impl Mount {
    pub fn text(anchor: Anchor, text: impl Into<String>) -> Self {
        Self {
            anchor,
            content: Content::Text(text.into()),
            class: None,
        }
    }

    pub fn markup(anchor: Anchor, markup: impl Into<String>) -> Self {
        Self {
            anchor,
            content: Content::Markup(markup.into()),
            class: None,
        }
    }

    pub fn questions(anchor: Anchor, blocks: Vec<QuestionBlock>) -> Self {
        Self {
            anchor,
            content: Content::Questions(blocks),
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Chart hook. Charts are not drawn yet, so the default strategy renders nothing.
pub trait ChartRenderer {
    fn render(&self, stats: &Stats, questions: &[QuestionRecord]) -> Vec<Mount>;
}

/// Chart strategy that contributes no mounts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCharts;

impl ChartRenderer for NoopCharts {
    fn render(&self, _stats: &Stats, _questions: &[QuestionRecord]) -> Vec<Mount> {
        Vec::new()
    }
}

/// Output of one render pass
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub stats: Stats,
    pub mounts: Vec<Mount>,
}

impl RenderedView {
    /// First mount targeting `anchor`
    pub fn find(&self, anchor: Anchor) -> Option<&Mount> {
        self.mounts.iter().find(|m| m.anchor == anchor)
    }

    /// Ids of every collapsible question detail block
    pub fn collapsible_ids(&self) -> Vec<String> {
        self.mounts
            .iter()
            .filter_map(|m| match &m.content {
                Content::Questions(blocks) => Some(blocks),
                _ => None,
            })
            .flatten()
            .map(|b| b.detail_id.clone())
            .collect()
    }

    /// Apply all mounts in order; returns how many found their anchor
    pub fn mount_into<D: Document + ?Sized>(&self, doc: &mut D) -> usize {
        self.mounts.iter().filter(|m| doc.mount(m)).count()
    }
}

/// Results page component, constructed once per session
pub struct ResultsView<C = NoopCharts> {
    session: SessionData,
    charts: C,
}

impl ResultsView<NoopCharts> {
    pub fn new(session: SessionData) -> Self {
        Self {
            session,
            charts: NoopCharts,
        }
    }
}

impl<C: ChartRenderer> ResultsView<C> {
    pub fn with_charts(session: SessionData, charts: C) -> Self {
        Self { session, charts }
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    /// Render every section for `date`.
    ///
    /// Stats are computed once and shared by all sections. Section order:
    /// summary cards, question analysis, charts, recommendations, session info.
    pub fn render(&self, date: NaiveDate) -> RenderedView {
        let stats = compute_stats(&self.session);
        let mut mounts = html::summary_cards(&stats);

        mounts.push(Mount::questions(
            anchors::QUESTIONS_SECTION,
            html::question_blocks(&self.session.questions),
        ));
        mounts.extend(self.charts.render(&stats, &self.session.questions));
        mounts.push(Mount::markup(
            anchors::RECOMMENDATIONS,
            html::recommendations_markup(&recommendations(stats.overall_score.value())),
        ));
        mounts.push(Mount::text(anchors::SESSION_DATE, html::long_date(date)));

        RenderedView { stats, mounts }
    }

    /// Render and write every section into `doc`
    pub fn mount<D: Document + ?Sized>(&self, doc: &mut D, date: NaiveDate) -> RenderedView {
        let view = self.render(date);
        view.mount_into(doc);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvaluationResult, PerformanceLevel};
    use std::cell::Cell;

    fn sample_session() -> SessionData {
        SessionData {
            questions: vec![
                QuestionRecord {
                    question: "Tell me about yourself".into(),
                    user_answer: Some("I build compilers".into()),
                    evaluation: Some(EvaluationResult {
                        score: 6.0,
                        ..EvaluationResult::default()
                    }),
                    ..QuestionRecord::default()
                },
                QuestionRecord {
                    question: "Why this role?".into(),
                    ..QuestionRecord::default()
                },
            ],
            duration: Some(125),
            ..SessionData::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_render_section_order() {
        let view = ResultsView::new(sample_session()).render(date());
        let order: Vec<Anchor> = view.mounts.iter().map(|m| m.anchor).collect();
        assert_eq!(
            order,
            vec![
                anchors::OVERALL_SCORE,
                anchors::PERFORMANCE_LEVEL,
                anchors::TOTAL_QUESTIONS,
                anchors::SESSION_DURATION,
                anchors::AVG_RESPONSE,
                anchors::QUESTIONS_SECTION,
                anchors::RECOMMENDATIONS,
                anchors::SESSION_DATE,
            ]
        );
    }

    #[test]
    fn test_render_summary_values() {
        let view = ResultsView::new(sample_session()).render(date());
        assert_eq!(view.stats.performance_level, PerformanceLevel::Poor);
        assert_eq!(
            view.find(anchors::OVERALL_SCORE).unwrap().content,
            Content::Text("3.0".into())
        );
        assert_eq!(
            view.find(anchors::SESSION_DURATION).unwrap().content,
            Content::Text("2:05".into())
        );
        assert_eq!(
            view.find(anchors::SESSION_DATE).unwrap().content,
            Content::Text("January 5, 2025".into())
        );
        let level = view.find(anchors::PERFORMANCE_LEVEL).unwrap();
        assert_eq!(level.class.as_deref(), Some("performance-poor"));
    }

    #[test]
    fn test_collapsible_ids() {
        let view = ResultsView::new(sample_session()).render(date());
        assert_eq!(
            view.collapsible_ids(),
            vec!["question-details-1", "question-details-2"]
        );
    }

    struct CountingCharts<'a>(&'a Cell<usize>);

    impl ChartRenderer for CountingCharts<'_> {
        fn render(&self, stats: &Stats, _questions: &[QuestionRecord]) -> Vec<Mount> {
            self.0.set(self.0.get() + 1);
            vec![Mount::text(
                Anchor::Id("score-chart"),
                format!("{}", stats.total_questions),
            )]
        }
    }

    #[test]
    fn test_chart_strategy_runs_between_questions_and_recommendations() {
        let calls = Cell::new(0);
        let view = ResultsView::with_charts(sample_session(), CountingCharts(&calls)).render(date());
        assert_eq!(calls.get(), 1);
        let pos = |a: Anchor| view.mounts.iter().position(|m| m.anchor == a).unwrap();
        let chart = pos(Anchor::Id("score-chart"));
        assert!(pos(anchors::QUESTIONS_SECTION) < chart);
        assert!(chart < pos(anchors::RECOMMENDATIONS));
    }

    #[test]
    fn test_mount_skips_unknown_anchor() {
        let calls = Cell::new(0);
        let view = ResultsView::with_charts(sample_session(), CountingCharts(&calls));
        let mut doc = PageDocument::new("Results");
        let rendered = view.render(date());
        assert_eq!(rendered.mount_into(&mut doc), rendered.mounts.len() - 1);
    }

    #[test]
    fn test_empty_session_renders() {
        let view = ResultsView::new(SessionData::default()).render(date());
        assert_eq!(
            view.find(anchors::OVERALL_SCORE).unwrap().content,
            Content::Text("0".into())
        );
        assert!(view.collapsible_ids().is_empty());
    }
}
