//! HTML rendering: section fragments and the standalone results page
//!
//! Section renderers are pure functions from stats and question records to
//! markup. Every user-supplied string passes through [`escape_html`].

use crate::summary::Recommendation;
use crate::view::{anchors, toggle_question, Mount, PageDocument, RenderedView};
use crate::{EvaluationResult, QuestionRecord, Stats};
use chrono::NaiveDate;

/// Placeholder shown when a question has no recorded answer
pub const NO_ANSWER: &str = "No answer provided";

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Long date form, e.g. "January 5, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn optional_metric(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Summary card mounts, in display order
pub fn summary_cards(stats: &Stats) -> Vec<Mount> {
    vec![
        Mount::text(anchors::OVERALL_SCORE, stats.overall_score.to_string()),
        Mount::text(anchors::PERFORMANCE_LEVEL, stats.performance_level.to_string())
            .with_class(format!("performance-{}", stats.performance_level.css_suffix())),
        Mount::text(anchors::TOTAL_QUESTIONS, stats.total_questions.to_string()),
        Mount::text(anchors::SESSION_DURATION, stats.session_duration.clone()),
        Mount::text(anchors::AVG_RESPONSE, stats.avg_response_time.clone()),
    ]
}

/// A collapsible question entry: header is always visible, body toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// Element id of the detail body (target of the toggle handler)
    pub detail_id: String,
    pub header: String,
    pub body: String,
}

impl QuestionBlock {
    pub fn to_markup(&self, expanded: bool) -> String {
        format!(
            "<div class=\"question-item\">\n{}<div class=\"question-details {}\" id=\"{}\">\n{}</div>\n</div>\n",
            self.header,
            if expanded { "expanded" } else { "collapsed" },
            self.detail_id,
            self.body
        )
    }
}

/// Build the block for the question at zero-based `index`
pub fn question_block(index: usize, q: &QuestionRecord) -> QuestionBlock {
    let number = index + 1;
    let detail_id = format!("question-details-{}", number);
    let score = q
        .evaluation
        .as_ref()
        .map_or_else(|| "N/A".to_string(), |e| format!("{}/10", e.score));

    let header = format!(
        "<div class=\"question-header\" onclick=\"toggleQuestion('{}')\">\
<span class=\"question-number\">Q{}</span>\
<span class=\"question-text\">{}</span>\
<span class=\"question-score\">{}</span>\
<span class=\"toggle-icon\">&#9662;</span></div>\n",
        detail_id,
        number,
        escape_html(&q.question),
        score
    );

    let mut body = format!(
        "<div class=\"answer-section\"><h4>Your Answer</h4><p class=\"user-answer\">{}</p></div>\n",
        escape_html(q.answer().unwrap_or(NO_ANSWER))
    );
    if let Some(eval) = &q.evaluation {
        body.push_str(&evaluation_markup(eval));
    }
    if let Some(model) = q.model_answer() {
        body.push_str(&format!(
            "<div class=\"model-answer\"><h4>Model Answer</h4><p>{}</p></div>\n",
            escape_html(model)
        ));
    }

    QuestionBlock {
        detail_id,
        header,
        body,
    }
}

pub fn question_blocks(questions: &[QuestionRecord]) -> Vec<QuestionBlock> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| question_block(i, q))
        .collect()
}

fn evaluation_markup(eval: &EvaluationResult) -> String {
    let mut html = String::from("<div class=\"evaluation-metrics\">\n");
    for (label, value) in [
        ("Keyword Score", eval.keyword_score),
        ("Sentiment Score", eval.sentiment_score),
        ("Completeness Score", eval.completeness_score),
    ] {
        html.push_str(&format!(
            "<div class=\"metric\"><span class=\"metric-label\">{}</span><span class=\"metric-value\">{}</span></div>\n",
            label,
            optional_metric(value)
        ));
    }
    html.push_str("</div>\n<div class=\"keywords-section\">\n");
    html.push_str(&keyword_group("matched", "Matched Keywords", &eval.matched_keywords));
    html.push_str(&keyword_group("missing", "Missing Keywords", &eval.missing_keywords));
    html.push_str("</div>\n");
    html
}

fn keyword_group(kind: &str, title: &str, keywords: &[String]) -> String {
    let tags: String = keywords
        .iter()
        .map(|k| format!("<span class=\"keyword {}\">{}</span>", kind, escape_html(k)))
        .collect();
    format!(
        "<div class=\"keyword-group {kind}\"><h5>{title} (<span class=\"keyword-count\">{}</span>)</h5><div class=\"keyword-list\">{tags}</div></div>\n",
        keywords.len()
    )
}

/// Recommendation list items
pub fn recommendations_markup(recs: &[Recommendation]) -> String {
    recs.iter()
        .map(|r| {
            format!(
                "<div class=\"recommendation-item\"><div class=\"recommendation-icon\"><i class=\"{}\"></i></div>\
<div class=\"recommendation-content\"><h4>{}</h4><p>{}</p></div></div>\n",
                escape_html(r.icon),
                escape_html(r.title),
                escape_html(r.description)
            )
        })
        .collect()
}

/// Reporter that produces a self-contained results page
pub struct HtmlReporter {
    title: String,
    expand_questions: bool,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self {
            title: "Interview Results".to_string(),
            expand_questions: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start with every question block expanded
    pub fn expanded(mut self) -> Self {
        self.expand_questions = true;
        self
    }

    /// Mount a rendered view into a fresh page and serialize it
    pub fn report(&self, rendered: &RenderedView) -> String {
        let mut doc = PageDocument::new(self.title.as_str());
        rendered.mount_into(&mut doc);
        if self.expand_questions {
            for id in rendered.collapsible_ids() {
                toggle_question(&mut doc, &id);
            }
        }
        doc.to_html()
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Page template pieces ────────────────────────────────────────────

pub(crate) fn page_head(title: &str) -> String {
    let mut head = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    head.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    head.push_str(PAGE_STYLE);
    head.push_str("</head>\n<body>\n");
    head
}

const PAGE_STYLE: &str = r##"<style>
:root{--bg:#f5f7fb;--surface:#fff;--border:#e3e7ef;--text:#1f2430;--muted:#6b7280;--green:#16a34a;--blue:#2563eb;--yellow:#ca8a04;--red:#dc2626;--radius:10px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text);line-height:1.5}
.results-container{max-width:960px;margin:0 auto;padding:2rem 1.25rem}
.results-header{margin-bottom:1.5rem}
.results-header h1{font-size:1.5rem}
.session-info{color:var(--muted);font-size:.875rem}

/* ── Summary cards ── */
.summary-cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(160px,1fr));gap:.75rem;margin-bottom:2rem}
.summary-card{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);padding:1rem;text-align:center}
.card-value{display:block;font-size:1.5rem;font-weight:700}
.card-label{font-size:.75rem;color:var(--muted);text-transform:uppercase;letter-spacing:.5px}
.performance-excellent{color:var(--green)}
.performance-good{color:var(--blue)}
.performance-average{color:var(--yellow)}
.performance-poor{color:var(--red)}

/* ── Questions ── */
.questions-section,.recommendations-section{margin-bottom:2rem}
h2{font-size:1.125rem;margin-bottom:.75rem}
.question-item{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);margin-bottom:.5rem;overflow:hidden}
.question-header{display:flex;gap:.75rem;align-items:center;padding:.75rem 1rem;cursor:pointer;user-select:none}
.question-number{font-weight:700;color:var(--blue)}
.question-text{flex:1}
.question-score{font-weight:600;font-variant-numeric:tabular-nums}
.toggle-icon{color:var(--muted);transition:transform .2s}
.question-details{padding:0 1rem 1rem;border-top:1px solid var(--border)}
.question-details.collapsed{display:none}
.question-details h4{font-size:.8125rem;margin:.75rem 0 .25rem;color:var(--muted);text-transform:uppercase}
.evaluation-metrics{display:flex;gap:.75rem;margin-top:.75rem}
.metric{flex:1;background:var(--bg);border-radius:6px;padding:.5rem .75rem}
.metric-label{display:block;font-size:.6875rem;color:var(--muted)}
.metric-value{font-weight:700}
.keyword-group h5{font-size:.75rem;margin:.75rem 0 .25rem}
.keyword{display:inline-block;font-size:.75rem;padding:.125rem .5rem;border-radius:10px;margin:0 .25rem .25rem 0}
.keyword.matched{background:rgba(22,163,74,.12);color:var(--green)}
.keyword.missing{background:rgba(220,38,38,.1);color:var(--red)}

/* ── Recommendations ── */
.recommendation-item{display:flex;gap:.75rem;background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);padding:.75rem 1rem;margin-bottom:.5rem}
.recommendation-icon{color:var(--blue);width:1.5rem;text-align:center}
.recommendation-content h4{font-size:.9375rem}
.recommendation-content p{font-size:.8125rem;color:var(--muted)}
</style>
"##;

pub(crate) const PAGE_SCRIPT: &str = r##"<script>
function toggleQuestion(id){
  const el=document.getElementById(id);
  if(!el) return;
  const collapsed=el.classList.contains('collapsed');
  el.classList.toggle('collapsed',!collapsed);
  el.classList.toggle('expanded',collapsed);
}
</script>
"##;
