//! Printable PDF report (US letter, built-in Helvetica)

use crate::error::ReportError;
use crate::{SessionData, Stats};
use chrono::NaiveDateTime;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 20.0;
/// Characters per body line at 10pt across the printable width
const WRAP_COLUMNS: usize = 95;
const PT_TO_MM: f32 = 0.3528;

/// One laid-out element of the report, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Strong(String),
    Body(String),
    Spacer,
}

impl Block {
    fn font_size(&self) -> f32 {
        match self {
            Block::Title(_) => 18.0,
            Block::Heading(_) => 14.0,
            Block::Strong(_) | Block::Body(_) | Block::Spacer => 10.0,
        }
    }
}

/// Reporter for PDF output
pub struct PdfReporter;

impl PdfReporter {
    pub fn new() -> Self {
        Self
    }

    /// Report content in reading order
    pub fn blocks(&self, session: &SessionData, stats: &Stats, generated_at: NaiveDateTime) -> Vec<Block> {
        let mut blocks = vec![
            Block::Title("Interview Performance Report".to_string()),
            Block::Spacer,
            Block::Body(format!(
                "Session ID: {}",
                session.session_id.as_deref().unwrap_or("N/A")
            )),
            Block::Body(format!("Date: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))),
            Block::Spacer,
            Block::Body(format!("Overall Score: {}/10", stats.overall_score)),
            Block::Body(format!("Performance Level: {}", stats.performance_level)),
            Block::Body(format!("Total Questions: {}", stats.total_questions)),
            Block::Body(format!("Duration: {}", stats.session_duration)),
            Block::Spacer,
            Block::Heading("Detailed Question Analysis".to_string()),
        ];

        for (i, q) in session.questions.iter().enumerate() {
            blocks.push(Block::Strong(format!("Q{}: {}", i + 1, q.question)));
            blocks.push(Block::Body(format!(
                "Your Answer: {}",
                q.answer().unwrap_or("No answer provided")
            )));
            let score = q
                .evaluation
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |e| format!("{}/10", e.score));
            blocks.push(Block::Body(format!("Score: {}", score)));
            if let Some(model) = q.model_answer() {
                blocks.push(Block::Body(format!("Model Answer: {}", model)));
            }
            blocks.push(Block::Spacer);
        }
        blocks
    }

    /// Render the report as PDF bytes
    pub fn report(
        &self,
        session: &SessionData,
        stats: &Stats,
        generated_at: NaiveDateTime,
    ) -> Result<Vec<u8>, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            "Interview Performance Report",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut writer = PageWriter {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        };
        for block in self.blocks(session, stats, generated_at) {
            writer.block(&block);
        }
        writer
            .doc
            .save_to_bytes()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Baseline of the last written line, from the page bottom
    y: f32,
}

impl PageWriter {
    fn block(&mut self, block: &Block) {
        let size = block.font_size();
        let (text, bold) = match block {
            Block::Spacer => {
                self.y -= size * PT_TO_MM;
                return;
            }
            Block::Title(t) | Block::Heading(t) | Block::Strong(t) => (t, true),
            Block::Body(t) => (t, false),
        };
        let columns = (WRAP_COLUMNS as f32 * 10.0 / size) as usize;
        for line in wrap(text, columns) {
            self.line(&line, size, bold);
        }
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        let height = size * PT_TO_MM * 1.4;
        if self.y - height < MARGIN {
            self.new_page();
        }
        self.y -= height;
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }
}

/// Greedy word wrap; words longer than `columns` are split
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > columns {
            if width > 0 {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            let rest = chars.split_off(columns);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        let len = chars.len();
        if width > 0 && width + 1 + len > columns {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        if width > 0 {
            current.push(' ');
            width += 1;
        }
        current.extend(chars);
        width += len;
    }
    if width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
