//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;
pub mod markdown;
pub mod pdf;
pub mod text;

pub use console::ConsoleReporter;
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use pdf::PdfReporter;
pub use text::TextReporter;
