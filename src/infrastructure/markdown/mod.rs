//! Markdown conversion adapters

mod comrak_converter;

pub use comrak_converter::MarkdownBlockConverter;
