//! Notion content model and request limits

mod batch;
mod block;
mod rich_text;

pub use batch::{BatchPlan, OverflowPolicy, MAX_BLOCKS_PER_REQUEST};
pub use block::{Block, HeadingLevel};
pub use rich_text::{
    normalize, plain_text, Annotations, Color, Link, RichText, TextContent,
    MAX_TEXT_CONTENT_CHARS,
};
