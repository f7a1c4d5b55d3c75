//! Notion API adapters

mod page_writer;

pub use page_writer::{NotionPageWriter, NOTION_VERSION, PAGE_URL_BASE};
