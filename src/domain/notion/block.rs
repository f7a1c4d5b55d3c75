//! Notion block value objects

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::rich_text::RichText;

/// Heading depth supported by Notion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Map a Markdown heading level, clamping 4-6 to level three
    pub fn from_markdown(level: u8) -> Self {
        match level {
            0 | 1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }
}

/// A Notion content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: Vec<RichText>,
    },
    Paragraph {
        text: Vec<RichText>,
    },
    BulletedListItem {
        text: Vec<RichText>,
        children: Vec<Block>,
    },
    NumberedListItem {
        text: Vec<RichText>,
        children: Vec<Block>,
    },
    Quote {
        text: Vec<RichText>,
    },
    Code {
        language: String,
        text: Vec<RichText>,
    },
    Divider,
}

impl Block {
    pub fn heading(level: HeadingLevel, text: Vec<RichText>) -> Self {
        Self::Heading { level, text }
    }

    pub fn paragraph(text: Vec<RichText>) -> Self {
        Self::Paragraph { text }
    }

    /// The Notion `type` discriminator
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Heading {
                level: HeadingLevel::One,
                ..
            } => "heading_1",
            Self::Heading {
                level: HeadingLevel::Two,
                ..
            } => "heading_2",
            Self::Heading {
                level: HeadingLevel::Three,
                ..
            } => "heading_3",
            Self::Paragraph { .. } => "paragraph",
            Self::BulletedListItem { .. } => "bulleted_list_item",
            Self::NumberedListItem { .. } => "numbered_list_item",
            Self::Quote { .. } => "quote",
            Self::Code { .. } => "code",
            Self::Divider => "divider",
        }
    }

    /// Rich text of the block, empty for dividers
    pub fn rich_text(&self) -> &[RichText] {
        match self {
            Self::Heading { text, .. }
            | Self::Paragraph { text }
            | Self::BulletedListItem { text, .. }
            | Self::NumberedListItem { text, .. }
            | Self::Quote { text }
            | Self::Code { text, .. } => text,
            Self::Divider => &[],
        }
    }

    /// Nested blocks, only list items carry any
    pub fn children(&self) -> &[Block] {
        match self {
            Self::BulletedListItem { children, .. } | Self::NumberedListItem { children, .. } => {
                children
            }
            _ => &[],
        }
    }
}

#[derive(Serialize)]
struct BlockBody<'a> {
    rich_text: &'a [RichText],
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    children: &'a [Block],
}

#[derive(Serialize)]
struct EmptyBody {}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let type_name = self.type_name();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", type_name)?;

        match self {
            Self::Divider => map.serialize_entry(type_name, &EmptyBody {})?,
            Self::Code { language, text } => map.serialize_entry(
                type_name,
                &BlockBody {
                    rich_text: text,
                    language: Some(language.as_str()),
                    children: &[],
                },
            )?,
            _ => map.serialize_entry(
                type_name,
                &BlockBody {
                    rich_text: self.rich_text(),
                    language: None,
                    children: self.children(),
                },
            )?,
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_serializes_with_numbered_type() {
        let block = Block::heading(HeadingLevel::Two, vec![RichText::plain("Summary")]);
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["object"], "block");
        assert_eq!(value["type"], "heading_2");
        assert_eq!(value["heading_2"]["rich_text"][0]["text"]["content"], "Summary");
    }

    #[test]
    fn list_item_children_are_nested() {
        let block = Block::BulletedListItem {
            text: vec![RichText::plain("parent")],
            children: vec![Block::BulletedListItem {
                text: vec![RichText::plain("child")],
                children: Vec::new(),
            }],
        };
        let value = serde_json::to_value(&block).unwrap();

        let child = &value["bulleted_list_item"]["children"][0];
        assert_eq!(child["type"], "bulleted_list_item");
        assert_eq!(child["bulleted_list_item"]["rich_text"][0]["text"]["content"], "child");
        assert!(child["bulleted_list_item"].get("children").is_none());
    }

    #[test]
    fn code_carries_language() {
        let block = Block::Code {
            language: "rust".to_string(),
            text: vec![RichText::plain("fn main() {}")],
        };
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["code"]["language"], "rust");
    }

    #[test]
    fn divider_has_empty_body() {
        let value = serde_json::to_value(Block::Divider).unwrap();

        assert_eq!(value, json!({"object": "block", "type": "divider", "divider": {}}));
    }

    #[test]
    fn heading_levels_clamp() {
        assert_eq!(HeadingLevel::from_markdown(1), HeadingLevel::One);
        assert_eq!(HeadingLevel::from_markdown(3), HeadingLevel::Three);
        assert_eq!(HeadingLevel::from_markdown(6), HeadingLevel::Three);
    }
}
