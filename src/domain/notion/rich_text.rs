//! Notion rich text value objects

use serde::Serialize;

/// Maximum characters Notion accepts in a single text object
pub const MAX_TEXT_CONTENT_CHARS: usize = 2000;

/// Inline styling flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum RichTextKind {
    Text,
}

/// A styled run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    kind: RichTextKind,
    pub text: TextContent,
    pub annotations: Annotations,
}

impl RichText {
    /// Unstyled text
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::default(), None)
    }

    pub fn styled(content: impl Into<String>, annotations: Annotations, link: Option<String>) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: TextContent {
                content: content.into(),
                link: link.map(|url| Link { url }),
            },
            annotations,
        }
    }

    pub fn content(&self) -> &str {
        &self.text.content
    }

    pub fn link_url(&self) -> Option<&str> {
        self.text.link.as_ref().map(|l| l.url.as_str())
    }

    fn same_style(&self, other: &Self) -> bool {
        self.annotations == other.annotations && self.text.link == other.text.link
    }
}

/// Concatenate the plain text of a rich text sequence
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(RichText::content).collect()
}

/// Normalize runs for Notion: merge neighbours with identical styling, drop
/// empty runs, and split any run longer than [`MAX_TEXT_CONTENT_CHARS`].
pub fn normalize(runs: Vec<RichText>) -> Vec<RichText> {
    let mut merged: Vec<RichText> = Vec::with_capacity(runs.len());
    for run in runs.into_iter().filter(|r| !r.text.content.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.same_style(&run) => last.text.content.push_str(&run.text.content),
            _ => merged.push(run),
        }
    }

    merged.into_iter().flat_map(split_long).collect()
}

fn split_long(run: RichText) -> Vec<RichText> {
    if run.text.content.chars().count() <= MAX_TEXT_CONTENT_CHARS {
        return vec![run];
    }

    let chars: Vec<char> = run.text.content.chars().collect();
    chars
        .chunks(MAX_TEXT_CONTENT_CHARS)
        .map(|chunk| RichText {
            kind: run.kind,
            text: TextContent {
                content: chunk.iter().collect(),
                link: run.text.link.clone(),
            },
            annotations: run.annotations,
        })
        .collect()
}
