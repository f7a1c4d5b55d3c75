//! CommonMark to Notion block converter built on comrak

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

use crate::application::ports::{BlockConverter, ConversionError};
use crate::domain::notion::{normalize, Annotations, Block, HeadingLevel, RichText};

/// Deepest list nesting Notion accepts in a single append request
const MAX_NESTING_DEPTH: usize = 2;

/// Languages accepted by Notion code blocks
const NOTION_LANGUAGES: &[&str] = &[
    "abap", "arduino", "bash", "basic", "c", "clojure", "coffeescript", "c++", "c#", "css",
    "dart", "diff", "docker", "elixir", "elm", "erlang", "flow", "fortran", "f#", "gherkin",
    "glsl", "go", "graphql", "groovy", "haskell", "html", "java", "javascript", "json", "julia",
    "kotlin", "latex", "less", "lisp", "livescript", "lua", "makefile", "markdown", "markup",
    "matlab", "mermaid", "nix", "objective-c", "ocaml", "pascal", "perl", "php", "plain text",
    "powershell", "prolog", "protobuf", "python", "r", "reason", "ruby", "rust", "sass",
    "scala", "scheme", "scss", "shell", "sql", "swift", "typescript", "vb.net", "verilog",
    "vhdl", "visual basic", "webassembly", "xml", "yaml",
];

/// Converts Markdown into Notion blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBlockConverter;

impl MarkdownBlockConverter {
    pub fn new() -> Self {
        Self
    }
}

impl BlockConverter for MarkdownBlockConverter {
    fn convert(&self, markdown: &str) -> Result<Vec<Block>, ConversionError> {
        let arena = Arena::new();
        let mut options = Options::default();
        options.extension.strikethrough = true;

        let root = parse_document(&arena, markdown, &options);

        let mut blocks = Vec::new();
        convert_children(root, 0, &mut blocks);
        Ok(blocks)
    }
}

fn convert_children<'a>(parent: &'a AstNode<'a>, depth: usize, out: &mut Vec<Block>) {
    for node in parent.children() {
        convert_node(node, depth, out);
    }
}

fn convert_node<'a>(node: &'a AstNode<'a>, depth: usize, out: &mut Vec<Block>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Heading(heading) => out.push(Block::heading(
            HeadingLevel::from_markdown(heading.level),
            inline_text(node),
        )),
        NodeValue::Paragraph => {
            let text = inline_text(node);
            if !text.is_empty() {
                out.push(Block::paragraph(text));
            }
        }
        NodeValue::List(list) => {
            for item in node.children() {
                out.extend(list_item(item, list.list_type, depth));
            }
        }
        NodeValue::BlockQuote => out.push(Block::Quote {
            text: quote_text(node),
        }),
        NodeValue::CodeBlock(code) => out.push(Block::Code {
            language: notion_language(&code.info),
            text: normalize(vec![RichText::plain(code.literal.trim_end_matches('\n'))]),
        }),
        NodeValue::ThematicBreak => out.push(Block::Divider),
        NodeValue::HtmlBlock(html) => {
            let literal = html.literal.trim();
            if !literal.is_empty() {
                out.push(Block::paragraph(normalize(vec![RichText::plain(literal)])));
            }
        }
        _ => convert_children(node, depth, out),
    }
}

/// Convert one list item; children deeper than Notion allows are hoisted
/// next to the item.
fn list_item<'a>(item: &'a AstNode<'a>, list_type: ListType, depth: usize) -> Vec<Block> {
    let mut text = Vec::new();
    let mut nested = Vec::new();

    for (index, child) in item.children().enumerate() {
        let is_paragraph = matches!(child.data.borrow().value, NodeValue::Paragraph);
        if index == 0 && is_paragraph {
            text = inline_text(child);
        } else {
            convert_node(child, depth + 1, &mut nested);
        }
    }

    let (children, hoisted) = if depth < MAX_NESTING_DEPTH {
        (nested, Vec::new())
    } else {
        (Vec::new(), nested)
    };

    let block = match list_type {
        ListType::Bullet => Block::BulletedListItem { text, children },
        ListType::Ordered => Block::NumberedListItem { text, children },
    };

    let mut blocks = vec![block];
    blocks.extend(hoisted);
    blocks
}

fn quote_text<'a>(node: &'a AstNode<'a>) -> Vec<RichText> {
    let mut runs = Vec::new();
    for (index, child) in node.children().enumerate() {
        if index > 0 {
            runs.push(RichText::plain("\n"));
        }
        collect_inline(child, &Style::default(), &mut runs);
    }
    normalize(runs)
}

#[derive(Debug, Clone, Default)]
struct Style {
    annotations: Annotations,
    link: Option<String>,
}

impl Style {
    fn run(&self, content: &str) -> RichText {
        RichText::styled(content, self.annotations, self.link.clone())
    }

    fn with(&self, apply: impl FnOnce(&mut Annotations)) -> Self {
        let mut style = self.clone();
        apply(&mut style.annotations);
        style
    }
}

fn inline_text<'a>(node: &'a AstNode<'a>) -> Vec<RichText> {
    let mut runs = Vec::new();
    collect_inline(node, &Style::default(), &mut runs);
    normalize(runs)
}

fn collect_inline<'a>(node: &'a AstNode<'a>, style: &Style, runs: &mut Vec<RichText>) {
    for child in node.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Text(text) => runs.push(style.run(text)),
            NodeValue::Code(code) => runs.push(style.with(|a| a.code = true).run(&code.literal)),
            NodeValue::SoftBreak | NodeValue::LineBreak => runs.push(style.run("\n")),
            NodeValue::HtmlInline(html) => runs.push(style.run(html)),
            NodeValue::Strong => collect_inline(child, &style.with(|a| a.bold = true), runs),
            NodeValue::Emph => collect_inline(child, &style.with(|a| a.italic = true), runs),
            NodeValue::Strikethrough => {
                collect_inline(child, &style.with(|a| a.strikethrough = true), runs)
            }
            NodeValue::Link(link) => {
                let mut linked = style.clone();
                if is_absolute_url(&link.url) {
                    linked.link = Some(link.url.clone());
                }
                collect_inline(child, &linked, runs);
            }
            _ => collect_inline(child, style, runs),
        }
    }
}

/// Notion rejects relative link targets
fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with("mailto:")
}

/// Map a fenced code info string to a Notion language
fn notion_language(info: &str) -> String {
    let tag = info
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let canonical = match tag.as_str() {
        "" | "text" | "txt" | "plain" => "plain text",
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "rs" => "rust",
        "rb" => "ruby",
        "sh" | "zsh" | "console" => "shell",
        "yml" => "yaml",
        "md" => "markdown",
        "cpp" | "cc" | "cxx" => "c++",
        "cs" | "csharp" => "c#",
        "fsharp" => "f#",
        "golang" => "go",
        "dockerfile" => "docker",
        "kt" => "kotlin",
        "objc" => "objective-c",
        "ps1" | "pwsh" => "powershell",
        other => other,
    };

    if NOTION_LANGUAGES.contains(&canonical) {
        canonical.to_string()
    } else {
        "plain text".to_string()
    }
}
