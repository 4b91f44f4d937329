//! Minimal markdown rendering for the markdown analysis variant.
//!
//! The service emits a narrow subset (headings, bullet lists, bold runs,
//! paragraphs), so a small block parser beats pulling in a full markdown
//! stack. Parsing is separate from rendering to keep it testable.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Inline {
    Text(String),
    Strong(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Block {
    Heading { level: u8, spans: Vec<Inline> },
    Bullets(Vec<Vec<Inline>>),
    Paragraph(Vec<Inline>),
}

pub(crate) fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut bullets: Vec<Vec<Inline>> = Vec::new();

    let flush_paragraph = |paragraph: &mut Vec<String>, blocks: &mut Vec<Block>| {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(parse_inline(&paragraph.join(" "))));
            paragraph.clear();
        }
    };
    let flush_bullets = |bullets: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>| {
        if !bullets.is_empty() {
            blocks.push(Block::Bullets(std::mem::take(bullets)));
        }
    };

    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_bullets(&mut bullets, &mut blocks);
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            flush_paragraph(&mut paragraph, &mut blocks);
            bullets.push(parse_inline(rest));
            continue;
        }

        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        if hashes > 0 && trimmed.chars().nth(hashes) == Some(' ') {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_bullets(&mut bullets, &mut blocks);
            blocks.push(Block::Heading {
                level: hashes.min(3) as u8,
                spans: parse_inline(trimmed[hashes + 1..].trim()),
            });
            continue;
        }

        flush_bullets(&mut bullets, &mut blocks);
        paragraph.push(trimmed.to_string());
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_bullets(&mut bullets, &mut blocks);
    blocks
}

/// Splits a line on `**` runs; unbalanced markers fall back to plain text.
fn parse_inline(text: &str) -> Vec<Inline> {
    let pieces: Vec<&str> = text.split("**").collect();
    if pieces.len() % 2 == 0 {
        return vec![Inline::Text(text.to_string())];
    }

    pieces
        .into_iter()
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .map(|(index, piece)| {
            if index % 2 == 1 {
                Inline::Strong(piece.to_string())
            } else {
                Inline::Text(piece.to_string())
            }
        })
        .collect()
}

#[component]
pub fn Markdown(source: String) -> Element {
    let blocks = parse_blocks(&source);

    rsx! {
        div { class: "markdown",
            for block in blocks {
                {render_block(block)}
            }
        }
    }
}

fn render_block(block: Block) -> Element {
    match block {
        Block::Heading { level: 1, spans } => rsx! { h3 { {render_spans(spans)} } },
        Block::Heading { level: 2, spans } => rsx! { h4 { {render_spans(spans)} } },
        Block::Heading { spans, .. } => rsx! { h5 { {render_spans(spans)} } },
        Block::Bullets(items) => rsx! {
            ul {
                for item in items {
                    li { {render_spans(item)} }
                }
            }
        },
        Block::Paragraph(spans) => rsx! { p { {render_spans(spans)} } },
    }
}

fn render_spans(spans: Vec<Inline>) -> Element {
    rsx! {
        for span in spans {
            match span {
                Inline::Text(text) => rsx! { "{text}" },
                Inline::Strong(text) => rsx! { strong { "{text}" } },
            }
        }
    }
}
