use crate::model::{Element, ElementCounts};

use super::StructureCounter;

/// Lightweight substring heuristics over raw text.
///
/// Line-anchored constructs (rules, headings, bullets) count occurrences
/// right after a newline and at the very start of the text. Fence and
/// admonition counts are marker counts, so a closed block contributes two.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternCounter;

impl StructureCounter for PatternCounter {
    fn count(&self, text: &str) -> ElementCounts {
        Element::ALL
            .into_iter()
            .map(|element| (element, count_element(text, element)))
            .collect()
    }
}

fn count_element(text: &str, element: Element) -> usize {
    match element {
        Element::CodeFence => text.matches("```").count(),
        Element::HorizontalRule => count_at_line_start(text, "---"),
        Element::Heading1 => count_at_line_start(text, "# "),
        Element::Heading2 => count_at_line_start(text, "## "),
        Element::Heading3 => count_at_line_start(text, "### "),
        Element::BulletItem => count_at_line_start(text, "- "),
        Element::Admonition => text.matches(":::").count(),
        Element::Hyperlink => text.matches("](").count(),
        Element::InlineCode => count_inline_code(text),
    }
}

fn count_at_line_start(text: &str, marker: &str) -> usize {
    let after_newline = text
        .match_indices('\n')
        .filter(|(i, _)| text[i + 1..].starts_with(marker))
        .count();
    after_newline + usize::from(text.starts_with(marker))
}

/// Count single-backtick code spans on one line, e.g. `x`.
///
/// The opening backtick must not follow another backtick and the closing one
/// must not be followed by one, so double-backtick spans and fence markers
/// are not counted. Spans are matched left to right without overlap.
fn count_inline_code(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' || (i > 0 && bytes[i - 1] == b'`') {
            i += 1;
            continue;
        }

        let close = bytes[i + 1..]
            .iter()
            .position(|&b| b == b'`' || b == b'\n')
            .map(|p| i + 1 + p);

        match close {
            Some(j)
                if j > i + 1
                    && bytes[j] == b'`'
                    && bytes.get(j + 1).is_none_or(|&b| b != b'`') =>
            {
                count += 1;
                i = j + 1;
            }
            _ => i += 1,
        }
    }

    count
}
