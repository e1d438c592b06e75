//! Line-level Markdown helpers shared by the extractors.
//!
//! None of this is a Markdown parser. The extractors work on lines and only
//! need to recognise headings and fence delimiters.

pub const FENCE: &str = "```";

/// Returns true if the line opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Language tag declared on an opening fence line.
pub fn fence_tag(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix(FENCE)?
        .split_whitespace()
        .next()
}

/// Heading of level two or deeper (`##`, `###`, ...).
pub fn is_subheading(line: &str) -> bool {
    line.trim_start().starts_with("##")
}

/// Section boundary: a level-2+ heading or a fence delimiter.
pub fn is_section_break(line: &str) -> bool {
    is_subheading(line) || is_fence(line)
}

/// Body of the fenced block opened at `lines[open]`.
///
/// Returns the inner lines joined with `\n` and the index of the closing
/// fence, or `None` if the block is never closed.
pub fn read_fenced_block(lines: &[&str], open: usize) -> Option<(String, usize)> {
    let close = (open + 1..lines.len()).find(|&i| is_fence(lines[i]))?;
    Some((lines[open + 1..close].join("\n"), close))
}
