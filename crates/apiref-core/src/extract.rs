//! Section extractors.
//!
//! Each extractor is a pure function over one document's raw text. They are
//! best-effort: a missing section, a malformed table or an unclosed fence
//! yields `None` or an empty list, never an error.
//!
//! | Extractor | Looks for |
//! |-----------|-----------|
//! | [`extract_title`] | first `# Heading` line |
//! | [`extract_summary`] | `## Overview` section, else text after the title |
//! | [`extract_parameters`] | pipe tables under `## ...Parameters...` headings |
//! | [`extract_inheritance`] | fenced block under `## ...Inheritance...` |
//! | [`extract_examples`] | fenced blocks tagged with the example language |

use crate::markdown::{fence_tag, is_fence, is_section_break, is_subheading, read_fenced_block};
use crate::models::Parameter;

/// Heading texts and markers the extractors recognise.
///
/// The documentation set is bilingual, so each marker list carries the
/// localized token and its English equivalent.
#[derive(Debug, Clone)]
pub struct ExtractRules {
    /// Full heading lines that open the summary section, e.g. `## Overview`.
    pub overview_headings: Vec<String>,
    /// Substrings that mark a level-2+ heading as a parameter table.
    pub parameter_markers: Vec<String>,
    /// Substrings that mark a level-2+ heading as an inheritance diagram.
    pub inheritance_markers: Vec<String>,
    /// Fence tag of code examples.
    pub example_language: String,
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self {
            overview_headings: vec!["## 概述".to_string(), "## Overview".to_string()],
            parameter_markers: vec!["参数".to_string(), "Parameters".to_string()],
            inheritance_markers: vec!["继承关系".to_string(), "Inheritance".to_string()],
            example_language: "python".to_string(),
        }
    }
}

/// First `# ` heading in the document, trimmed.
///
/// Only a single `#` qualifies; `## Foo` is not a title.
pub fn extract_title(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Strip one wrapping backtick from each end of a title.
pub fn api_name(title: &str) -> String {
    let name = title.strip_prefix('`').unwrap_or(title);
    name.strip_suffix('`').unwrap_or(name).to_string()
}

/// Text of the `## Overview` section, or the paragraph after the first
/// heading when that section is missing or empty.
pub fn extract_summary(text: &str, rules: &ExtractRules) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    let overview = lines.iter().position(|line| {
        let trimmed = line.trim();
        rules.overview_headings.iter().any(|h| h == trimmed)
    });
    let mut collected = overview
        .map(|i| collect_paragraph(&lines[i + 1..]))
        .unwrap_or_default();

    if collected.is_empty() {
        if let Some(i) = lines.iter().position(|line| line.trim().starts_with('#')) {
            collected = collect_paragraph(&lines[i + 1..]);
        }
    }

    (!collected.is_empty()).then(|| collected.join(" "))
}

/// Non-blank trimmed lines up to the next section break.
fn collect_paragraph<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .take_while(|line| !is_section_break(line))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parameters from every table under a parameter heading, in document order.
///
/// Nested (`###`) parameter headings accumulate into the same list.
pub fn extract_parameters(text: &str, rules: &ExtractRules) -> Vec<Parameter> {
    let lines: Vec<&str> = text.lines().collect();
    let mut parameters = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if is_subheading(lines[i]) && contains_any(lines[i], &rules.parameter_markers) {
            let start = i + 1;
            let end = (start..lines.len())
                .find(|&j| is_section_break(lines[j]))
                .unwrap_or(lines.len());
            parse_table(&lines[start..end], &mut parameters);
            i = end;
        } else {
            i += 1;
        }
    }

    parameters
}

/// Parse a pipe table: header, separator, then data rows.
///
/// Blocks with fewer than three lines are skipped, as are rows with fewer
/// than three cells. Cells past the third are ignored.
fn parse_table(block: &[&str], out: &mut Vec<Parameter>) {
    let first = block.iter().position(|l| !l.trim().is_empty());
    let last = block.iter().rposition(|l| !l.trim().is_empty());
    let rows = match (first, last) {
        (Some(first), Some(last)) => &block[first..=last],
        _ => return,
    };
    if rows.len() < 3 {
        return;
    }

    for row in &rows[2..] {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let cells: Vec<&str> = row.trim_matches('|').split('|').map(str::trim).collect();
        if cells.len() >= 3 {
            out.push(Parameter::new(cells[0], cells[1], cells[2]));
        }
    }
}

/// Inheritance diagram: the first fenced block directly under an
/// inheritance heading. Blank lines between heading and fence are allowed.
///
/// Once a block is read the search ends; an empty block yields `None`.
pub fn extract_inheritance(text: &str, rules: &ExtractRules) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if !is_subheading(line) || !contains_any(line, &rules.inheritance_markers) {
            continue;
        }
        let Some(open) = (i + 1..lines.len()).find(|&j| !lines[j].trim().is_empty()) else {
            continue;
        };
        if !is_fence(lines[open]) {
            continue;
        }
        if let Some((body, _)) = read_fenced_block(&lines, open) {
            let body = body.trim();
            return (!body.is_empty()).then(|| body.to_string());
        }
    }

    None
}

/// Bodies of fenced blocks tagged with the example language.
pub fn extract_examples(text: &str, rules: &ExtractRules) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut examples = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !is_fence(lines[i]) {
            i += 1;
            continue;
        }
        let Some((body, close)) = read_fenced_block(&lines, i) else {
            break;
        };
        if fence_tag(lines[i]) == Some(rules.example_language.as_str()) {
            examples.push(body.trim().to_string());
        }
        i = close + 1;
    }

    examples
}

fn contains_any(line: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| line.contains(m.as_str()))
}
