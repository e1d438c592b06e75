//! `apiref search`: substring search over the knowledge base.

use anyhow::Result;
use apiref_core::{QueryEngine, SearchHit};

/// Summaries are cut to this many characters in listings.
const SUMMARY_PREVIEW_CHARS: usize = 100;

pub fn run_search(
    engine: &QueryEngine<'_>,
    query: &str,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let hits = engine.search(query, category);
    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        print!("{}", format_hits(query, &hits));
    }
    Ok(())
}

pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = format!(
        "Search results for '{}' ({} total):\n",
        query,
        hits.len()
    );
    for (i, hit) in hits.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, hit.api_name, hit.category));
        if let Some(ref summary) = hit.summary {
            out.push_str(&format!("     {}\n", preview(summary, SUMMARY_PREVIEW_CHARS)));
        }
    }
    out
}

/// First `max` characters, with an ellipsis when cut.
pub(crate) fn preview(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
