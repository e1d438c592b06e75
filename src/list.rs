//! `apiref list` and `apiref categories`.

use anyhow::Result;
use apiref_core::QueryEngine;

pub fn run_list(engine: &QueryEngine<'_>, category: Option<&str>) -> Result<()> {
    print!("{}", format_list(&engine.list(category)));
    Ok(())
}

pub fn run_categories(engine: &QueryEngine<'_>) -> Result<()> {
    print!("{}", format_categories(&engine.categories()));
    Ok(())
}

pub fn format_list(apis: &[String]) -> String {
    if apis.is_empty() {
        return "No APIs found.\n".to_string();
    }
    let mut out = format!("APIs ({} total):\n", apis.len());
    for (i, api) in apis.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, api));
    }
    out
}

pub fn format_categories(counts: &[(String, usize)]) -> String {
    let mut out = String::from("Categories:\n");
    for (category, count) in counts {
        out.push_str(&format!("  - {:<12} {:>4} APIs\n", category, count));
    }
    out
}
