//! `apiref get`: exact lookup of one API by name.

use anyhow::Result;
use apiref_core::{ApiDetail, QueryEngine};

use crate::search::preview;

const EXAMPLE_PREVIEW_CHARS: usize = 200;

pub fn run_get(
    engine: &QueryEngine<'_>,
    api_name: &str,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let detail = engine.get(api_name, category);
    match (detail, json) {
        (Some(detail), true) => println!("{}", serde_json::to_string_pretty(&detail)?),
        (Some(detail), false) => print!("{}", format_detail(&detail)),
        (None, true) => println!("null"),
        (None, false) => println!("API '{}' not found.", api_name),
    }
    Ok(())
}

pub fn format_detail(detail: &ApiDetail) -> String {
    let record = &detail.record;
    let mut out = format!("=== {} ===\n", record.title);
    out.push_str(&format!("Category: {}\n", detail.category));
    out.push_str(&format!("Source:   {}\n", record.relative_path));

    if let Some(ref summary) = record.summary {
        out.push_str(&format!("\nSummary:\n  {}\n", summary));
    }

    if let Some(ref inheritance) = record.inheritance {
        out.push_str("\nInheritance:\n");
        for line in inheritance.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !record.parameters.is_empty() {
        out.push_str("\nParameters:\n");
        for p in &record.parameters {
            out.push_str(&format!("  - {} ({}): {}\n", p.name, p.ty, p.description));
        }
    }

    if !record.examples.is_empty() {
        out.push_str("\nCode Examples:\n");
        for (i, example) in record.examples.iter().enumerate() {
            out.push_str(&format!("  Example {}:\n", i + 1));
            out.push_str("  ```\n");
            out.push_str(&preview(example, EXAMPLE_PREVIEW_CHARS));
            out.push_str("\n  ```\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiref_core::{ApiRecord, Parameter};

    #[test]
    fn test_format_detail_sections() {
        let detail = ApiDetail {
            category: "entities".to_string(),
            api_name: "Box".to_string(),
            record: ApiRecord {
                title: "`Box`".to_string(),
                summary: Some("A simple box shape.".to_string()),
                examples: vec!["box = gs.morphs.Box()".to_string()],
                parameters: vec![Parameter::new("size", "tuple", "box dimensions")],
                inheritance: Some("Morph\n└── Box".to_string()),
                file_path: "/docs/entity/box.md".to_string(),
                relative_path: "entity/box.md".to_string(),
            },
        };
        let out = format_detail(&detail);
        assert!(out.starts_with("=== `Box` ===\nCategory: entities\n"));
        assert!(out.contains("Summary:\n  A simple box shape.\n"));
        assert!(out.contains("Inheritance:\n  Morph\n  └── Box\n"));
        assert!(out.contains("  - size (tuple): box dimensions\n"));
        assert!(out.contains("  Example 1:\n  ```\nbox = gs.morphs.Box()\n  ```\n"));
    }

    #[test]
    fn test_format_detail_minimal() {
        let detail = ApiDetail {
            category: "scene".to_string(),
            api_name: "Scene".to_string(),
            record: ApiRecord {
                title: "Scene".to_string(),
                summary: None,
                examples: Vec::new(),
                parameters: Vec::new(),
                inheritance: None,
                file_path: "/docs/scene/scene.md".to_string(),
                relative_path: "scene/scene.md".to_string(),
            },
        };
        let out = format_detail(&detail);
        assert!(!out.contains("Summary"));
        assert!(!out.contains("Parameters"));
        assert!(!out.contains("Code Examples"));
    }
}
