//! Query engine over a built [`KnowledgeBase`].
//!
//! All lookups are linear scans in bucket declaration order, then insertion
//! order within a bucket. There is no ranking: results come back in index
//! order. A category that has no bucket behaves like an empty one.

use crate::knowledge::{Bucket, KnowledgeBase};
use crate::models::{ApiDetail, SearchHit};

/// Read-only view used by the CLI, the shell and tests.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> QueryEngine<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    fn scope(&self, category: Option<&str>) -> Vec<(&'a str, &'a Bucket)> {
        match category {
            Some(c) => self
                .kb
                .buckets()
                .filter(|(name, _)| *name == c)
                .collect(),
            None => self.kb.buckets().collect(),
        }
    }

    /// Case-insensitive substring search over API names, summaries and
    /// parameter names.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for (cat, bucket) in self.scope(category) {
            for (api_name, record) in bucket.iter() {
                let matched = api_name.to_lowercase().contains(&needle)
                    || record
                        .summary
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
                    || record
                        .parameters
                        .iter()
                        .any(|p| p.name.to_lowercase().contains(&needle));
                if matched {
                    hits.push(SearchHit {
                        category: cat.to_string(),
                        api_name: api_name.to_string(),
                        title: record.title.clone(),
                        summary: record.summary.clone(),
                        parameters: record.parameters.clone(),
                        inheritance: record.inheritance.clone(),
                        file_path: record.file_path.clone(),
                    });
                }
            }
        }

        hits
    }

    /// Exact, case-insensitive lookup by API name.
    ///
    /// Also matches the record title with every wrapping backtick removed,
    /// so a title decorated with extra backticks is still found by its bare
    /// name.
    pub fn get(&self, api_name: &str, category: Option<&str>) -> Option<ApiDetail> {
        let wanted = api_name.to_lowercase();

        self.scope(category).into_iter().find_map(|(cat, bucket)| {
            bucket.iter().find_map(|(name, record)| {
                let matched = name.to_lowercase() == wanted
                    || record.title.trim_matches('`').to_lowercase() == wanted;
                matched.then(|| ApiDetail {
                    category: cat.to_string(),
                    api_name: name.to_string(),
                    record: record.clone(),
                })
            })
        })
    }

    /// `"{category}.{api_name}"` for every record in scope.
    pub fn list(&self, category: Option<&str>) -> Vec<String> {
        self.scope(category)
            .into_iter()
            .flat_map(|(cat, bucket)| {
                bucket
                    .iter()
                    .map(move |(name, _)| format!("{}.{}", cat, name))
            })
            .collect()
    }

    /// Record count per category, in declaration order.
    pub fn categories(&self) -> Vec<(String, usize)> {
        self.kb
            .buckets()
            .map(|(name, bucket)| (name.to_string(), bucket.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractRules;
    use crate::knowledge::tests::doc;
    use crate::knowledge::{build, BuildOptions};

    const BOX_DOC: &str = "\
# `Box`

## Overview

A simple box shape.

## Parameters

| Name | Type | Description |
|------|------|-------------|
| size | tuple | box dimensions |

```python
scene.add_entity(gs.morphs.Box(size=(1, 1, 1)))
```
";

    fn fixture() -> KnowledgeBase {
        let docs = vec![
            doc("entity/box.md", BOX_DOC),
            doc("entity/sphere.md", "# `Sphere`\n\n## Overview\n\nA round shape.\n"),
            doc("scene/scene.md", "# `Scene`\n\nHolds every entity.\n"),
            doc("misc/thing.md", "# thing\n\nbox related\n"),
        ];
        build(&docs, &ExtractRules::default(), BuildOptions::default()).0
    }

    #[test]
    fn test_get_box_scenario() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        let detail = engine.get("Box", None).unwrap();
        assert_eq!(detail.category, "entities");
        assert_eq!(detail.api_name, "Box");
        assert_eq!(detail.record.title, "`Box`");
        assert_eq!(detail.record.summary.as_deref(), Some("A simple box shape."));
        assert_eq!(detail.record.parameters.len(), 1);
        assert_eq!(detail.record.parameters[0].name, "size");
        assert_eq!(detail.record.parameters[0].ty, "tuple");
        assert_eq!(detail.record.parameters[0].description, "box dimensions");
        assert_eq!(detail.record.examples.len(), 1);
    }

    #[test]
    fn test_get_case_insensitive() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        assert_eq!(engine.get("box", None), engine.get("BOX", None));
        assert!(engine.get("box", None).is_some());
    }

    #[test]
    fn test_get_with_category() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        assert!(engine.get("Scene", Some("scene")).is_some());
        assert!(engine.get("Scene", Some("entities")).is_none());
        assert!(engine.get("Scene", Some("nope")).is_none());
        assert!(engine.get("missing", None).is_none());
    }

    #[test]
    fn test_search_matches_name_summary_and_parameters() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);

        let by_param: Vec<String> = engine
            .search("SIZE", None)
            .into_iter()
            .map(|h| h.api_name)
            .collect();
        assert_eq!(by_param, vec!["Box"]);

        let by_summary: Vec<String> = engine
            .search("shape", None)
            .into_iter()
            .map(|h| h.api_name)
            .collect();
        assert_eq!(by_summary, vec!["Box", "Sphere"]);

        let by_name = engine.search("scene", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].category, "scene");
    }

    #[test]
    fn test_search_scoped_to_category() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        assert!(engine.search("entity", Some("entities")).is_empty());
        assert_eq!(engine.search("entity", Some("scene")).len(), 1);
    }

    #[test]
    fn test_search_empty_bucket() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        assert!(engine.search("box", Some("couplers")).is_empty());
        assert!(engine.search("box", Some("misc")).is_empty());
    }

    #[test]
    fn test_list_order_and_drop() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        assert_eq!(
            engine.list(None),
            vec!["entities.Box", "entities.Sphere", "scene.Scene"]
        );
        assert_eq!(engine.list(Some("scene")), vec!["scene.Scene"]);
        assert!(!engine.list(None).contains(&"misc.thing".to_string()));
    }

    #[test]
    fn test_categories_counts() {
        let kb = fixture();
        let engine = QueryEngine::new(&kb);
        let counts = engine.categories();
        assert_eq!(counts.len(), 9);
        assert_eq!(counts[0], ("entities".to_string(), 2));
        assert_eq!(counts[3], ("scene".to_string(), 1));
    }
}
