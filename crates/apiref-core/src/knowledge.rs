//! The knowledge base and its builder.
//!
//! A [`KnowledgeBase`] is an ordered list of category buckets, each an
//! insertion-ordered map from API name to [`ApiRecord`]. It starts with the
//! nine predefined buckets from [`crate::category::CATEGORIES`]; records whose
//! category has no bucket are dropped unless
//! [`BuildOptions::create_missing_categories`] is set.
//!
//! Re-inserting an existing name replaces the record in place, so the entry
//! keeps the position of its first insertion.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::CATEGORIES;
use crate::extract::{self, ExtractRules};
use crate::models::{ApiRecord, Document};

/// Insertion-ordered map from API name to record for one category.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    entries: Vec<(String, ApiRecord)>,
    index: HashMap<String, usize>,
}

impl Bucket {
    /// Insert or replace. Returns the replaced record, if any.
    pub fn insert(&mut self, api_name: String, record: ApiRecord) -> Option<ApiRecord> {
        match self.index.get(&api_name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, record)),
            None => {
                self.index.insert(api_name.clone(), self.entries.len());
                self.entries.push((api_name, record));
                None
            }
        }
    }

    pub fn get(&self, api_name: &str) -> Option<&ApiRecord> {
        self.index.get(api_name).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ApiRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

/// Category → API name → record.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    buckets: Vec<(String, Bucket)>,
}

impl KnowledgeBase {
    /// Empty knowledge base with the nine predefined buckets.
    pub fn new() -> Self {
        Self {
            buckets: CATEGORIES
                .iter()
                .map(|c| (c.to_string(), Bucket::default()))
                .collect(),
        }
    }

    pub fn bucket(&self, category: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, bucket)| bucket)
    }

    fn bucket_mut(&mut self, category: &str) -> Option<&mut Bucket> {
        self.buckets
            .iter_mut()
            .find(|(name, _)| name == category)
            .map(|(_, bucket)| bucket)
    }

    /// Buckets in declaration order, lazily created ones last.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets.iter().map(|(name, bucket)| (name.as_str(), bucket))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(name, _)| name.as_str())
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, b)| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for KnowledgeBase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, bucket) in &self.buckets {
            map.serialize_entry(name, bucket)?;
        }
        map.end()
    }
}

/// Knobs for [`KnowledgeBaseBuilder`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Create a bucket for categories outside the predefined nine instead of
    /// dropping their documents.
    pub create_missing_categories: bool,
}

/// Counts collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub indexed: usize,
    pub untitled: usize,
    pub dropped: usize,
    pub overwritten: usize,
}

/// Runs the extractors over each document and files the result.
pub struct KnowledgeBaseBuilder<'a> {
    rules: &'a ExtractRules,
    options: BuildOptions,
    kb: KnowledgeBase,
    report: BuildReport,
}

impl<'a> KnowledgeBaseBuilder<'a> {
    pub fn new(rules: &'a ExtractRules, options: BuildOptions) -> Self {
        Self {
            rules,
            options,
            kb: KnowledgeBase::new(),
            report: BuildReport::default(),
        }
    }

    pub fn add_document(&mut self, doc: &Document) {
        let Some(title) = doc.title.as_deref() else {
            tracing::debug!(path = %doc.relative_path, "skipping untitled document");
            self.report.untitled += 1;
            return;
        };

        let api_name = extract::api_name(title);
        let record = extract_record(doc, title, self.rules);

        if self.kb.bucket(&doc.category).is_none() && self.options.create_missing_categories {
            tracing::debug!(category = %doc.category, "creating bucket");
            self.kb
                .buckets
                .push((doc.category.clone(), Bucket::default()));
        }

        let Some(bucket) = self.kb.bucket_mut(&doc.category) else {
            tracing::debug!(
                path = %doc.relative_path,
                category = %doc.category,
                "dropping document with unknown category"
            );
            self.report.dropped += 1;
            return;
        };

        if bucket.insert(api_name.clone(), record).is_some() {
            tracing::debug!(
                category = %doc.category,
                api_name = %api_name,
                path = %doc.relative_path,
                "record overwritten"
            );
            self.report.overwritten += 1;
        }
        self.report.indexed += 1;
    }

    pub fn finish(self) -> (KnowledgeBase, BuildReport) {
        (self.kb, self.report)
    }
}

/// Run every extractor over one titled document.
pub fn extract_record(doc: &Document, title: &str, rules: &ExtractRules) -> ApiRecord {
    ApiRecord {
        title: title.to_string(),
        summary: extract::extract_summary(&doc.content, rules),
        examples: extract::extract_examples(&doc.content, rules),
        parameters: extract::extract_parameters(&doc.content, rules),
        inheritance: extract::extract_inheritance(&doc.content, rules),
        file_path: doc.file_path.clone(),
        relative_path: doc.relative_path.clone(),
    }
}

/// Build a knowledge base from documents in the given order.
pub fn build(
    docs: &[Document],
    rules: &ExtractRules,
    options: BuildOptions,
) -> (KnowledgeBase, BuildReport) {
    let mut builder = KnowledgeBaseBuilder::new(rules, options);
    for doc in docs {
        builder.add_document(doc);
    }
    builder.finish()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn doc(relative_path: &str, content: &str) -> Document {
        Document {
            file_path: format!("/docs/{}", relative_path),
            relative_path: relative_path.to_string(),
            category: crate::category::category_for_path(relative_path),
            content: content.to_string(),
            title: extract::extract_title(content),
        }
    }

    #[test]
    fn test_untitled_documents_excluded() {
        let docs = vec![
            doc("entity/none.md", "no heading at all\n## Overview\ntext"),
            doc("entity/box.md", "# Box\n"),
        ];
        let (kb, report) = build(&docs, &ExtractRules::default(), BuildOptions::default());
        assert_eq!(report.untitled, 1);
        assert_eq!(kb.len(), 1);
        for (_, bucket) in kb.buckets() {
            assert!(bucket.get("none").is_none());
        }
    }

    #[test]
    fn test_unknown_category_dropped() {
        let docs = vec![doc("misc/thing.md", "# thing\n\nA thing.")];
        let (kb, report) = build(&docs, &ExtractRules::default(), BuildOptions::default());
        assert_eq!(report.dropped, 1);
        assert_eq!(report.indexed, 0);
        assert!(kb.bucket("misc").is_none());
        assert!(kb.is_empty());
    }

    #[test]
    fn test_lazy_bucket_creation() {
        let docs = vec![doc("misc/thing.md", "# thing\n")];
        let options = BuildOptions {
            create_missing_categories: true,
        };
        let (kb, report) = build(&docs, &ExtractRules::default(), options);
        assert_eq!(report.dropped, 0);
        assert!(kb.bucket("misc").unwrap().get("thing").is_some());
        assert_eq!(kb.categories().last(), Some("misc"));
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let docs = vec![
            doc("entity/a.md", "# `A`\n\nfirst"),
            doc("entity/b.md", "# B\n"),
            doc("entity/a2.md", "# A\n\nsecond"),
        ];
        let (kb, report) = build(&docs, &ExtractRules::default(), BuildOptions::default());
        assert_eq!(report.overwritten, 1);
        let bucket = kb.bucket("entities").unwrap();
        let names: Vec<&str> = bucket.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
        let a = bucket.get("A").unwrap();
        assert_eq!(a.title, "A");
        assert_eq!(a.summary.as_deref(), Some("second"));
        assert_eq!(a.relative_path, "entity/a2.md");
    }

    #[test]
    fn test_same_name_in_two_categories() {
        let docs = vec![doc("entity/x.md", "# X\n"), doc("scene/x.md", "# X\n")];
        let (kb, _) = build(&docs, &ExtractRules::default(), BuildOptions::default());
        assert!(kb.bucket("entities").unwrap().get("X").is_some());
        assert!(kb.bucket("scene").unwrap().get("X").is_some());
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn test_predefined_buckets_in_order() {
        let kb = KnowledgeBase::new();
        let names: Vec<&str> = kb.categories().collect();
        assert_eq!(names, CATEGORIES.to_vec());
    }
}
