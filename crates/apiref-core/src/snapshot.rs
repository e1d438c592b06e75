//! Snapshot serialization.
//!
//! The snapshot is the whole bucket structure as pretty-printed JSON, keys in
//! insertion order. `serde_json` writes non-ASCII text literally, so
//! localized summaries stay readable in the dump.

use crate::knowledge::KnowledgeBase;

pub fn to_json(kb: &KnowledgeBase) -> serde_json::Result<String> {
    serde_json::to_string_pretty(kb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractRules;
    use crate::knowledge::tests::doc;
    use crate::knowledge::{build, BuildOptions};

    #[test]
    fn test_snapshot_shape() {
        let docs = vec![
            doc("entity/b.md", "# `B`\n\n## 概述\n\n第二个。\n"),
            doc("entity/a.md", "# `A`\n"),
        ];
        let (kb, _) = build(&docs, &ExtractRules::default(), BuildOptions::default());
        let json = to_json(&kb).unwrap();

        assert!(json.contains("第二个。"));
        assert!(json.contains("\n  \"entities\": {"));
        assert!(json.find("\"B\"").unwrap() < json.find("\"A\"").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 9);
        assert_eq!(value["entities"]["B"]["title"], "`B`");
        assert_eq!(value["entities"]["A"]["summary"], serde_json::Value::Null);
        assert!(value["couplers"].as_object().unwrap().is_empty());
    }
}
