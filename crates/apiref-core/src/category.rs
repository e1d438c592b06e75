//! The fixed category table.
//!
//! Documents are grouped by the first directory under the documentation
//! root. Known directory names are mapped onto nine canonical buckets;
//! anything else passes through verbatim and, unless lazy bucket creation is
//! enabled, is dropped by the builder.

/// Canonical buckets in declaration order. Query scans follow this order.
pub const CATEGORIES: [&str; 9] = [
    "entities",
    "materials",
    "options",
    "scene",
    "sensor",
    "solvers",
    "boundaries",
    "couplers",
    "states",
];

const DIRECTORY_MAP: [(&str, &str); 9] = [
    ("entity", "entities"),
    ("material", "materials"),
    ("options", "options"),
    ("scene", "scene"),
    ("sensor", "sensor"),
    ("solvers", "solvers"),
    ("boundaries", "boundaries"),
    ("couplers", "couplers"),
    ("states", "states"),
];

/// Map a top-level directory name onto its canonical category.
pub fn map_directory(token: &str) -> &str {
    DIRECTORY_MAP
        .iter()
        .find(|(dir, _)| *dir == token)
        .map(|(_, category)| *category)
        .unwrap_or(token)
}

/// Derive the category for a `/`-separated path relative to the docs root.
///
/// Files sitting directly in the root use their file name as the token.
pub fn category_for_path(relative_path: &str) -> String {
    let token = relative_path.split('/').next().unwrap_or(relative_path);
    map_directory(token).to_string()
}
