//! # Reference Paths
//!
//! A reference path is a dot-delimited walk from the document root:
//! `$.limits.max` reads field `limits`, then field `max`. The leading `$`
//! is the sentinel that marks the path as a reference; it names no field.
//!
//! Resolution never fails. A step through a non-object or an absent field
//! lands on [`MISSING`](crate::node::MISSING) and stays there for the rest
//! of the walk. Array indices, escaped dots and relative paths are not part
//! of the syntax: every segment is a plain field name.

use std::fmt;

use crate::node::Node;

/// First character of every reference path.
pub const REFERENCE_SENTINEL: char = '$';

/// A string known to start with [`REFERENCE_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferencePath(String);

impl ReferencePath {
    /// Accept `text` when it begins with the sentinel.
    pub fn parse(text: &str) -> Option<Self> {
        if text.starts_with(REFERENCE_SENTINEL) {
            Some(Self(text.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Field names walked from the root, sentinel excluded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').skip(1)
    }

    /// Walk this path from `root`.
    pub fn resolve<'a>(&self, root: &'a Node) -> &'a Node {
        self.segments().fold(root, |node, field| node.get(field))
    }
}

impl fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a dot-delimited `path` against `root`.
///
/// The first segment is discarded whatever it is; a bare `$` yields `root`.
pub fn resolve<'a>(root: &'a Node, path: &str) -> &'a Node {
    path.split('.')
        .skip(1)
        .fold(root, |node, field| node.get(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits_doc() -> Node {
        Node::object([(
            "limits",
            Node::object([("max", Node::Int(100)), ("name", Node::from("cap"))]),
        )])
    }

    #[test]
    fn test_bare_sentinel_is_root() {
        let root = limits_doc();
        assert!(std::ptr::eq(resolve(&root, "$"), &root));
    }

    #[test]
    fn test_nested_field() {
        let root = limits_doc();
        assert_eq!(resolve(&root, "$.limits.max"), &Node::Int(100));
    }

    #[test]
    fn test_absent_field_is_missing() {
        let root = limits_doc();
        assert!(resolve(&root, "$.limits.min").is_missing());
        assert!(resolve(&root, "$.nope.max").is_missing());
    }

    #[test]
    fn test_walk_through_scalar_is_missing() {
        let root = limits_doc();
        assert!(resolve(&root, "$.limits.max.deeper").is_missing());
    }

    #[test]
    fn test_array_index_is_a_field_name() {
        let root = Node::object([("xs", Node::Array(vec![Node::Int(1)]))]);
        assert!(resolve(&root, "$.xs.0").is_missing());
    }

    #[test]
    fn test_empty_segment_is_missing() {
        let root = limits_doc();
        assert!(resolve(&root, "$.limits..max").is_missing());
    }

    #[test]
    fn test_reference_path_parse() {
        assert!(ReferencePath::parse("$.a").is_some());
        assert!(ReferencePath::parse("$").is_some());
        assert!(ReferencePath::parse("a.b").is_none());
        assert!(ReferencePath::parse("").is_none());
    }

    #[test]
    fn test_reference_path_matches_free_function() {
        let root = limits_doc();
        let path = ReferencePath::parse("$.limits.name").unwrap();
        assert_eq!(path.resolve(&root), resolve(&root, path.as_str()));
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["limits", "name"]);
        assert_eq!(path.to_string(), "$.limits.name");
    }
}
