//! The schema object a keyword sits in.

use jsv_core::Node;

use crate::keyword::KeywordCode;
use crate::types::JsonType;

/// Schema object enclosing a keyword. Keywords read their siblings
/// through it: the declared `type`, error code overrides, their own value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentSchema {
    node: Node,
}

impl ParentSchema {
    pub fn new(node: Node) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Value of keyword `name`; `Missing` when absent.
    pub fn keyword(&self, name: &str) -> &Node {
        self.node.get(name)
    }

    /// The declared `type`, when it is a single known type name.
    /// Type arrays (`["integer", "null"]`) declare no single category.
    pub fn declared_type(&self) -> Option<JsonType> {
        match self.keyword("type") {
            Node::String(name) => JsonType::parse(name),
            _ => None,
        }
    }

    /// Error code override for `keyword`, read from `<keyword>ErrorCode`.
    pub fn custom_error_code(&self, keyword: &KeywordCode) -> Option<String> {
        match self.keyword(&keyword.error_code_key()) {
            Node::String(code) if !code.is_empty() => Some(code.clone()),
            _ => None,
        }
    }
}
