use serde::{Deserialize, Serialize};
use std::fmt;

use super::tree::AttributeTree;

/// Primitive type tag of an attribute
///
/// Wire names match the provider SDK's type constants. The empty string
/// deserializes to [`AttributeKind::Absent`], the sentinel for "this attribute
/// did not exist in the snapshot".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeKind {
    #[default]
    #[serde(rename = "")]
    Absent,
    #[serde(rename = "TypeString")]
    String,
    #[serde(rename = "TypeInt")]
    Int,
    #[serde(rename = "TypeFloat")]
    Float,
    #[serde(rename = "TypeBool")]
    Bool,
    #[serde(rename = "TypeList")]
    List,
    #[serde(rename = "TypeSet")]
    Set,
    #[serde(rename = "TypeMap")]
    Map,
}

impl AttributeKind {
    /// Wire name of the kind (`""` for the absent sentinel)
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Absent => "",
            AttributeKind::String => "TypeString",
            AttributeKind::Int => "TypeInt",
            AttributeKind::Float => "TypeFloat",
            AttributeKind::Bool => "TypeBool",
            AttributeKind::List => "TypeList",
            AttributeKind::Set => "TypeSet",
            AttributeKind::Map => "TypeMap",
        }
    }

    /// Parse a wire name; `None` for unknown names
    pub fn from_wire(name: &str) -> Option<Self> {
        let kind = match name {
            "" => AttributeKind::Absent,
            "TypeString" => AttributeKind::String,
            "TypeInt" => AttributeKind::Int,
            "TypeFloat" => AttributeKind::Float,
            "TypeBool" => AttributeKind::Bool,
            "TypeList" => AttributeKind::List,
            "TypeSet" => AttributeKind::Set,
            "TypeMap" => AttributeKind::Map,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeKind::Absent)
    }

    /// List or set: the only kinds that may carry a nested block
    pub fn is_collection(&self) -> bool {
        matches!(self, AttributeKind::List | AttributeKind::Set)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Absent => f.write_str("<absent>"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Default value of an attribute
///
/// Compared by value. An integer and a float compare equal when they are
/// numerically equal, since a JSON round trip may turn one into the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl DefaultValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, DefaultValue::Absent)
    }
}

/// Exact comparison of an integer with a float, without rounding either
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63; every integral f64 in [-2^63, 2^63) converts to i64 exactly
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) && f as i64 == i
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DefaultValue::Absent, DefaultValue::Absent) => true,
            (DefaultValue::Bool(a), DefaultValue::Bool(b)) => a == b,
            (DefaultValue::Int(a), DefaultValue::Int(b)) => a == b,
            (DefaultValue::Float(a), DefaultValue::Float(b)) => a == b,
            (DefaultValue::Int(i), DefaultValue::Float(f))
            | (DefaultValue::Float(f), DefaultValue::Int(i)) => int_equals_float(*i, *f),
            (DefaultValue::String(a), DefaultValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Absent => f.write_str("<none>"),
            DefaultValue::Bool(b) => write!(f, "{}", b),
            DefaultValue::Int(i) => write!(f, "{}", i),
            DefaultValue::Float(x) => write!(f, "{}", x),
            DefaultValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

/// Element payload of a collection attribute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elem {
    #[default]
    None,
    /// Collection of primitive values
    Scalar(AttributeKind),
    /// Collection of records with their own attributes
    Block(AttributeTree),
}

impl Elem {
    pub fn is_none(&self) -> bool {
        matches!(self, Elem::None)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// One named configuration attribute
///
/// The name lives in the owning [`AttributeTree`]. Serialized field names
/// follow the provider SDK's schema fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeNode {
    #[serde(rename = "type", default)]
    pub kind: AttributeKind,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub computed: bool,

    /// Changing the value replaces the resource
    #[serde(default, skip_serializing_if = "is_false")]
    pub force_new: bool,

    #[serde(default, skip_serializing_if = "DefaultValue::is_absent")]
    pub default: DefaultValue,

    /// 0 means unset
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_items: u32,

    /// 0 means unbounded
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_items: u32,

    #[serde(default, skip_serializing_if = "Elem::is_none")]
    pub elem: Elem,
}

impl AttributeNode {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Node standing in for an attribute missing from a snapshot
    pub fn absent() -> Self {
        Self::default()
    }

    /// List or set of nested records
    pub fn block(kind: AttributeKind, tree: AttributeTree) -> Self {
        Self::new(kind).with_elem(Elem::Block(tree))
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_min_items(mut self, min_items: u32) -> Self {
        self.min_items = min_items;
        self
    }

    pub fn with_max_items(mut self, max_items: u32) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_elem(mut self, elem: Elem) -> Self {
        self.elem = elem;
        self
    }

    /// True exactly when the node is list- or set-typed and carries a nested
    /// block. This is the only decision the differ recurses on.
    pub fn is_block(&self) -> bool {
        self.kind.is_collection() && matches!(self.elem, Elem::Block(_))
    }

    /// The nested tree, if this node is a block
    pub fn nested(&self) -> Option<&AttributeTree> {
        match &self.elem {
            Elem::Block(tree) if self.kind.is_collection() => Some(tree),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_block_requires_collection_and_block_elem() {
        let tree = AttributeTree::new().with_attribute("port", AttributeNode::new(AttributeKind::Int));

        assert!(AttributeNode::block(AttributeKind::List, tree.clone()).is_block());
        assert!(AttributeNode::block(AttributeKind::Set, tree.clone()).is_block());
        assert!(!AttributeNode::block(AttributeKind::Map, tree).is_block());
        assert!(!AttributeNode::new(AttributeKind::List)
            .with_elem(Elem::Scalar(AttributeKind::String))
            .is_block());
        assert!(!AttributeNode::new(AttributeKind::List).is_block());
    }

    #[test]
    fn test_default_value_numeric_equality() {
        assert_eq!(DefaultValue::Int(3), DefaultValue::Float(3.0));
        assert_ne!(DefaultValue::Int(3), DefaultValue::Float(3.5));
        assert_ne!(DefaultValue::from("3"), DefaultValue::Int(3));
        assert_eq!(DefaultValue::Absent, DefaultValue::Absent);
        assert_ne!(DefaultValue::Absent, DefaultValue::Bool(false));
    }

    #[test]
    fn test_default_value_large_int_compares_exactly() {
        // 2^53 + 1 has no f64 representation; the nearest float is 2^53
        assert_ne!(
            DefaultValue::Int(9_007_199_254_740_993),
            DefaultValue::Float(9_007_199_254_740_992.0)
        );
        assert_eq!(
            DefaultValue::Float(9_007_199_254_740_992.0),
            DefaultValue::Int(9_007_199_254_740_992)
        );
        assert_eq!(DefaultValue::Int(i64::MIN), DefaultValue::Float(-9_223_372_036_854_775_808.0));
        assert_ne!(DefaultValue::Int(i64::MAX), DefaultValue::Float(9_223_372_036_854_775_808.0));
        assert_ne!(DefaultValue::Int(0), DefaultValue::Float(f64::NAN));
    }

    #[test]
    fn test_kind_wire_names() {
        let json = serde_json::to_string(&AttributeKind::String).unwrap();
        assert_eq!(json, "\"TypeString\"");
        let absent: AttributeKind = serde_json::from_str("\"\"").unwrap();
        assert_eq!(absent, AttributeKind::Absent);
        assert_eq!(AttributeKind::from_wire("TypeSet"), Some(AttributeKind::Set));
        assert_eq!(AttributeKind::from_wire("TypeBlob"), None);
    }

    #[test]
    fn test_node_serialization_omits_unset_fields() {
        let node = AttributeNode::new(AttributeKind::Bool).optional();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"type": "TypeBool", "optional": true}));
    }

    #[test]
    fn test_default_value_deserializes_by_shape() {
        let node: AttributeNode =
            serde_json::from_str(r#"{"type": "TypeInt", "default": 30}"#).unwrap();
        assert_eq!(node.default, DefaultValue::Int(30));

        let node: AttributeNode =
            serde_json::from_str(r#"{"type": "TypeString", "default": "foo"}"#).unwrap();
        assert_eq!(node.default, DefaultValue::from("foo"));
    }
}
