use schemacheck_core::model::{AttributeKind, AttributeNode, AttributeTree, Snapshot};

/// Optional string attribute
#[allow(dead_code)]
pub fn optional_string() -> AttributeNode {
    AttributeNode::new(AttributeKind::String).optional()
}

/// Required string attribute
#[allow(dead_code)]
pub fn required_string() -> AttributeNode {
    AttributeNode::new(AttributeKind::String).required()
}

/// A resource with a nested `rule` block, shaped like a firewall resource
///
/// ```text
/// acme_firewall
///   name      TypeString  Required
///   location  TypeString  Required ForceNew
///   tags      TypeMap     Optional
///   rule      TypeList    Optional
///     port      TypeInt     Optional
///     protocol  TypeString  Optional Computed
/// ```
#[allow(dead_code)]
pub fn firewall_tree() -> AttributeTree {
    let rule = AttributeTree::new()
        .with_attribute("port", AttributeNode::new(AttributeKind::Int).optional())
        .with_attribute(
            "protocol",
            AttributeNode::new(AttributeKind::String).optional().computed(),
        );

    AttributeTree::new()
        .with_attribute("name", required_string())
        .with_attribute("location", required_string().force_new())
        .with_attribute(
            "tags",
            AttributeNode::new(AttributeKind::Map)
                .optional()
                .with_elem(schemacheck_core::model::Elem::Scalar(AttributeKind::String)),
        )
        .with_attribute(
            "rule",
            AttributeNode::block(AttributeKind::List, rule).optional(),
        )
}

/// Snapshot of provider `acme` with one firewall resource
#[allow(dead_code)]
pub fn acme_snapshot() -> Snapshot {
    Snapshot::new("acme").with_resource("acme_firewall", firewall_tree())
}

/// Single-attribute snapshot for focused rule scenarios
#[allow(dead_code)]
pub fn single_attribute(provider: &str, resource: &str, attr: &str, node: AttributeNode) -> Snapshot {
    Snapshot::new(provider).with_resource(resource, AttributeTree::new().with_attribute(attr, node))
}

/// Replace one nested attribute of the firewall `rule` block
#[allow(dead_code)]
pub fn with_rule_attribute(mut snapshot: Snapshot, attr: &str, node: AttributeNode) -> Snapshot {
    let firewall = snapshot
        .resources
        .get_mut("acme_firewall")
        .expect("fixture has acme_firewall");
    let rule = firewall
        .attributes
        .get_mut("rule")
        .expect("fixture has rule block");
    if let schemacheck_core::model::Elem::Block(tree) = &mut rule.elem {
        tree.attributes.insert(attr.to_string(), node);
    }
    snapshot
}
