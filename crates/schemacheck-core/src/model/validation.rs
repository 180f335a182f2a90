//! Structural checks on snapshots
//!
//! The differ and the rule engine assume well-formed input and never call
//! into this module. Producers call [`validate_snapshot`] before handing a
//! snapshot over.

use crate::errors::{CompatError, Result};

use super::attribute::{AttributeKind, AttributeNode, Elem};
use super::path::AttributePath;
use super::snapshot::Snapshot;
use super::tree::AttributeTree;

fn walk_tree<F>(tree: &AttributeTree, path: &AttributePath, visit: &mut F)
where
    F: FnMut(&AttributePath, &AttributeNode),
{
    for (name, node) in &tree.attributes {
        let child = path.child(name);
        visit(&child, node);
        if let Elem::Block(nested) = &node.elem {
            walk_tree(nested, &child, visit);
        }
    }
}

/// Visit every attribute of every resource and data source, depth first
fn walk_snapshot<F>(snapshot: &Snapshot, mut visit: F)
where
    F: FnMut(&AttributePath, &AttributeNode),
{
    for (name, tree) in &snapshot.resources {
        walk_tree(tree, &AttributePath::resource(name.as_str()), &mut visit);
    }
    for (name, tree) in &snapshot.data_sources {
        walk_tree(tree, &AttributePath::data_source(name), &mut visit);
    }
}

/// Find attributes with a nested block whose kind is not list or set
///
/// Returns list of (path, kind) tuples
pub fn find_blocks_on_scalars(snapshot: &Snapshot) -> Vec<(String, AttributeKind)> {
    let mut found = Vec::new();
    walk_snapshot(snapshot, |path, node| {
        if matches!(node.elem, Elem::Block(_)) && !node.kind.is_collection() {
            found.push((path.to_string(), node.kind));
        }
    });
    found
}

/// Find attributes present in the snapshot but typed with the absent sentinel
pub fn find_absent_kinds(snapshot: &Snapshot) -> Vec<String> {
    let mut found = Vec::new();
    walk_snapshot(snapshot, |path, node| {
        if node.kind.is_absent() {
            found.push(path.to_string());
        }
    });
    found
}

/// Find attributes whose min_items exceeds a non-zero max_items
///
/// Returns list of (path, min_items, max_items) tuples
pub fn find_invalid_item_bounds(snapshot: &Snapshot) -> Vec<(String, u32, u32)> {
    let mut found = Vec::new();
    walk_snapshot(snapshot, |path, node| {
        if node.max_items != 0 && node.min_items > node.max_items {
            found.push((path.to_string(), node.min_items, node.max_items));
        }
    });
    found
}

/// Find attributes marked both optional and required
pub fn find_conflicting_cardinality(snapshot: &Snapshot) -> Vec<String> {
    let mut found = Vec::new();
    walk_snapshot(snapshot, |path, node| {
        if node.optional && node.required {
            found.push(path.to_string());
        }
    });
    found
}

/// Validate a snapshot's structure
///
/// # Errors
/// Returns the first defect found. For exhaustive reporting call the
/// individual `find_*` functions.
pub fn validate_snapshot(snapshot: &Snapshot) -> Result<()> {
    if snapshot.provider_name.trim().is_empty() {
        return Err(CompatError::InvalidSnapshot {
            reason: "provider name is empty".to_string(),
        });
    }

    if let Some((path, kind)) = find_blocks_on_scalars(snapshot).into_iter().next() {
        return Err(CompatError::BlockOnScalar {
            path,
            kind: kind.to_string(),
        });
    }

    if let Some(path) = find_absent_kinds(snapshot).into_iter().next() {
        return Err(CompatError::AbsentKind { path });
    }

    if let Some((path, min, max)) = find_invalid_item_bounds(snapshot).into_iter().next() {
        return Err(CompatError::InvalidItemBounds { path, min, max });
    }

    if let Some(path) = find_conflicting_cardinality(snapshot).into_iter().next() {
        return Err(CompatError::ConflictingCardinality { path });
    }

    Ok(())
}
