//! Import of the provider's JSON schema dump
//!
//! The dump mirrors the SDK's resource and schema structs:
//!
//! ```json
//! {
//!   "resources_map": {
//!     "acme_firewall": {
//!       "schema": {
//!         "name": { "type": "TypeString", "required": true, "force_new": true },
//!         "rule": {
//!           "type": "TypeList", "optional": true, "max_items": 10,
//!           "elem": { "schema": { "port": { "type": "TypeInt", "optional": true } } }
//!         },
//!         "tags": { "type": "TypeMap", "optional": true, "elem": { "type": "TypeString" } }
//!       },
//!       "timeouts": { "create": 30, "delete": 30 }
//!     }
//!   },
//!   "data_sources_map": {}
//! }
//! ```
//!
//! `elem` is loosely typed: an object with a `schema` key is a nested block,
//! one with a `type` key is a scalar element.

use std::collections::BTreeMap;
use std::time::Instant;

use schemacheck_core::errors::{CompatError, Result as CoreResult};
use schemacheck_core::model::{
    validate_snapshot, AttributeKind, AttributeNode, AttributeTree, DefaultValue, Elem, Snapshot,
    Timeouts,
};
use schemacheck_core::{log_op_end, log_op_error, log_op_start, TreeExtractor};
use serde_json::{Map, Value};

use crate::errors::{from_compat, invalid_snapshot, Result};

fn invalid(location: &str, reason: impl std::fmt::Display) -> CompatError {
    CompatError::InvalidSnapshot {
        reason: format!("{}: {}", location, reason),
    }
}

fn as_object<'v>(value: &'v Value, location: &str) -> CoreResult<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid(location, "expected an object"))
}

fn flag(obj: &Map<String, Value>, key: &str, location: &str) -> CoreResult<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(invalid(
            &format!("{}.{}", location, key),
            format!("expected a boolean, got {}", other),
        )),
    }
}

fn count(obj: &Map<String, Value>, key: &str, location: &str) -> CoreResult<Option<u32>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                invalid(
                    &format!("{}.{}", location, key),
                    format!("expected a non-negative integer, got {}", value),
                )
            }),
    }
}

fn kind(value: &Value, location: &str) -> CoreResult<AttributeKind> {
    let name = value
        .as_str()
        .ok_or_else(|| invalid(location, "expected a type name"))?;
    match AttributeKind::from_wire(name) {
        Some(kind) if !kind.is_absent() => Ok(kind),
        _ => Err(invalid(location, format!("unknown type '{}'", name))),
    }
}

fn default_value(value: Option<&Value>, location: &str) -> CoreResult<DefaultValue> {
    let default = match value {
        None | Some(Value::Null) => DefaultValue::Absent,
        Some(Value::Bool(b)) => DefaultValue::Bool(*b),
        Some(Value::String(s)) => DefaultValue::String(s.clone()),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => DefaultValue::Int(i),
            (None, Some(f)) => DefaultValue::Float(f),
            (None, None) => return Err(invalid(location, format!("unrepresentable number {}", n))),
        },
        Some(other) => {
            return Err(invalid(
                location,
                format!("default must be a string, number or bool, got {}", other),
            ))
        }
    };
    Ok(default)
}

/// Extracts attribute trees from the provider's schema dump
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderDumpExtractor;

impl ProviderDumpExtractor {
    /// Map one `{schema, timeouts}` object, naming `location` in errors
    pub fn extract_resource(&self, value: &Value, location: &str) -> CoreResult<AttributeTree> {
        let obj = as_object(value, location)?;

        let mut tree = match obj.get("schema") {
            None | Some(Value::Null) => AttributeTree::new(),
            Some(schema) => self.extract_schema_map(schema, &format!("{}.schema", location))?,
        };

        if let Some(timeouts) = obj.get("timeouts").filter(|v| !v.is_null()) {
            tree.timeouts = Some(self.extract_timeouts(timeouts, &format!("{}.timeouts", location))?);
        }

        Ok(tree)
    }

    fn extract_schema_map(&self, value: &Value, location: &str) -> CoreResult<AttributeTree> {
        let mut tree = AttributeTree::new();
        for (name, attribute) in as_object(value, location)? {
            let node = self.extract_attribute(attribute, &format!("{}.{}", location, name))?;
            tree.attributes.insert(name.clone(), node);
        }
        Ok(tree)
    }

    fn extract_attribute(&self, value: &Value, location: &str) -> CoreResult<AttributeNode> {
        let obj = as_object(value, location)?;

        let kind = kind(
            obj.get("type")
                .ok_or_else(|| invalid(location, "missing `type`"))?,
            &format!("{}.type", location),
        )?;

        Ok(AttributeNode {
            kind,
            optional: flag(obj, "optional", location)?,
            required: flag(obj, "required", location)?,
            computed: flag(obj, "computed", location)?,
            force_new: flag(obj, "force_new", location)?,
            default: default_value(obj.get("default"), &format!("{}.default", location))?,
            min_items: count(obj, "min_items", location)?.unwrap_or(0),
            max_items: count(obj, "max_items", location)?.unwrap_or(0),
            elem: self.extract_elem(obj.get("elem"), &format!("{}.elem", location))?,
        })
    }

    fn extract_elem(&self, value: Option<&Value>, location: &str) -> CoreResult<Elem> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Ok(Elem::None);
        };
        let obj = as_object(value, location)?;

        if let Some(schema) = obj.get("schema") {
            return Ok(Elem::Block(
                self.extract_schema_map(schema, &format!("{}.schema", location))?,
            ));
        }
        if let Some(kind_value) = obj.get("type") {
            return Ok(Elem::Scalar(kind(kind_value, &format!("{}.type", location))?));
        }
        Err(invalid(location, "elem has neither `schema` nor `type`"))
    }

    fn extract_timeouts(&self, value: &Value, location: &str) -> CoreResult<Timeouts> {
        let obj = as_object(value, location)?;
        Ok(Timeouts {
            create: count(obj, "create", location)?,
            read: count(obj, "read", location)?,
            update: count(obj, "update", location)?,
            delete: count(obj, "delete", location)?,
        })
    }

    fn extract_map(
        &self,
        root: &Map<String, Value>,
        key: &str,
    ) -> CoreResult<BTreeMap<String, AttributeTree>> {
        let mut trees = BTreeMap::new();
        let Some(value) = root.get(key).filter(|v| !v.is_null()) else {
            return Ok(trees);
        };
        for (name, resource) in as_object(value, key)? {
            let tree = self.extract_resource(resource, &format!("{}.{}", key, name))?;
            trees.insert(name.clone(), tree);
        }
        Ok(trees)
    }
}

impl TreeExtractor<Value> for ProviderDumpExtractor {
    fn extract_tree(&self, source: &Value) -> CoreResult<AttributeTree> {
        self.extract_resource(source, "resource")
    }
}

/// Build a snapshot from a provider schema dump
///
/// The dump does not carry the provider name, so the caller supplies it.
///
/// # Errors
///
/// `InvalidSnapshot` naming the JSON location of the first malformed entry.
pub fn import_provider_dump(provider_name: &str, bytes: &[u8]) -> Result<Snapshot> {
    const OP: &str = "import_provider_dump";

    log_op_start!(OP, provider = provider_name);
    let start = Instant::now();

    let result = import_impl(provider_name, bytes);

    match &result {
        Ok(snapshot) => {
            log_op_end!(
                OP,
                duration_ms = start.elapsed().as_millis() as u64,
                resource_count = snapshot.resources.len() as u64
            );
        }
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        }
    }

    result
}

fn import_impl(provider_name: &str, bytes: &[u8]) -> Result<Snapshot> {
    const OP: &str = "import_provider_dump";

    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|e| invalid_snapshot(OP, format!("schema dump is not valid JSON: {}", e)))?;
    let root = raw
        .as_object()
        .ok_or_else(|| invalid_snapshot(OP, "schema dump root must be an object"))?;

    let extractor = ProviderDumpExtractor;
    let snapshot = Snapshot {
        provider_name: provider_name.to_string(),
        resources: extractor
            .extract_map(root, "resources_map")
            .map_err(|e| from_compat(OP, e))?,
        data_sources: extractor
            .extract_map(root, "data_sources_map")
            .map_err(|e| from_compat(OP, e))?,
    };

    validate_snapshot(&snapshot).map_err(|e| from_compat(OP, e))?;
    Ok(snapshot)
}
