//! Core types shared across schemacheck facilities
//!
//! This crate provides the foundational vocabulary used by both the error
//! handling and logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
