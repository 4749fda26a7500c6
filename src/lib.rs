//! Basic Math node pack
//!
//! A library of stateless node definitions for node-based visual editors:
//! primitive inputs, type conversions, arithmetic and boolean operators,
//! comparisons, and numeric utilities. Each node exposes declarative port
//! metadata the host renders as widgets and sockets, plus a pure evaluation
//! function from scalar inputs to an ordered tuple of results.
//!
//! Ports declare their types through the variant type-set layer in
//! [`types`]: a port may accept a union of concrete types (`INT,FLOAT`) or
//! the wildcard `*`, and the host asks [`TypeSet::can_connect_to`] (or
//! [`NodeRegistry::can_connect`]) whether two ports may be wired together.

pub mod nodes;
pub mod registry;
pub mod types;
pub mod value;

// Re-export the types hosts interact with
pub use registry::{NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition};
pub use types::{is_wildcard, DataType, TypeMismatch, TypeSet, WILDCARD};
pub use value::Value;

use once_cell::sync::Lazy;

static DEFAULT_REGISTRY: Lazy<NodeRegistry> = Lazy::new(|| {
    let mut registry = NodeRegistry::new();
    nodes::register_all(&mut registry);
    registry
});

/// Process-wide registry with every pack node registered
pub fn default_registry() -> &'static NodeRegistry {
    &DEFAULT_REGISTRY
}
