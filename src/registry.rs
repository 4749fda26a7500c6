//! Node metadata, factory and registry system
//!
//! Nodes describe themselves declaratively: a [`NodeMetadata`] carries the
//! identity, category, and port contract the host editor renders, and the
//! registry maps node type names to metadata providers and evaluation
//! functions. Connection validity between two ports is decided by the
//! type-set layer in [`crate::types`].

use crate::types::{TypeMismatch, TypeSet};
use crate::value::Value;
use log::{debug, warn};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the parent category
    pub fn parent(&self) -> Option<NodeCategory> {
        if self.path.len() > 1 {
            Some(NodeCategory {
                path: self.path[..self.path.len() - 1].to_vec(),
            })
        } else {
            None
        }
    }

    /// Check if this category is a child of another
    pub fn is_child_of(&self, other: &NodeCategory) -> bool {
        self.path.len() > other.path.len() && self.path[..other.path.len()] == other.path
    }

    /// Get display string for UI
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }
}

// Standard pack categories
impl NodeCategory {
    pub fn primitives() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Primitives"])
    }
    pub fn arithmetic() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Arithmetic"])
    }
    pub fn boolean() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Boolean"])
    }
    pub fn conversion() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Conversion"])
    }
    pub fn utility() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Utility"])
    }
    pub fn constants() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Constants"])
    }
    pub fn comparison() -> Self {
        Self::new(&[crate::nodes::PACK_NAME, "Comparison"])
    }
}

/// Port declaration: name, accepted types, and widget hints
///
/// The UI hints (default, bounds, step, choices) are rendered by the host
/// and have no effect on connection compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct PortDefinition {
    pub name: String,
    pub type_set: TypeSet,
    pub optional: bool,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub step: Option<Value>,
    pub choices: Vec<String>,
}

impl PortDefinition {
    /// Create a required port
    pub fn required(name: &str, type_set: impl Into<TypeSet>) -> Self {
        Self {
            name: name.to_string(),
            type_set: type_set.into(),
            optional: false,
            description: None,
            default: None,
            min: None,
            max: None,
            step: None,
            choices: Vec::new(),
        }
    }

    /// Create an optional port
    pub fn optional(name: &str, type_set: impl Into<TypeSet>) -> Self {
        Self {
            optional: true,
            ..Self::required(name, type_set)
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the default value the host widget starts from
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set numeric bounds for the host widget
    pub fn with_range(mut self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self.max = Some(max.into());
        self
    }

    /// Set the widget step size
    pub fn with_step(mut self, step: impl Into<Value>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Restrict the port to an enumerated choice list
    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = choices.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Declarative node metadata - the single source of truth for node identity,
/// categorization, and port contract
#[derive(Debug, Clone, Serialize)]
pub struct NodeMetadata {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub icon: &'static str,
    pub category: NodeCategory,
    pub tags: Vec<&'static str>,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            icon: "➕",
            category,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Look up a declared input port by name
    pub fn input(&self, name: &str) -> Option<&PortDefinition> {
        self.inputs.iter().find(|p| p.name == name)
    }

    /// Look up a declared output port by name
    pub fn output(&self, name: &str) -> Option<&PortDefinition> {
        self.outputs.iter().find(|p| p.name == name)
    }

    /// Validate the declared types of a set of supplied inputs against this
    /// node's port table
    ///
    /// Variant-aware declarations (wildcard or multi-tag sets) are accepted
    /// unconditionally: the subset check already ran when the wire was drawn.
    /// Keys with no matching port are ignored. A plain declaration must be
    /// compatible with the port's declared set, otherwise the first mismatch
    /// is returned.
    pub fn validate_input_types(
        &self,
        supplied: &HashMap<String, TypeSet>,
    ) -> Result<(), TypeMismatch> {
        for (key, declared) in supplied {
            if declared.is_variant() {
                continue;
            }
            let expected = match self.input(key) {
                Some(port) => &port.type_set,
                None => continue,
            };
            if !declared.can_connect_to(expected) {
                return Err(TypeMismatch {
                    key: key.clone(),
                    found: declared.clone(),
                    expected: expected.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate a batch of supplied input mappings, stopping at the first
    /// failure
    pub fn validate_input_type_batches(
        &self,
        batches: &[HashMap<String, TypeSet>],
    ) -> Result<(), TypeMismatch> {
        for batch in batches {
            self.validate_input_types(batch)?;
        }
        Ok(())
    }
}

/// Node factory trait: declarative metadata plus a pure evaluation function
///
/// `evaluate` receives concrete values ordered as the declared input ports
/// and returns the fixed ordered tuple of results. Evaluation is total:
/// numeric failure yields a sentinel value (infinity, NaN, or zero for
/// integer nodes), never a panic.
pub trait NodeFactory: Send + Sync {
    /// Get comprehensive node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Evaluate the node on concrete input values
    fn evaluate(inputs: &[Value]) -> Vec<Value>
    where
        Self: Sized;
}

/// Function pointer types for registry dispatch
type Evaluator = fn(&[Value]) -> Vec<Value>;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry mapping node type names to factories
#[derive(Default)]
pub struct NodeRegistry {
    evaluators: BTreeMap<String, Evaluator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();
        debug!("Registering node type: {}", node_type);

        self.evaluators.insert(node_type.clone(), T::evaluate);
        self.metadata_providers.insert(node_type.clone(), T::metadata);
        self.categories
            .entry(metadata.category.clone())
            .or_default()
            .push(node_type);
    }

    /// All registered node type names, sorted
    pub fn node_types(&self) -> Vec<&str> {
        self.evaluators.keys().map(String::as_str).collect()
    }

    /// Get metadata for a node type without evaluating it
    pub fn metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// Evaluate a node by type name
    pub fn evaluate(&self, node_type: &str, inputs: &[Value]) -> Option<Vec<Value>> {
        match self.evaluators.get(node_type) {
            Some(evaluator) => Some(evaluator(inputs)),
            None => {
                warn!("No evaluator registered for node type: {}", node_type);
                None
            }
        }
    }

    /// Node types registered under a category
    pub fn node_types_in_category(&self, category: &NodeCategory) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All categories with registered nodes
    pub fn categories(&self) -> Vec<&NodeCategory> {
        self.categories.keys().collect()
    }

    /// Display names for the host's node menu, with the pack postfix
    pub fn display_names(&self) -> BTreeMap<String, String> {
        self.metadata_providers
            .iter()
            .map(|(node_type, provider)| {
                let meta = provider();
                (
                    node_type.clone(),
                    format!("{} {}", meta.display_name, crate::nodes::DISPLAY_POSTFIX),
                )
            })
            .collect()
    }

    /// Decide whether a wire from one node's output may attach to another
    /// node's input
    pub fn can_connect(
        &self,
        from_type: &str,
        output_name: &str,
        to_type: &str,
        input_name: &str,
    ) -> bool {
        let producer = match self.metadata(from_type).and_then(|m| {
            m.output(output_name).map(|p| p.type_set.clone())
        }) {
            Some(type_set) => type_set,
            None => {
                warn!("Unknown output port {}.{}", from_type, output_name);
                return false;
            }
        };
        let consumer = match self.metadata(to_type).and_then(|m| {
            m.input(input_name).map(|p| p.type_set.clone())
        }) {
            Some(type_set) => type_set,
            None => {
                warn!("Unknown input port {}.{}", to_type, input_name);
                return false;
            }
        };
        let ok = producer.can_connect_to(&consumer);
        debug!(
            "Connection {}.{} ({}) -> {}.{} ({}): {}",
            from_type, output_name, producer, to_type, input_name, consumer,
            if ok { "allowed" } else { "rejected" }
        );
        ok
    }

    /// Export the full node catalog as JSON for a host handshake
    pub fn catalog_json(&self) -> serde_json::Result<String> {
        let catalog: Vec<NodeMetadata> = self
            .metadata_providers
            .values()
            .map(|provider| provider())
            .collect();
        serde_json::to_string_pretty(&catalog)
    }
}
