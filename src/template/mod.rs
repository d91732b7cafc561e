//! CloudFormation-style template model.
//!
//! A template is an insertion-ordered collection of resource declarations and
//! output declarations. Invariants are enforced at insertion time, since a
//! template is built once and never mutated after serialization:
//! - resource logical ids and output names are unique,
//! - an output's `Ref` must name a resource already in the template.

pub mod output;
pub mod resource;
pub mod value;

pub use output::Output;
pub use resource::Resource;
pub use value::{Ref, Tag, Value};

use crate::Result;
use anyhow::bail;
use hashlink::LinkedHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Template {
    #[serde(rename = "Resources")]
    resources: LinkedHashMap<String, Resource>,

    #[serde(rename = "Outputs", skip_serializing_if = "LinkedHashMap::is_empty")]
    outputs: LinkedHashMap<String, Output>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under `logical_id`. Ids must be unique within the
    /// template.
    pub fn add_resource(&mut self, logical_id: impl Into<String>, resource: Resource) -> Result<()> {
        let id = logical_id.into();
        if self.resources.contains_key(&id) {
            bail!("duplicate resource logical id: {}", id);
        }
        self.resources.insert(id, resource);
        Ok(())
    }

    /// Add an output under `name`. If the output value is a `Ref`, the
    /// referenced resource must already be declared.
    pub fn add_output(&mut self, name: impl Into<String>, output: Output) -> Result<()> {
        let name = name.into();
        if self.outputs.contains_key(&name) {
            bail!("duplicate output name: {}", name);
        }
        if let Value::Ref(r) = &output.value {
            if !self.resources.contains_key(&r.logical_id) {
                bail!(
                    "output {} references unknown resource {}",
                    name,
                    r.logical_id
                );
            }
        }
        self.outputs.insert(name, output);
        Ok(())
    }

    pub fn resources(&self) -> impl Iterator<Item = (&String, &Resource)> {
        self.resources.iter()
    }

    pub fn outputs(&self) -> impl Iterator<Item = (&String, &Output)> {
        self.outputs.iter()
    }
}
