//! Service lookup table: ARN service keys to CloudFormation service and resource names
//!
//! Tables are read from a YAML document of the form
//!
//! ```yaml
//! services:
//!   lambda:
//!     service_name: Lambda
//!     resources:
//!       function: Function
//! ```
//!
//! Keys are normalized on load (service keys lowercased, resource keywords
//! lowercased with `-` removed), so `task-definition` and `taskdefinition`
//! are the same entry. A loaded table is never modified.

mod embedded;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::arn::utils::normalize_resource_kind;
use crate::error::{TableError, TableResult};
use embedded::{LookupTables, EMBEDDED_TABLE};

/// Canonical naming for one ARN service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    service_name: String,
    #[serde(default)]
    resources: BTreeMap<String, String>,
}

impl ServiceDescriptor {
    pub fn new<K, V>(
        service_name: impl Into<String>,
        resources: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            service_name: service_name.into(),
            resources: resources
                .into_iter()
                .map(|(kind, name)| (normalize_resource_kind(kind.as_ref()), name.into()))
                .collect(),
        }
    }

    /// The `<Service>` part of `AWS::<Service>::<Resource>`.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Look up the canonical resource name for an already normalized keyword.
    pub fn resource(&self, normalized_kind: &str) -> Option<&str> {
        self.resources.get(normalized_kind).map(String::as_str)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resources
            .iter()
            .map(|(kind, name)| (kind.as_str(), name.as_str()))
    }

    fn normalized(self) -> Self {
        let Self {
            service_name,
            resources,
        } = self;
        Self::new(service_name, resources)
    }
}

/// On-disk shape of a lookup document.
#[derive(Debug, Deserialize)]
struct LookupDocument {
    services: BTreeMap<String, ServiceDescriptor>,
}

/// Mapping from ARN service key to its [`ServiceDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceTable {
    services: BTreeMap<String, ServiceDescriptor>,
}

impl ServiceTable {
    pub fn from_services<K>(services: impl IntoIterator<Item = (K, ServiceDescriptor)>) -> Self
    where
        K: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (key, descriptor) in services {
            let key = key.as_ref().to_lowercase();
            if table.insert(key.clone(), descriptor.normalized()).is_some() {
                log::debug!("Duplicate lookup table entry for service {}, keeping the last", key);
            }
        }
        Self { services: table }
    }

    pub fn from_yaml_str(yaml: &str) -> TableResult<Self> {
        let document: LookupDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::from_services(document.services))
    }

    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
        let table = Self::from_yaml_str(&content)?;
        log::debug!(
            "Loaded lookup table from {} ({} services)",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// The lookup table compiled into the binary.
    pub fn embedded() -> TableResult<Self> {
        let data = LookupTables::get_document(EMBEDDED_TABLE)
            .ok_or(TableError::MissingEmbeddedTable(EMBEDDED_TABLE))?;
        let document: LookupDocument = serde_yaml::from_slice(&data)?;
        let table = Self::from_services(document.services);
        log::debug!("Loaded embedded lookup table ({} services)", table.len());
        Ok(table)
    }

    pub fn service(&self, key: &str) -> Option<&ServiceDescriptor> {
        self.services.get(key)
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &ServiceDescriptor)> {
        self.services.iter().map(|(key, d)| (key.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
