//! Parser configuration: the static service tables that drive ARN shape dispatch.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Services whose resource segment reads `kind/id...`.
const PREFIX_STYLE_SERVICES: &[&str] = &[
    "ecs",
    "eks",
    "ecr",
    "elasticloadbalancingv2",
    "events",
    "sagemaker",
];

/// Services with a single resource kind that the ARN never spells out.
const IMPLICIT_TYPE_SERVICES: &[(&str, &str)] =
    &[("s3", "bucket"), ("sns", "topic"), ("sqs", "queue")];

/// ARN service identifiers that are looked up under a different key.
const SERVICE_ALIASES: &[(&str, &str)] = &[
    ("acm", "acmpca"),
    ("catalog", "servicecatalog"),
    ("elasticfilesystem", "efs"),
    ("elasticloadbalancing", "elasticloadbalancingv2"),
    ("states", "stepfunctions"),
];

/// Static tables consulted by [`ArnParser`](super::ArnParser).
///
/// The JSON form uses the keys `prefixStyleServices`, `implicitTypeServices`
/// and `serviceAliases`. Any key left out of a document keeps its built-in
/// value, so a document only needs to carry the tables it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "default_prefix_style_services")]
    pub prefix_style_services: BTreeSet<String>,
    #[serde(default = "default_implicit_type_services")]
    pub implicit_type_services: BTreeMap<String, String>,
    #[serde(default = "default_service_aliases")]
    pub service_aliases: BTreeMap<String, String>,
}

fn default_prefix_style_services() -> BTreeSet<String> {
    PREFIX_STYLE_SERVICES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_implicit_type_services() -> BTreeMap<String, String> {
    IMPLICIT_TYPE_SERVICES
        .iter()
        .map(|(service, kind)| ((*service).to_string(), (*kind).to_string()))
        .collect()
}

fn default_service_aliases() -> BTreeMap<String, String> {
    SERVICE_ALIASES
        .iter()
        .map(|(alias, service)| ((*alias).to_string(), (*service).to_string()))
        .collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prefix_style_services: default_prefix_style_services(),
            implicit_type_services: default_implicit_type_services(),
            service_aliases: default_service_aliases(),
        }
    }
}

impl ParserConfig {
    /// A configuration with every table empty. Every ARN is then parsed
    /// by segment count and path shape alone.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prefix_style_services: BTreeSet::new(),
            implicit_type_services: BTreeMap::new(),
            service_aliases: BTreeMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_json_str(&content)?;
        log::debug!(
            "Loaded parser configuration from {}: {} prefix-style, {} implicit-type, {} aliases",
            path.display(),
            config.prefix_style_services.len(),
            config.implicit_type_services.len(),
            config.service_aliases.len()
        );
        Ok(config)
    }

    #[must_use]
    pub fn with_prefix_style_service(mut self, service: impl Into<String>) -> Self {
        self.prefix_style_services.insert(service.into());
        self
    }

    #[must_use]
    pub fn with_implicit_type_service(
        mut self,
        service: impl Into<String>,
        resource_kind: impl Into<String>,
    ) -> Self {
        self.implicit_type_services
            .insert(service.into(), resource_kind.into());
        self
    }

    #[must_use]
    pub fn with_service_alias(
        mut self,
        alias: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        self.service_aliases.insert(alias.into(), service.into());
        self
    }

    /// Map an ARN service identifier to the key used for lookups.
    pub fn canonical_service<'a>(&'a self, service: &'a str) -> &'a str {
        self.service_aliases
            .get(service)
            .map_or(service, String::as_str)
    }

    pub fn is_prefix_style(&self, service: &str) -> bool {
        self.prefix_style_services.contains(service)
    }

    pub fn implicit_resource_kind(&self, service: &str) -> Option<&str> {
        self.implicit_type_services.get(service).map(String::as_str)
    }
}
