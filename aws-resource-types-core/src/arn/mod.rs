//! ARN decomposition (pure Rust, no I/O)
//!
//! An ARN is split on `:` into `arn:partition:service:region:account:resource[:...]`.
//! How the resource segment is read depends on the service and the number of
//! segments, so every ARN is first classified into an [`ArnShape`] and then
//! decomposed according to that shape.

mod config;
pub(crate) mod utils;

use log::debug;
use serde::Serialize;

use crate::error::{ParseError, ParseResult};
pub use config::ParserConfig;
use utils::to_singular;

const ARN_PREFIX: &str = "arn:";

const PARTITION_INDEX: usize = 1;
const SERVICE_INDEX: usize = 2;
const REGION_INDEX: usize = 3;
const ACCOUNT_INDEX: usize = 4;
const RESOURCE_INDEX: usize = 5;
const RESOURCE_ID_INDEX: usize = 6;
const STANDARD_LENGTH: usize = 6;

/// A decomposed ARN.
///
/// `region` is empty for global services such as S3 or IAM, and so is
/// `account_id` for S3 buckets. `resource_kind` and `resource_id` are never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource_kind: String,
    resource_id: String,
}

impl Arn {
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// The service key after alias normalization (`states` reads as `stepfunctions`).
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn resource_kind(&self) -> &str {
        &self.resource_kind
    }

    /// May carry nested `/` segments for hierarchical resources (EKS node groups, ELB listeners).
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }
}

/// How the resource part of an ARN is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArnShape<'a> {
    /// `kind/id...` inside a single segment; trailing colon segments are dropped.
    PrefixStyle,
    /// `kind:id` spread over two segments.
    SevenSegment,
    /// The service has exactly one resource kind and the segment is the id.
    ImplicitType(&'a str),
    /// `[/]kind/id` or a longer relative path ending in `.../kind/id`.
    PathStyle,
}

/// ARN parser driven by a [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct ArnParser {
    config: ParserConfig,
}

impl ArnParser {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decide how the resource segment of an ARN for `service` with
    /// `segment_count` colon-delimited segments is read. First match wins.
    pub fn classify(&self, service: &str, segment_count: usize) -> ArnShape<'_> {
        if self.config.is_prefix_style(service) {
            return ArnShape::PrefixStyle;
        }
        if segment_count > STANDARD_LENGTH {
            return ArnShape::SevenSegment;
        }
        if let Some(kind) = self.config.implicit_resource_kind(service) {
            return ArnShape::ImplicitType(kind);
        }
        ArnShape::PathStyle
    }

    /// Parse an ARN string into its fields.
    pub fn parse(&self, arn: &str) -> ParseResult<Arn> {
        if !arn.starts_with(ARN_PREFIX) {
            return Err(ParseError::InvalidPrefix {
                arn: arn.to_string(),
            });
        }

        let segments: Vec<&str> = arn.split(':').collect();
        if segments.len() < STANDARD_LENGTH {
            return Err(ParseError::InsufficientSegments {
                found: segments.len(),
                arn: arn.to_string(),
            });
        }

        let partition = segments[PARTITION_INDEX];
        if partition.is_empty() {
            return Err(ParseError::MissingSegment {
                segment: "partition",
                arn: arn.to_string(),
            });
        }
        let raw_service = segments[SERVICE_INDEX];
        if raw_service.is_empty() {
            return Err(ParseError::MissingSegment {
                segment: "service",
                arn: arn.to_string(),
            });
        }
        let service = self.config.canonical_service(raw_service);
        if service.is_empty() {
            return Err(ParseError::MissingSegment {
                segment: "service",
                arn: arn.to_string(),
            });
        }

        // Global resources (no region) may also omit the account, as S3 buckets do.
        let region = segments[REGION_INDEX];
        let account_id = segments[ACCOUNT_INDEX];
        if account_id.is_empty() && !region.is_empty() {
            return Err(ParseError::MissingSegment {
                segment: "account",
                arn: arn.to_string(),
            });
        }

        let resource = segments[RESOURCE_INDEX];
        let shape = self.classify(service, segments.len());
        debug!("Parsing {} as {:?} for service {}", arn, shape, service);

        let split = match shape {
            ArnShape::PrefixStyle => split_prefixed_resource(resource),
            ArnShape::SevenSegment => Some((
                to_singular(resource),
                segments[RESOURCE_ID_INDEX].to_string(),
            )),
            ArnShape::ImplicitType(kind) => Some((kind.to_string(), resource.to_string())),
            ArnShape::PathStyle => split_path_resource(resource),
        };

        let (resource_kind, resource_id) = split
            .filter(|(kind, id)| !kind.is_empty() && !id.is_empty())
            .ok_or_else(|| ParseError::InvalidResourceId {
                resource: resource.to_string(),
                arn: arn.to_string(),
            })?;

        Ok(Arn {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource_kind,
            resource_id,
        })
    }
}

/// Parse an ARN with the built-in service tables.
pub fn parse(arn: &str) -> ParseResult<Arn> {
    ArnParser::default().parse(arn)
}

/// `task-definition/family` -> (`task-definition`, `family`); the id keeps any further `/`.
fn split_prefixed_resource(resource: &str) -> Option<(String, String)> {
    resource
        .split_once('/')
        .map(|(kind, id)| (kind.to_string(), id.to_string()))
}

/// `/restapis/abc` -> (`restapi`, `abc`); `/restapis/abc/resources/def` -> (`resource`, `def`).
fn split_path_resource(resource: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = resource.trim_start_matches('/').split('/').collect();
    match parts.as_slice() {
        [] | [_] => None,
        [.., kind, id] => Some((to_singular(kind), (*id).to_string())),
    }
}
