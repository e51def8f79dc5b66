//! Resolution logic for the resource type resolver

use log::trace;

use crate::arn::utils::normalize_resource_kind;
use crate::arn::{Arn, ArnParser};
use crate::error::{ResolveError, ResolveResult};
use crate::table::ServiceTable;
use crate::types::ResourceType;

const TYPE_NAME_PREFIX: &str = "AWS";

impl super::service::ResourceTypeResolver<'_> {
    /// Parse `arn` and map it onto its CloudFormation resource type.
    ///
    /// Parse failures are returned unchanged as [`ResolveError::Parse`]. The
    /// returned `full_arn` is the input string, byte for byte.
    pub fn resolve(&self, arn: &str) -> ResolveResult<ResourceType> {
        let parsed = self.parser.parse(arn)?;
        let type_name = self.type_name(&parsed)?;

        Ok(ResourceType {
            type_name,
            resource_id: parsed.resource_id().to_string(),
            region: parsed.region().to_string(),
            full_arn: arn.to_string(),
        })
    }

    /// The `AWS::<Service>::<Resource>` name for an already parsed ARN.
    pub fn type_name(&self, arn: &Arn) -> ResolveResult<String> {
        let service = self.table.service(arn.service()).ok_or_else(|| {
            ResolveError::UnsupportedService {
                service: arn.service().to_string(),
            }
        })?;

        let kind = normalize_resource_kind(arn.resource_kind());
        trace!("Looking up {}:{}", arn.service(), kind);

        let resource = service
            .resource(&kind)
            .ok_or_else(|| ResolveError::UnsupportedResourceType {
                service: arn.service().to_string(),
                resource_kind: arn.resource_kind().to_string(),
            })?;

        Ok(format!(
            "{}::{}::{}",
            TYPE_NAME_PREFIX,
            service.service_name(),
            resource
        ))
    }
}

/// Resolve an ARN against `table` with the built-in parser configuration.
pub fn resolve(arn: &str, table: &ServiceTable) -> ResolveResult<ResourceType> {
    let parser = ArnParser::default();
    super::ResourceTypeResolver::new(&parser, table).resolve(arn)
}
