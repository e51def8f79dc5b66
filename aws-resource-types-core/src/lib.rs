//! This crate provides the core logic for AWS Resource Types:
//! - ARN decomposition into partition, service, region, account, resource kind and id
//! - Resolution of ARNs to CloudFormation resource type names (`AWS::Lambda::Function`)
//! - The service lookup table, embedded or loaded from YAML
//!
//! ```
//! use aws_resource_types_core::{resolve, ServiceTable};
//!
//! let table = ServiceTable::embedded().expect("embedded table");
//! let resolved = resolve(
//!     "arn:aws:lambda:us-west-2:000000000000:function:my-function",
//!     &table,
//! )
//! .expect("should resolve");
//! assert_eq!(resolved.type_name, "AWS::Lambda::Function");
//! assert_eq!(resolved.resource_id, "my-function");
//! ```

mod arn;
mod error;
mod resolver;
mod table;
mod types;

// Re-exports for a small, focused public API
pub use arn::utils::normalize_resource_kind;
pub use arn::{parse, Arn, ArnParser, ArnShape, ParserConfig};
pub use error::{
    ConfigError, ConfigResult, ParseError, ParseResult, ResolveError, ResolveResult, TableError,
    TableResult,
};
pub use resolver::{resolve, ResourceTypeResolver};
pub use table::{ServiceDescriptor, ServiceTable};
pub use types::ResourceType;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolving_sample_arn() {
        let table = ServiceTable::embedded().expect("should load");
        let resolved = resolve(
            "arn:aws:apigateway:us-west-2:000000000000:/restapis/wymjfx3iie",
            &table,
        )
        .expect("should resolve");
        assert_eq!(resolved.type_name, "AWS::ApiGateway::RestApi");
        assert_eq!(resolved.resource_id, "wymjfx3iie");
        assert_eq!(resolved.region, "us-west-2");
    }
}
