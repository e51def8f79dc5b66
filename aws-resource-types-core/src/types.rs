//! Value types returned by the resolver

use serde::{Deserialize, Serialize};

/// A CloudFormation resource type resolved from an ARN
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    /// `AWS::<Service>::<Resource>`, e.g. `AWS::Lambda::Function`
    pub type_name: String,
    pub resource_id: String,
    /// Empty for global services
    pub region: String,
    /// The ARN exactly as it was passed in
    pub full_arn: String,
}
