//! Resolver module - maps parsed ARNs onto CloudFormation resource types

mod resolve;
pub(crate) mod service;

pub use resolve::resolve;
pub use service::ResourceTypeResolver;
