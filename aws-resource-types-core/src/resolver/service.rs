//! Resource type resolver
//!
//! Holds the parser and the lookup table a resolution runs against. Both are
//! borrowed: the resolver is a cheap, read-only view that callers create per
//! use or keep next to a table loaded once at startup.

use crate::arn::ArnParser;
use crate::table::ServiceTable;

/// Maps ARNs onto CloudFormation resource types using a [`ServiceTable`]
#[derive(Debug, Clone, Copy)]
pub struct ResourceTypeResolver<'a> {
    pub(crate) parser: &'a ArnParser,
    pub(crate) table: &'a ServiceTable,
}

impl<'a> ResourceTypeResolver<'a> {
    #[must_use]
    pub fn new(parser: &'a ArnParser, table: &'a ServiceTable) -> Self {
        Self { parser, table }
    }

    pub fn table(&self) -> &'a ServiceTable {
        self.table
    }

    // resolve() and type_name() are implemented in resolve.rs
}
