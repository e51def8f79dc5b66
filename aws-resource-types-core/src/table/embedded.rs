//! Lookup tables embedded into the binary at compile time

use rust_embed::RustEmbed;
use std::borrow::Cow;

/// File name of the default lookup table inside the embedded folder.
pub(crate) const EMBEDDED_TABLE: &str = "resource_types_lookup.yaml";

#[derive(RustEmbed)]
#[folder = "resources/config"]
#[include = "*.yaml"]
pub(crate) struct LookupTables;

impl LookupTables {
    /// Raw bytes of an embedded lookup document
    pub(crate) fn get_document(name: &str) -> Option<Cow<'static, [u8]>> {
        Self::get(name).map(|file| file.data)
    }
}
