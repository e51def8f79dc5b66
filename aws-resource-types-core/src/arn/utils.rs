//! String helpers shared by the parser, the resolver and the table loader.

/// Naive singularization: strips every trailing `s`.
///
/// `restapis` becomes `restapi`, but a keyword that legitimately ends in `s`
/// is mangled as well (`alias` becomes `alia`). Lookup tables must be keyed
/// with that in mind.
pub(crate) fn to_singular(word: &str) -> String {
    word.trim_end_matches('s').to_string()
}

/// Normalize a resource keyword for table lookups: lowercase, `-` removed.
pub fn normalize_resource_kind(kind: &str) -> String {
    kind.to_lowercase().replace('-', "")
}
