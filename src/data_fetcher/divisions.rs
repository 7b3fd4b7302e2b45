//! Static division identifier table
//!
//! The standings service identifies divisions by numeric id; display names
//! are resolved locally from this table. The table is process-wide constant
//! configuration and covers exactly the six current divisions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static DIVISION_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("200", "AL West"),
        ("201", "AL East"),
        ("202", "AL Central"),
        ("203", "NL West"),
        ("204", "NL East"),
        ("205", "NL Central"),
    ])
});

/// Resolves a division identifier to its display name.
///
/// Returns `None` for identifiers not in the table; callers fall back to the
/// "Unknown Division" sentinel rather than failing the transformation.
pub fn division_name(id: &str) -> Option<&'static str> {
    DIVISION_NAMES.get(id).copied()
}
