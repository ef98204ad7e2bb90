//! Station name normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a station name into the form used for uniqueness checks.
///
/// Decomposes to NFD and drops combining marks (so "Estación" and
/// "Estacion" collide), lowercases, trims, and collapses runs of
/// whitespace into a single space.
///
/// # Examples
///
/// ```
/// use transit_graph::domain::normalize_name;
///
/// assert_eq!(normalize_name("  Estación   Central "), "estacion central");
/// assert_eq!(normalize_name("PORTAL NORTE"), "portal norte");
/// ```
pub fn normalize_name(name: &str) -> String {
    let folded: String = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
