//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with the entry width.
#[must_use]
pub fn full_version() -> String {
    format!(
        "strassen {} ({}-bit entries)",
        version(),
        strassen_core::Element::BITS
    )
}
