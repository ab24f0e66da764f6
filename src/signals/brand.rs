//! Brand detection by alias containment.

/// Label returned when no known brand is mentioned.
pub const OTHER: &str = "Other";

/// Known brands and their lowercase aliases, checked in order.
pub static BRANDS: &[(&str, &[&str])] = &[
    ("Atomberg", &["atomberg", "atom berg"]),
    ("Havells", &["havells"]),
    ("Orient", &["orient electric", "orient"]),
    ("Crompton", &["crompton", "crompton greaves"]),
    ("Usha", &["usha"]),
    ("Bajaj", &["bajaj"]),
];

/// Returns the first brand whose alias appears in the text, or "Other".
pub fn detect_brand(text: &str) -> &'static str {
    let text = text.to_lowercase();

    BRANDS
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| text.contains(alias)))
        .map(|(brand, _)| *brand)
        .unwrap_or(OTHER)
}

/// Returns true if the label is a known brand or "Other".
#[cfg(test)]
pub(crate) fn is_known_label(label: &str) -> bool {
    label == OTHER || BRANDS.iter().any(|(brand, _)| *brand == label)
}
