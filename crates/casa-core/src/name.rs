//! Display-name formatting for raw backend identifiers

/// Turn a raw name like `living_room_temp` into `Living Room Temp`
///
/// Underscores become spaces, runs of whitespace collapse, and each word is
/// capitalized. Already-formatted names pass through unchanged, so the
/// function is safe to apply repeatedly.
pub fn display_name(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
