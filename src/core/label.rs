//! Name formatting shared by every message factory.

/// Render an optional diagnostic name for insertion between two words.
///
/// Returns `" "` when the name is absent or blank, otherwise the name in
/// single quotes padded by one space on each side. Message factories write
/// `format!("The{}value ...", name_label(name))` so that both forms read
/// naturally.
///
/// ```rust
/// use assurance::core::name_label;
///
/// assert_eq!(format!("The{}value", name_label(Some("count"))), "The 'count' value");
/// assert_eq!(format!("The{}value", name_label(None)), "The value");
/// assert_eq!(format!("The{}value", name_label(Some("  "))), "The value");
/// ```
pub fn name_label(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!(" '{name}' "),
        _ => " ".to_string(),
    }
}
