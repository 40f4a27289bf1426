/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// use haystack_defs::utils::capitalize_first;
/// assert_eq!(capitalize_first("siteRef"), "SiteRef");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
