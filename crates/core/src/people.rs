//! Display helpers for user names.
//!
//! Total functions with safe defaults: missing names yield `"??"` and
//! `"Unknown"` rather than an error.

/// Two-letter initials from optional first/last names.
///
/// Falls back to the first two characters of whichever name is present,
/// and to `"??"` when neither is.
pub fn initials(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.map(str::trim).filter(|s| !s.is_empty());
    let last = last.map(str::trim).filter(|s| !s.is_empty());

    match (first, last) {
        (Some(f), Some(l)) => {
            let mut out = String::new();
            out.extend(f.chars().next().map(|c| c.to_ascii_uppercase()));
            out.extend(l.chars().next().map(|c| c.to_ascii_uppercase()));
            out
        }
        (Some(one), None) | (None, Some(one)) => {
            one.chars().take(2).map(|c| c.to_ascii_uppercase()).collect()
        }
        (None, None) => "??".to_string(),
    }
}

/// Full display name, falling back to `"Unknown"` when both parts are
/// missing.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.map(str::trim).filter(|s| !s.is_empty());
    let last = last.map(str::trim).filter(|s| !s.is_empty());

    match (first, last) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => "Unknown".to_string(),
    }
}
