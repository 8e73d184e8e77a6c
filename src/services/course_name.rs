use crate::models::course::CourseLabel;

/// Canonicalize a course name so "KT1002群馬" and "KT1002 群馬" compare
/// equal everywhere: binding table keys, template lookups, conflict keys.
///
/// Status markers and the empty string pass through untouched. Everything
/// else loses its whitespace, then gets exactly one space inserted between
/// the leading code (uppercase letters and digits) and the rest of the name.
/// Idempotent, never fails.
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    if CourseLabel::from_name(trimmed).is_sentinel() {
        return trimmed.to_string();
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    let code_end = compact
        .char_indices()
        .find(|(_, c)| !c.is_ascii_uppercase() && !c.is_ascii_digit())
        .map(|(index, _)| index)
        .unwrap_or(compact.len());

    // No leading code, or nothing after it: name stays as stripped.
    if code_end == 0 || code_end == compact.len() {
        return compact;
    }

    format!("{} {}", &compact[..code_end], &compact[code_end..])
}
