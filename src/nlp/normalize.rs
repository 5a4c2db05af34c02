//! Cell normalization and adjective candidate splitting

/// Lowercase a cell and collapse whitespace runs to single spaces.
///
/// A missing cell normalizes to the empty string.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(text) => text
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}

/// Normalize a cell, treating blank content as missing.
pub fn normalize_cell(raw: Option<&str>) -> Option<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

fn is_candidate_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Split a normalized adjective field on runs of commas, semicolons and
/// whitespace. Order and duplicates are preserved.
pub fn split_candidates(field: &str) -> Vec<String> {
    field
        .split(is_candidate_separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize(Some("  A  Bright\tRED\n house ")), "a bright red house");
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("   ")), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Hello   World", " x ", "already normal", "", "Ünïcode  TEXT"] {
            let once = normalize(Some(raw));
            assert_eq!(normalize(Some(&once)), once);
        }
    }

    #[test]
    fn test_blank_cell_is_missing() {
        assert_eq!(normalize_cell(None), None);
        assert_eq!(normalize_cell(Some(" \t ")), None);
        assert_eq!(normalize_cell(Some("Calm")), Some("calm".to_string()));
    }

    #[test]
    fn test_split_candidates() {
        assert_eq!(
            split_candidates("bright, colorful;  vivid"),
            vec!["bright", "colorful", "vivid"]
        );
        assert_eq!(split_candidates("dark,,dark ;"), vec!["dark", "dark"]);
        assert!(split_candidates("").is_empty());
        assert!(split_candidates(" ,; ").is_empty());
    }
}
