/// Turns a human-readable title into a filesystem-safe identifier.
///
/// Lowercases and trims the title, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, then strips leading and trailing hyphens.
/// `"Project Ideas"` becomes `"project-ideas"`. The result may be empty.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(slugify("Project Ideas"), "project-ideas");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Q3 -- Goals!!! (draft)"), "q3-goals-draft");
    }

    #[test]
    fn test_slugify_strips_edge_separators() {
        assert_eq!(slugify("  ***hello world***  "), "hello-world");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!@#$%"), "");
    }

    #[test]
    fn test_slugify_non_ascii_is_separator() {
        assert_eq!(slugify("Café Notes"), "caf-notes");
        assert_eq!(slugify("日本語"), "");
    }
}
