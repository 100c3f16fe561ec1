//! Literal text substitution.

/// Result of a substitution over one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

/// Replace every non-overlapping occurrence of `old` with `new`, scanning left to right.
///
/// Matching is case-sensitive and ignores word boundaries: `1.2.0` inside
/// `11.2.0` is replaced too. An empty `old` matches nothing.
pub fn replace_literal(content: &str, old: &str, new: &str) -> Substitution {
    if old.is_empty() {
        return Substitution {
            content: content.to_string(),
            replacements: 0,
        };
    }

    let replacements = content.matches(old).count();
    if replacements == 0 {
        return Substitution {
            content: content.to_string(),
            replacements,
        };
    }

    Substitution {
        content: content.replace(old, new),
        replacements,
    }
}
