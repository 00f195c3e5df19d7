//! Light morphological folding
//!
//! Keyword deduplication needs "network" and "networks" (or "study" and
//! "studies") to collapse into one entry. Full stemming is overkill and
//! mangles technical vocabulary, so this applies only the safe suffix
//! folds: plural endings and a lowercase pass.

/// Fold a single word to its dedup form.
///
/// Applies lowercasing plus plural folding: `-ies` → `-y`, `-sses`/`-shes`/
/// `-ches`/`-xes` → drop `es`, plain `-s` → drop `s`. Words of three
/// characters or fewer are left alone apart from case.
pub fn fold_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.len() <= 3 {
        return lower;
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }

    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }

    // Plain plural, but keep words like "analysis" and "less" intact
    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("is") && !lower.ends_with("us")
    {
        return lower[..lower.len() - 1].to_string();
    }

    lower
}

/// Fold a term or phrase word-by-word, collapsing interior whitespace.
pub fn fold_term(term: &str) -> String {
    term.split_whitespace()
        .map(fold_word)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_folding() {
        assert_eq!(fold_word("networks"), "network");
        assert_eq!(fold_word("studies"), "study");
        assert_eq!(fold_word("classes"), "class");
        assert_eq!(fold_word("boxes"), "box");
        assert_eq!(fold_word("branches"), "branch");
    }

    #[test]
    fn test_non_plurals_preserved() {
        assert_eq!(fold_word("analysis"), "analysis");
        assert_eq!(fold_word("less"), "less");
        assert_eq!(fold_word("corpus"), "corpus");
        assert_eq!(fold_word("gas"), "gas"); // too short to fold
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(fold_word("Networks"), "network");
        assert_eq!(fold_word("AI"), "ai");
    }

    #[test]
    fn test_phrase_folding() {
        assert_eq!(fold_term("Neural   Networks"), "neural network");
        assert_eq!(fold_term("machine learning"), "machine learning");
    }

    #[test]
    fn test_singular_and_plural_collide() {
        assert_eq!(fold_term("neural network"), fold_term("Neural Networks"));
    }
}
