const SOUR_MARKER: &str = "sour";
const BITTER_MARKER: &str = "bitter";

/// Canonical extraction-adjustment tip that replaces free-form sour/bitter advice
pub const EXTRACTION_TIP: &str = "If it tastes sour: extend the time slightly / grind finer. \
If it tastes bitter: shorten the time / grind coarser.";

/// Trim a method tip and replace sour/bitter advice with the canonical wording.
pub fn normalize_tip(tip: &str) -> String {
    let trimmed = tip.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower.contains(SOUR_MARKER) && lower.contains(BITTER_MARKER) {
        EXTRACTION_TIP.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sour_and_bitter_is_replaced() {
        assert_eq!(
            normalize_tip("  If it is Sour, extend; if bitter, shorten. "),
            EXTRACTION_TIP
        );
    }

    #[test]
    fn test_only_one_marker_is_kept() {
        assert_eq!(
            normalize_tip(" Bitter? Try a coarser grind. "),
            "Bitter? Try a coarser grind."
        );
    }

    #[test]
    fn test_blank_tip_stays_blank() {
        assert_eq!(normalize_tip("   "), "");
        assert_eq!(normalize_tip(""), "");
    }

    #[test]
    fn test_canonical_tip_has_both_clauses() {
        assert!(EXTRACTION_TIP.contains("sour: extend the time slightly / grind finer."));
        assert!(EXTRACTION_TIP.contains("bitter: shorten the time / grind coarser."));
    }
}
