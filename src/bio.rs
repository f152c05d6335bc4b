//! Bio word budget: live word count with an advisory remaining/over readout.

/// Word budget for the bio field. Advisory only; input is never truncated.
pub const WORD_LIMIT: i64 = 250;

/// Count whitespace-separated tokens; all-whitespace text counts as zero.
#[must_use]
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}

/// Words left under the budget; negative once the budget is exceeded.
#[must_use]
pub fn words_remaining(count: usize) -> i64 {
    WORD_LIMIT - count as i64
}

/// Counter text under the bio box. The templates are fixed and do not
/// pluralize, so a single excess word reads "1 words over limit".
#[must_use]
pub fn budget_label(text: &str) -> String {
    let remaining = words_remaining(word_count(text));
    if remaining < 0 {
        format!("{} words over limit", -remaining)
    } else {
        format!("{remaining} words remaining")
    }
}

/// Whether the counter should render in the error style.
#[must_use]
pub fn over_limit(text: &str) -> bool {
    words_remaining(word_count(text)) < 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn word_count_ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  spread   out\nwords\t here "), 4);
    }

    #[test]
    fn budget_label_is_exact_at_the_boundary() {
        let at_limit = "word ".repeat(250);
        assert_eq!(budget_label(&at_limit), "0 words remaining");
        assert!(!over_limit(&at_limit));

        let one_over = "word ".repeat(251);
        assert_eq!(budget_label(&one_over), "1 words over limit");
        assert!(over_limit(&one_over));
    }

    #[test]
    fn empty_bio_has_the_full_budget() {
        assert_eq!(budget_label(""), "250 words remaining");
    }

    proptest! {
        #[test]
        fn count_is_zero_iff_trimmed_text_is_empty(text in ".{0,200}") {
            prop_assert_eq!(word_count(&text) == 0, text.trim().is_empty());
        }

        #[test]
        fn remaining_is_the_exact_complement_of_the_count(text in ".{0,200}") {
            let count = word_count(&text);
            prop_assert_eq!(words_remaining(count), WORD_LIMIT - count as i64);
        }

        #[test]
        fn label_template_tracks_the_sign_of_the_remainder(words in 0usize..600) {
            let text = "w ".repeat(words);
            let label = budget_label(&text);
            if words > 250 {
                prop_assert!(label.ends_with("words over limit"));
            } else {
                prop_assert!(label.ends_with("words remaining"));
            }
        }
    }
}
