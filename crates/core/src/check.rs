use serde::{Deserialize, Serialize};

/// Outcome of one palindrome check. Ephemeral; history keeps its own record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_palindrome: bool,
    pub normalized: String,
}

/// Normalize `raw` and decide whether it reads the same in both directions.
///
/// Normalization keeps Unicode alphanumerics only (underscore, punctuation
/// and whitespace are all dropped) and lowercases the rest. An input whose
/// normalized form is empty is never a palindrome.
pub fn check(raw: &str) -> CheckOutcome {
    let normalized = normalize(raw);
    let is_palindrome =
        !normalized.is_empty() && normalized.chars().eq(normalized.chars().rev());
    CheckOutcome {
        is_palindrome,
        normalized,
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_sentence_is_palindrome() {
        let out = check("A man, a plan, a canal: Panama");
        assert!(out.is_palindrome);
        assert_eq!(out.normalized, "amanaplanacanalpanama");
    }

    #[test]
    fn near_miss_is_not_palindrome() {
        let out = check("race a car");
        assert!(!out.is_palindrome);
        assert_eq!(out.normalized, "raceacar");
    }

    #[test]
    fn digits_count_as_word_characters() {
        let out = check("12321");
        assert!(out.is_palindrome);
        assert_eq!(out.normalized, "12321");
    }

    #[test]
    fn plain_text_is_not_palindrome() {
        let out = check("Hello, world!");
        assert!(!out.is_palindrome);
        assert_eq!(out.normalized, "helloworld");
    }

    #[test]
    fn whitespace_only_is_never_palindrome() {
        let out = check("   ");
        assert!(!out.is_palindrome);
        assert!(out.normalized.is_empty());
    }

    #[test]
    fn punctuation_only_is_never_palindrome() {
        let out = check("!!! ,,, ___");
        assert!(!out.is_palindrome);
        assert!(out.normalized.is_empty());
    }

    #[test]
    fn empty_input_is_never_palindrome() {
        assert!(!check("").is_palindrome);
    }

    #[test]
    fn underscore_is_stripped() {
        assert_eq!(check("a_b_a").normalized, "aba");
        assert!(check("a_b_a").is_palindrome);
    }

    #[test]
    fn accented_letters_survive_normalization() {
        // Unicode-alphanumeric policy: accented letters are kept as-is.
        let out = check("été");
        assert_eq!(out.normalized, "été");
        assert!(out.is_palindrome);
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["A man, a plan, a canal: Panama", "12321", "Hello, world!"] {
            let once = check(s).normalized;
            assert_eq!(check(&once).normalized, once);
        }
    }

    #[test]
    fn verdict_matches_reversal_of_normalized_text() {
        for s in ["Was it a car or a cat I saw?", "No lemon, no melon", "abcx"] {
            let out = check(s);
            let reversed: String = out.normalized.chars().rev().collect();
            assert_eq!(
                out.is_palindrome,
                !out.normalized.is_empty() && reversed == out.normalized
            );
        }
    }
}
