use crate::{
    game::validator::Outcome,
    utils::letters::{is_special_consonant, is_vowel},
};

/// Points for each vowel in a word
pub const VOWEL_POINTS: u32 = 5;
/// Points for each consonant in a word
pub const CONSONANT_POINTS: u32 = 1;
/// Points deducted for a word that is not in the dictionary
pub const INVALID_WORD_PENALTY: u32 = 10;

pub struct Scorer;

impl Scorer {
    /// Calculate the point value of an accepted word.
    ///
    /// Scoring rules:
    /// - Each vowel is worth 5 points
    /// - Each consonant is worth 1 point
    /// - If the word has a consonant and any of S, Z, P, X, Q the total is doubled
    pub fn score_word(word: &str) -> u32 {
        let mut total: i64 = 0;
        let mut consonant_count = 0;

        for ch in word.chars() {
            if is_vowel(ch) {
                total += i64::from(VOWEL_POINTS);
            } else {
                total += i64::from(CONSONANT_POINTS);
                consonant_count += 1;
            }
        }

        if consonant_count > 0 && word.chars().any(is_special_consonant) {
            total *= 2;
        }

        // Terms are all positive, so the floor never triggers
        u32::try_from(total.max(0)).unwrap_or(u32::MAX)
    }

    /// Apply a submission outcome to the running score
    pub fn apply_outcome(current: u32, outcome: &Outcome) -> u32 {
        match outcome {
            Outcome::Accepted(word) => match Self::score_word(word) {
                0 => current,
                points => current.saturating_add(points),
            },
            Outcome::NotInDictionary => current.saturating_sub(INVALID_WORD_PENALTY),
            Outcome::Empty | Outcome::TooShort | Outcome::TooFewVowels | Outcome::Duplicate => {
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_consonants_double_the_score() {
        // S(1) + P(1) + A(5) = 7, doubled for S/P
        assert_eq!(Scorer::score_word("SPA"), 14);
    }

    #[test]
    fn test_all_vowels_are_not_doubled() {
        assert_eq!(Scorer::score_word("AEIOU"), 25);
    }

    #[test]
    fn test_plain_consonants() {
        // T(1) + R(1) + A(5) + I(5) + N(1) = 13
        assert_eq!(Scorer::score_word("TRAIN"), 13);
    }

    #[test]
    fn test_scoring_ignores_case() {
        assert_eq!(Scorer::score_word("quiz"), Scorer::score_word("QUIZ"));
        // Q(1) + U(5) + I(5) + Z(1) = 12, doubled
        assert_eq!(Scorer::score_word("QUIZ"), 24);
    }

    #[test]
    fn test_empty_word_scores_zero() {
        assert_eq!(Scorer::score_word(""), 0);
    }

    #[test]
    fn test_accepted_adds_points() {
        let outcome = Outcome::Accepted("TRAIN".to_string());
        assert_eq!(Scorer::apply_outcome(5, &outcome), 18);
    }

    #[test]
    fn test_penalty_is_floored_at_zero() {
        assert_eq!(Scorer::apply_outcome(5, &Outcome::NotInDictionary), 0);
        assert_eq!(Scorer::apply_outcome(25, &Outcome::NotInDictionary), 15);
    }

    #[test]
    fn test_other_rejections_leave_score() {
        for outcome in [
            Outcome::Empty,
            Outcome::TooShort,
            Outcome::TooFewVowels,
            Outcome::Duplicate,
        ] {
            assert_eq!(Scorer::apply_outcome(42, &outcome), 42, "{:?}", outcome);
        }
    }
}
