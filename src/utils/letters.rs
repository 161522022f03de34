use once_cell::sync::Lazy;

/// The five vowels a board draws from
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Consonants that double a word's score
pub const SPECIAL_CONSONANTS: [char; 5] = ['S', 'Z', 'P', 'X', 'Q'];

/// Every letter A-Z that is not a vowel (21 letters)
pub static CONSONANTS: Lazy<Vec<char>> =
    Lazy::new(|| ('A'..='Z').filter(|ch| !VOWELS.contains(ch)).collect());

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

pub fn is_special_consonant(letter: char) -> bool {
    SPECIAL_CONSONANTS.contains(&letter.to_ascii_uppercase())
}

/// Count vowel characters in a word, ignoring case
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&ch| is_vowel(ch)).count()
}
