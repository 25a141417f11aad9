use rand::{seq::SliceRandom, Rng};

/// Shuffle attempts before falling back to a deterministic swap
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 100;

pub struct Scrambler;

impl Scrambler {
    /// Produce a permutation of `word` that differs from it.
    ///
    /// Tries up to `max_attempts` uniform shuffles. If every attempt lands on
    /// the original order, two differing characters are swapped instead,
    /// preferring the first and last. Words with at most one character, or
    /// made of a single repeated character, have no other permutation and are
    /// returned as is.
    pub fn scramble(word: &str, max_attempts: u32, rng: &mut impl Rng) -> String {
        let original: Vec<char> = word.chars().collect();
        if original.len() <= 1 {
            return word.to_string();
        }

        let mut chars = original.clone();
        for _ in 0..max_attempts {
            chars.shuffle(rng);
            if chars != original {
                return chars.into_iter().collect();
            }
        }

        Self::swap_fallback(original)
    }

    fn swap_fallback(mut chars: Vec<char>) -> String {
        let first = chars[0];
        let last = chars.len() - 1;
        let other = chars.iter().position(|&c| c != first);
        if chars[last] != first {
            chars.swap(0, last);
        } else if let Some(other) = other {
            chars.swap(0, other);
        }
        chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sorted_chars(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_differs_and_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["cat", "ab", "kaleidoscope", "yoyo", "zoology", "noon", "eerie"] {
            for _ in 0..50 {
                let scrambled = Scrambler::scramble(word, MAX_SHUFFLE_ATTEMPTS, &mut rng);
                assert_ne!(scrambled, word, "'{}' should not scramble to itself", word);
                assert_eq!(
                    sorted_chars(&scrambled),
                    sorted_chars(word),
                    "'{}' should be a permutation of '{}'",
                    scrambled,
                    word
                );
            }
        }
    }

    #[test]
    fn test_short_words_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Scrambler::scramble("", MAX_SHUFFLE_ATTEMPTS, &mut rng), "");
        assert_eq!(Scrambler::scramble("a", MAX_SHUFFLE_ATTEMPTS, &mut rng), "a");
        assert_eq!(Scrambler::scramble("é", MAX_SHUFFLE_ATTEMPTS, &mut rng), "é");
    }

    #[test]
    fn test_fallback_swaps_first_and_last() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Scrambler::scramble("abc", 0, &mut rng), "cba");
    }

    #[test]
    fn test_fallback_with_matching_ends() {
        // First and last are both 'a', so the first differing letter is used
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Scrambler::scramble("aba", 0, &mut rng), "baa");
    }

    #[test]
    fn test_repeated_letter_word_unchanged() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(Scrambler::scramble("aaa", MAX_SHUFFLE_ATTEMPTS, &mut rng), "aaa");
    }

    #[test]
    fn test_multibyte_letters_stay_whole() {
        let mut rng = StdRng::seed_from_u64(11);
        let scrambled = Scrambler::scramble("αβγ", MAX_SHUFFLE_ATTEMPTS, &mut rng);
        assert_ne!(scrambled, "αβγ");
        assert_eq!(sorted_chars(&scrambled), sorted_chars("αβγ"));
    }
}
