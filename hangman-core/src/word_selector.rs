use std::collections::HashSet;

use hangman_types::{HangmanError, UserId, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, warn};

use crate::{GameRules, RecordStore, is_alphabetic};

/// Picks a word the player has not solved yet.
///
/// Exclusion compares word text (case-insensitively), not ids, so two
/// stored words with the same spelling are excluded together.
#[derive(Debug, Clone)]
pub struct WordSelector {
    min_word_length: usize,
}

impl WordSelector {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            min_word_length: rules.min_word_length,
        }
    }

    /// Candidates made only of letters, long enough and not in `solved`.
    /// A word with any other character could never be fully revealed.
    pub fn eligible<'a>(&self, candidates: &'a [Word], solved: &HashSet<String>) -> Vec<&'a Word> {
        let solved: HashSet<String> = solved.iter().map(|text| text.to_lowercase()).collect();

        candidates
            .iter()
            .filter(|word| word.char_len() >= self.min_word_length)
            .filter(|word| is_alphabetic(&word.text))
            .filter(|word| !solved.contains(&word.text.to_lowercase()))
            .collect()
    }

    /// Uniform choice among eligible candidates.
    pub fn select<R: Rng + ?Sized>(
        &self,
        candidates: &[Word],
        solved: &HashSet<String>,
        rng: &mut R,
    ) -> Result<Word, HangmanError> {
        let eligible = self.eligible(candidates, solved);
        debug!(
            "{} of {} candidate words eligible",
            eligible.len(),
            candidates.len()
        );

        eligible
            .choose(rng)
            .map(|word| (*word).clone())
            .ok_or(HangmanError::NoEligibleWords)
    }

    /// Read-only: fetches candidates and the player's solved history, then
    /// selects.
    pub async fn choose_word<S, R>(
        &self,
        store: &S,
        user_id: Option<UserId>,
        rng: &mut R,
    ) -> Result<Word, HangmanError>
    where
        S: RecordStore + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = store.fetch_candidate_words().await?;
        let solved = match user_id {
            Some(_) => store.fetch_solved_word_texts(user_id).await?,
            None => HashSet::new(),
        };

        self.select(&candidates, &solved, rng).inspect_err(|_| {
            warn!(
                "No eligible words left for player {:?} ({} solved)",
                user_id,
                solved.len()
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(Uuid::new_v4(), *t)).collect()
    }

    fn solved(texts: &[&str]) -> HashSet<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_short_words_never_eligible() {
        let selector = WordSelector::new(&GameRules::default());
        let candidates = words(&["cat", "a", "tree", "apple", "dog"]);

        let eligible: Vec<&str> = selector
            .eligible(&candidates, &HashSet::new())
            .iter()
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(eligible, vec!["tree", "apple"]);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = selector.select(&candidates, &HashSet::new(), &mut rng).unwrap();
            assert!(word.char_len() > 3);
        }
    }

    #[test]
    fn test_every_eligible_word_reachable() {
        let selector = WordSelector::new(&GameRules::default());
        let candidates = words(&["tree", "apple", "house"]);
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<String> = (0..200)
            .map(|_| selector.select(&candidates, &HashSet::new(), &mut rng).unwrap().text)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_solved_words_excluded_by_text() {
        let selector = WordSelector::new(&GameRules::default());
        // Same spelling under two ids, both must go
        let candidates = words(&["apple", "apple", "house"]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let word = selector
                .select(&candidates, &solved(&["APPLE"]), &mut rng)
                .unwrap();
            assert_eq!(word.text, "house");
        }
    }

    #[test]
    fn test_exhausted_candidates_report_no_eligible_words() {
        let selector = WordSelector::new(&GameRules::default());
        let candidates = words(&["apple", "cat"]);
        let mut rng = StdRng::seed_from_u64(3);

        let result = selector.select(&candidates, &solved(&["apple"]), &mut rng);
        assert_eq!(result, Err(HangmanError::NoEligibleWords));

        let result = selector.select(&[], &HashSet::new(), &mut rng);
        assert_eq!(result, Err(HangmanError::NoEligibleWords));
    }

    #[test]
    fn test_words_with_non_letters_never_eligible() {
        let selector = WordSelector::new(&GameRules::default());
        let candidates = words(&["ice-cream", "o'clock", "ice cream", "tree2", "icecream"]);

        let eligible: Vec<&str> = selector
            .eligible(&candidates, &HashSet::new())
            .iter()
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(eligible, vec!["icecream"]);

        let mut rng = StdRng::seed_from_u64(5);
        let result = selector.select(&candidates[..2], &HashSet::new(), &mut rng);
        assert_eq!(result, Err(HangmanError::NoEligibleWords));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let selector = WordSelector::new(&GameRules::default());
        // Three characters but six bytes
        let candidates = words(&["été", "éclat"]);
        let eligible = selector.eligible(&candidates, &HashSet::new());
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].text, "éclat");
    }
}
