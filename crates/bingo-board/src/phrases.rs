//! The phrase pool a board draws from.

use rand::seq::index;
use rand::Rng;

use crate::error::Error;

/// The built-in pool: 25 phrases about learning Python, enough for a
/// full 5x5 board with one to spare.
pub const DEFAULT_PHRASES: [&str; 25] = [
    "Attended a makeup section",
    "Asked ChatGPT for help",
    "Commented out half the code",
    "Program works by accident",
    "Typed 'list' as a variable name",
    "Used list instead of str",
    "IndentationError... again",
    "Used = instead of ==",
    "Infinite loop panic",
    "Missed a colon",
    "Karel won't turn left",
    "Watched lecture at 1.5x speed",
    "Did the assignment 1 hour before section",
    "Added a print just to see what happens",
    "Stuck on making quilt in graphics",
    "Put beeper... in the wrong spot",
    "Mixed up keys and values",
    "Debugged for 30 mins... typo",
    "Didn't test edge cases",
    "Printed 'Hello World' like a boss",
    "Wrote a function, forgot to call it",
    "Didn't write comments, got lost in own code",
    "Wrote the solution... outside of main()",
    "Index out of range",
    "Googled the error message",
];

/// A pool of candidate tile phrases.
///
/// Duplicates are discarded on construction, so [`len`](PhraseSet::len)
/// is always the distinct-phrase count that board generation checks
/// against.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    /// Build a pool from any iterator of strings, keeping the first
    /// occurrence of each distinct phrase.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for p in phrases {
            let p = p.into();
            if seen.insert(p.clone()) {
                out.push(p);
            }
        }
        Self { phrases: out }
    }

    /// Number of distinct phrases in the pool.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// All phrases, in construction order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Draw `amount` phrases uniformly at random, without repetition.
    ///
    /// Fails with [`Error::InsufficientPhrases`] when the pool is too
    /// small rather than silently drawing fewer.
    pub fn draw(&self, amount: usize, rng: &mut impl Rng) -> Result<Vec<&str>, Error> {
        if self.phrases.len() < amount {
            return Err(Error::InsufficientPhrases {
                available: self.phrases.len(),
                required: amount,
            });
        }
        Ok(index::sample(rng, self.phrases.len(), amount)
            .iter()
            .map(|i| self.phrases[i].as_str())
            .collect())
    }
}

impl Default for PhraseSet {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_pool_is_distinct() {
        let pool = PhraseSet::default();
        assert_eq!(pool.len(), 25);
    }

    #[test]
    fn duplicates_collapse() {
        let pool = PhraseSet::new(["a", "b", "a", "c", "b"]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.phrases(), &["a", "b", "c"]);
    }

    #[test]
    fn draw_has_no_repeats() {
        let pool = PhraseSet::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let drawn = pool.draw(24, &mut rng).unwrap();
        assert_eq!(drawn.len(), 24);
        let distinct: std::collections::HashSet<_> = drawn.iter().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn draw_from_small_pool_fails() {
        let pool = PhraseSet::new((0..20).map(|i| format!("phrase {i}")));
        let mut rng = SmallRng::seed_from_u64(7);
        let err = pool.draw(24, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientPhrases {
                available: 20,
                required: 24
            }
        );
    }
}
