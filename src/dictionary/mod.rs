use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use tokio::fs;

use crate::error::{GameError, Result};

/// Default pool used when no word list is configured
const BUILTIN_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow",
    "fox", "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump", "join",
    "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape", "late",
    "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number", "opposite", "octopus",
    "oak", "order", "open", "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release", "restaurant",
    "revolution", "rewind", "room", "run", "secret", "seed", "ship", "shirt", "should", "small",
    "spaceship", "stargazing", "skill", "street", "style", "sunrise", "taxi", "tidy", "timer",
    "together", "tooth", "tourist", "travel", "truck", "under", "useful", "unicorn", "unique",
    "uplift", "uniform", "vase", "violin", "visitor", "vision", "volume", "view", "walrus",
    "wander", "world", "winter", "well", "whirlwind", "xylophone", "yoga", "yogurt", "yoyo",
    "you", "year", "yummy", "zebra", "zigzag", "zoology", "zone", "zeal",
];

static BUILTIN_BANK: Lazy<WordBank> = Lazy::new(|| WordBank {
    words: BUILTIN_WORDS.iter().map(|word| word.to_string()).collect(),
});

/// Immutable, ordered pool of candidate words for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from arbitrary words.
    ///
    /// Entries are trimmed, blanks are skipped and repeated entries keep
    /// only their first occurrence.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        Ok(Self { words })
    }

    /// Load a word list from a file, one word per line.
    /// Lines starting with `#` are comments.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let bank = Self::from_words(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        )?;

        tracing::info!("Loaded {} words into word bank", bank.len());

        Ok(bank)
    }

    /// The default word pool
    pub fn builtin() -> Self {
        BUILTIN_BANK.clone()
    }

    /// Index of a word in the bank, ignoring case
    pub(crate) fn position(&self, word: &str) -> Option<usize> {
        let needle = word.trim().to_lowercase();
        self.words.iter().position(|w| w.to_lowercase() == needle)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
