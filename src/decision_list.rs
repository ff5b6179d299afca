use std::collections::HashMap;

use crate::corpus::{LabeledExample, Sense};
use crate::error::{LinewiseError, Result};

/// Default count substituted when a word was never observed under a sense.
/// Keeps every log-odds ratio finite, so a word exclusive to one sense gets
/// a high score instead of an infinite one.
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Frequency tables observed for one sense.
#[derive(Debug, Default)]
struct SenseTable {
    /// Labeled examples carrying this sense.
    examples: usize,
    /// Occurrence counts per word; a word appearing twice in one sentence
    /// counts twice.
    words: HashMap<String, usize>,
}

/// A two-sense decision list learned from labeled examples.
///
/// Training builds three read-only tables in two passes: how often each
/// sense occurs, how often each word occurs under each sense, and a
/// per-word discrimination score. The score records only the strength of a
/// word's sense association; its direction is recovered from the raw
/// frequencies at prediction time. The formula is defined for exactly two
/// senses and stays hard-coded for them.
#[derive(Debug)]
pub struct DecisionList {
    smoothing: f64,
    phone: SenseTable,
    product: SenseTable,
    undefined_examples: usize,
    discrimination_score: HashMap<String, f64>,
}

impl DecisionList {
    /// Creates a new instance of [`DecisionList`].
    ///
    /// # Arguments
    /// * `smoothing` - The count substituted for words never observed under
    ///   a sense, normally [`DEFAULT_SMOOTHING`].
    pub fn new(smoothing: f64) -> Self {
        DecisionList {
            smoothing,
            phone: SenseTable::default(),
            product: SenseTable::default(),
            undefined_examples: 0,
            discrimination_score: HashMap::new(),
        }
    }

    /// Builds the frequency tables and discrimination scores.
    ///
    /// Pass 1 counts sense and word-under-sense frequencies; pass 2 scores
    /// every word occurring in the examples. Scores are recomputed once per
    /// occurrence, which is idempotent: the stored value depends only on the
    /// finished frequency tables.
    ///
    /// # Errors
    /// Fails if a sentence with context words carries no sense declaration,
    /// or if words need scoring while one sense never occurs in the corpus;
    /// both leave the two-sense log-odds ratio without a usable side.
    pub fn train(&mut self, examples: &[LabeledExample]) -> Result<()> {
        for example in examples {
            match example.sense {
                Some(sense) => {
                    let table = self.table_mut(sense);
                    table.examples += 1;
                    for word in &example.tokens {
                        *table.words.entry(word.clone()).or_insert(0) += 1;
                    }
                }
                None => {
                    if !example.tokens.is_empty() {
                        return Err(LinewiseError::corpus(
                            "training sentence precedes any senseid declaration",
                        ));
                    }
                    self.undefined_examples += 1;
                }
            }
        }

        let has_words = examples.iter().any(|example| !example.tokens.is_empty());
        if has_words && (self.phone.examples == 0 || self.product.examples == 0) {
            return Err(LinewiseError::corpus(
                "cannot score words unless both senses occur in the training corpus",
            ));
        }
        for example in examples {
            for word in &example.tokens {
                let score = self.score(word);
                self.discrimination_score.insert(word.clone(), score);
            }
        }

        Ok(())
    }

    /// Applies the one-feature decision rule to a token sequence.
    ///
    /// Scans the tokens tracking the highest-scoring word; a word must score
    /// strictly above zero to be selected, and the first maximum wins ties.
    /// The winning word's raw frequencies then decide the sense: Phone only
    /// when its count is strictly greater, Product otherwise. When no word
    /// is selected the deciding word stays empty, the score stays zero, and
    /// the Product fallback applies.
    pub fn predict(&self, tokens: &[String]) -> (Sense, String, f64) {
        let mut best_word = "";
        let mut best_score = 0.0;
        for word in tokens {
            let score = self.discrimination_score(word);
            if score > best_score {
                best_score = score;
                best_word = word.as_str();
            }
        }

        let sense = self.sense_for(best_word);
        (sense, best_word.to_string(), best_score)
    }

    /// Sense whose raw frequency for `word` is strictly higher; Product on
    /// ties, which also makes it the fallback for unknown words.
    pub fn sense_for(&self, word: &str) -> Sense {
        if self.word_frequency(Sense::Phone, word) > self.word_frequency(Sense::Product, word) {
            Sense::Phone
        } else {
            Sense::Product
        }
    }

    /// Number of labeled examples observed with `sense`.
    pub fn sense_frequency(&self, sense: Sense) -> usize {
        self.table(sense).examples
    }

    /// Number of training sentences recorded without any sense declaration.
    pub fn undefined_examples(&self) -> usize {
        self.undefined_examples
    }

    /// Total number of training sentences counted, undefined ones included.
    pub fn num_examples(&self) -> usize {
        self.phone.examples + self.product.examples + self.undefined_examples
    }

    /// Occurrences of `word` in training sentences labeled with `sense`,
    /// 0 when never observed.
    pub fn word_frequency(&self, sense: Sense, word: &str) -> usize {
        self.table(sense).words.get(word).copied().unwrap_or(0)
    }

    /// Discrimination score of `word`, 0 for words never seen in training.
    pub fn discrimination_score(&self, word: &str) -> f64 {
        self.discrimination_score.get(word).copied().unwrap_or(0.0)
    }

    /// All scored words with their discrimination scores.
    pub fn discrimination_scores(&self) -> &HashMap<String, f64> {
        &self.discrimination_score
    }

    /// Absolute log-odds of `word` appearing under Phone vs Product, each
    /// side normalized by that sense's example count. Unseen counts fall
    /// back to the smoothing constant, so the ratio is always finite; a word
    /// with identical relative proportion under both senses scores zero.
    fn score(&self, word: &str) -> f64 {
        let phone = match self.phone.words.get(word) {
            Some(&count) => count as f64,
            None => self.smoothing,
        };
        let product = match self.product.words.get(word) {
            Some(&count) => count as f64,
            None => self.smoothing,
        };

        let phone_ratio = phone / self.phone.examples as f64;
        let product_ratio = product / self.product.examples as f64;
        (phone_ratio / product_ratio).ln().abs()
    }

    fn table(&self, sense: Sense) -> &SenseTable {
        match sense {
            Sense::Phone => &self.phone,
            Sense::Product => &self.product,
        }
    }

    fn table_mut(&mut self, sense: Sense) -> &mut SenseTable {
        match sense {
            Sense::Phone => &mut self.phone,
            Sense::Product => &mut self.product,
        }
    }
}

impl Default for DecisionList {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}
