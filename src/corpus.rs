use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{LinewiseError, Result};
use crate::tokenizer::Tokenizer;

/// Instance id recorded for sentences seen before any instance declaration.
pub const UNDEFINED_INSTANCE_ID: &str = "Undefined";

/// The two senses of the ambiguous target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    Phone,
    Product,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Phone => write!(f, "Phone"),
            Sense::Product => write!(f, "Product"),
        }
    }
}

/// One training sentence with the sense declared for it.
///
/// `sense` is `None` for sentences that occur before any senseid
/// declaration; such sentences are recorded, not dropped, and the trainer
/// decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExample {
    pub sense: Option<Sense>,
    pub tokens: Vec<String>,
}

/// One test sentence with the instance id declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlabeledInstance {
    pub instance_id: String,
    pub tokens: Vec<String>,
}

/// Parses the line-oriented, tag-annotated corpus formats.
///
/// Training corpora carry `senseid="phone"` / `senseid="product"`
/// declarations, test corpora carry `<instance id="...">` declarations, and
/// both hold their context text on `<s>` sentence lines. A declaration stays
/// current until the next one overwrites it, so sentence lines inherit the
/// most recent declaration. Lines matching no recognized pattern contribute
/// no data.
pub struct CorpusReader {
    tokenizer: Tokenizer,
    attribute_pattern: Regex,
}

impl CorpusReader {
    /// Creates a new instance of [`CorpusReader`].
    pub fn new() -> Self {
        CorpusReader {
            tokenizer: Tokenizer::new(),
            attribute_pattern: Regex::new(r#""(.*?)""#).unwrap(),
        }
    }

    /// Reads and parses a labeled training corpus.
    ///
    /// # Arguments
    /// * `path` - The path to the training corpus file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_training(&self, path: &Path) -> Result<Vec<LabeledExample>> {
        let text = fs::read_to_string(path).map_err(|e| {
            LinewiseError::corpus(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(self.parse_training(&text))
    }

    /// Parses labeled training text into examples.
    pub fn parse_training(&self, text: &str) -> Vec<LabeledExample> {
        let mut examples = Vec::new();
        let mut sense = None;
        for line in text.lines() {
            sense = self.training_line(line, sense, &mut examples);
        }
        examples
    }

    /// Processes one training line, returning the sense current after it.
    ///
    /// Both declarations are checked in order, so a line carrying more than
    /// one ends on the later one, and a line may declare a sense and hold a
    /// sentence at the same time.
    fn training_line(
        &self,
        line: &str,
        current: Option<Sense>,
        examples: &mut Vec<LabeledExample>,
    ) -> Option<Sense> {
        let mut sense = current;
        if line.contains(r#"senseid="phone""#) {
            sense = Some(Sense::Phone);
        }
        if line.contains(r#"senseid="product""#) {
            sense = Some(Sense::Product);
        }
        if line.contains("<s>") {
            examples.push(LabeledExample {
                sense,
                tokens: self.tokenizer.tokenize(line),
            });
        }
        sense
    }

    /// Reads and parses an unlabeled test corpus.
    ///
    /// # Arguments
    /// * `path` - The path to the test corpus file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_test(&self, path: &Path) -> Result<Vec<UnlabeledInstance>> {
        let text = fs::read_to_string(path).map_err(|e| {
            LinewiseError::corpus(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(self.parse_test(&text))
    }

    /// Parses unlabeled test text into instances.
    pub fn parse_test(&self, text: &str) -> Vec<UnlabeledInstance> {
        let mut instances = Vec::new();
        let mut instance_id = None;
        for line in text.lines() {
            instance_id = self.test_line(line, instance_id, &mut instances);
        }
        instances
    }

    /// Processes one test line, returning the instance id current after it.
    ///
    /// The id is the first double-quoted attribute value on the declaration
    /// line; a declaration line without one leaves the previous id in place.
    fn test_line(
        &self,
        line: &str,
        current: Option<String>,
        instances: &mut Vec<UnlabeledInstance>,
    ) -> Option<String> {
        let mut instance_id = current;
        if line.contains("<instance id=") {
            if let Some(captures) = self.attribute_pattern.captures(line) {
                instance_id = Some(captures[1].to_string());
            }
        }
        if line.contains("<s>") {
            instances.push(UnlabeledInstance {
                instance_id: instance_id
                    .clone()
                    .unwrap_or_else(|| UNDEFINED_INSTANCE_ID.to_string()),
                tokens: self.tokenizer.tokenize(line),
            });
        }
        instance_id
    }
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new()
    }
}
