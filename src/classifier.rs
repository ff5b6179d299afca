use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::corpus::{Sense, UnlabeledInstance};
use crate::decision_list::DecisionList;
use crate::error::{LinewiseError, Result};

/// The outcome of classifying one test instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub instance_id: String,
    pub sense: Sense,
    /// The word that decided the sense, empty when no word scored above zero.
    pub deciding_word: String,
    pub score: f64,
}

impl fmt::Display for Prediction {
    /// Formats the prediction as the model dump line:
    /// `("<instance id>", "<sense>", "<deciding word>", <score>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(\"{}\", \"{}\", \"{}\", {})",
            self.instance_id, self.sense, self.deciding_word, self.score
        )
    }
}

/// Assigns senses to unlabeled instances with a trained decision list.
pub struct Classifier {
    learner: DecisionList,
}

impl Classifier {
    /// Creates a new instance of [`Classifier`].
    ///
    /// # Arguments
    /// * `learner` - A trained [`DecisionList`].
    pub fn new(learner: DecisionList) -> Self {
        Classifier { learner }
    }

    /// Classifies one instance by its single most discriminative word.
    pub fn classify(&self, instance: &UnlabeledInstance) -> Prediction {
        let (sense, deciding_word, score) = self.learner.predict(&instance.tokens);
        Prediction {
            instance_id: instance.instance_id.clone(),
            sense,
            deciding_word,
            score,
        }
    }

    /// Classifies every instance, writing one model dump line and one
    /// `<instance id> <sense>` answer line per instance.
    ///
    /// # Errors
    /// Returns an error if either sink cannot be written to.
    pub fn tag<M: Write, W: Write>(
        &self,
        instances: &[UnlabeledInstance],
        model: &mut M,
        answers: &mut W,
    ) -> Result<()> {
        for instance in instances {
            let prediction = self.classify(instance);
            writeln!(model, "{}", prediction)?;
            writeln!(answers, "{} {}", prediction.instance_id, prediction.sense)?;
        }
        Ok(())
    }
}

/// Creates the model dump file, failing when the path already exists.
pub fn create_model_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            LinewiseError::model(format!("cannot create model file {}: {}", path.display(), e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::corpus::LabeledExample;
    use crate::decision_list::DEFAULT_SMOOTHING;

    fn trained_classifier() -> Classifier {
        let examples = vec![
            LabeledExample {
                sense: Some(Sense::Phone),
                tokens: vec!["call".to_string(), "telephone".to_string()],
            },
            LabeledExample {
                sense: Some(Sense::Product),
                tokens: vec!["item".to_string(), "telephone".to_string()],
            },
        ];
        let mut learner = DecisionList::new(DEFAULT_SMOOTHING);
        learner.train(&examples).expect("training failed");
        Classifier::new(learner)
    }

    fn instance(id: &str, words: &[&str]) -> UnlabeledInstance {
        UnlabeledInstance {
            instance_id: id.to_string(),
            tokens: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_classify_attaches_instance_id() {
        let classifier = trained_classifier();

        let prediction = classifier.classify(&instance("line-n.1", &["call"]));

        assert_eq!(prediction.instance_id, "line-n.1");
        assert_eq!(prediction.sense, Sense::Phone);
        assert_eq!(prediction.deciding_word, "call");
        assert!((prediction.score - 10.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_classify_unknown_context_falls_back_to_product() {
        let classifier = trained_classifier();

        let prediction = classifier.classify(&instance("line-n.2", &["modem", "router"]));

        assert_eq!(prediction.sense, Sense::Product);
        assert_eq!(prediction.deciding_word, "");
        assert_eq!(prediction.score, 0.0);
    }

    #[test]
    fn test_prediction_display_matches_dump_format() {
        let prediction = Prediction {
            instance_id: "line-n.w8_059:8174:".to_string(),
            sense: Sense::Phone,
            deciding_word: "telephone".to_string(),
            score: 2.5,
        };
        assert_eq!(
            prediction.to_string(),
            "(\"line-n.w8_059:8174:\", \"Phone\", \"telephone\", 2.5)"
        );

        let fallback = Prediction {
            instance_id: "line-n.3".to_string(),
            sense: Sense::Product,
            deciding_word: String::new(),
            score: 0.0,
        };
        assert_eq!(fallback.to_string(), "(\"line-n.3\", \"Product\", \"\", 0)");
    }

    #[test]
    fn test_tag_writes_both_streams() -> Result<()> {
        let classifier = trained_classifier();
        let instances = vec![
            instance("line-n.1", &["call"]),
            instance("line-n.2", &["unknown"]),
        ];

        let mut model = Vec::new();
        let mut answers = Vec::new();
        classifier.tag(&instances, &mut model, &mut answers)?;

        let model = String::from_utf8(model).expect("model output is not UTF-8");
        let answers = String::from_utf8(answers).expect("answers output is not UTF-8");

        let mut model_lines = model.lines();
        let first = model_lines.next().expect("missing model line");
        assert!(first.starts_with("(\"line-n.1\", \"Phone\", \"call\", "));
        assert_eq!(
            model_lines.next(),
            Some("(\"line-n.2\", \"Product\", \"\", 0)")
        );

        assert_eq!(answers, "line-n.1 Phone\nline-n.2 Product\n");
        Ok(())
    }

    #[test]
    fn test_create_model_file_refuses_existing_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("my-model.txt");

        let created = create_model_file(&path);
        assert!(created.is_ok());
        drop(created);

        let clobbered = create_model_file(&path);
        assert!(matches!(clobbered, Err(LinewiseError::Model(_))));
    }
}
