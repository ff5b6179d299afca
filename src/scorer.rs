use std::fs;
use std::io::Write;
use std::path::Path;

use crate::corpus::Sense;
use crate::error::{LinewiseError, Result};

/// Accuracy report for predicted senses against a gold key.
///
/// The four contingency cells are indexed actual-then-predicted, matching
/// the printed table (rows = actual sense, columns = predicted sense).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Actual Phone, predicted Phone.
    pub phone_as_phone: usize,
    /// Actual Phone, predicted Product.
    pub phone_as_product: usize,
    /// Actual Product, predicted Phone.
    pub product_as_phone: usize,
    /// Actual Product, predicted Product.
    pub product_as_product: usize,
    /// Positional matches divided by the prediction count, as a percentage.
    pub accuracy: f64,
    /// Majority share of the actual senses, as a fraction of the key count.
    pub baseline: f64,
}

impl ScoreReport {
    /// Prints the contingency table, the accuracy line, and the baseline
    /// line in the scorer's output layout. The floats go through `{:?}` so
    /// integral values keep their trailing `.0`.
    pub fn write<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{:<9}{:>7}{:>9}", "Predicted", "Phone", "Product")?;
        writeln!(out, "Actual")?;
        writeln!(out, "{:<9}{:>7}{:>9}", "Phone", self.phone_as_phone, self.phone_as_product)?;
        writeln!(
            out,
            "{:<9}{:>7}{:>9}",
            "Product", self.product_as_phone, self.product_as_product
        )?;
        writeln!(out, "Accuracy score: {:?} %", self.accuracy)?;
        writeln!(out, "Most frequent sense baseline: {:?}%", self.baseline)
    }
}

/// Extracts predicted senses from answer lines.
///
/// A line counts once per sense keyword it contains, `Phone` checked before
/// `Product`; lines containing neither contribute nothing.
pub fn parse_answers(text: &str) -> Vec<Sense> {
    let mut senses = Vec::new();
    for line in text.lines() {
        if line.contains("Phone") {
            senses.push(Sense::Phone);
        }
        if line.contains("Product") {
            senses.push(Sense::Product);
        }
    }
    senses
}

/// Extracts gold senses from key lines, keyed on the lowercase `phone` /
/// `product` substrings.
pub fn parse_key(text: &str) -> Vec<Sense> {
    let mut senses = Vec::new();
    for line in text.lines() {
        if line.contains("phone") {
            senses.push(Sense::Phone);
        }
        if line.contains("product") {
            senses.push(Sense::Product);
        }
    }
    senses
}

/// Compares predictions against the gold key.
///
/// Pairs the two lists positionally, stopping at the shorter one, and
/// builds the 2x2 contingency counts from the pairs. Accuracy divides the
/// matches by the prediction count, not the key count; the baseline divides
/// the larger actual-sense count by the key count.
///
/// # Errors
/// Fails when either list is empty, since accuracy and baseline would have
/// no denominator.
pub fn evaluate(predictions: &[Sense], key: &[Sense]) -> Result<ScoreReport> {
    if predictions.is_empty() {
        return Err(LinewiseError::score("no senses found in the answers"));
    }
    if key.is_empty() {
        return Err(LinewiseError::score("no senses found in the key"));
    }

    let mut phone_as_phone = 0;
    let mut phone_as_product = 0;
    let mut product_as_phone = 0;
    let mut product_as_product = 0;
    for (predicted, actual) in predictions.iter().zip(key.iter()) {
        match (actual, predicted) {
            (Sense::Phone, Sense::Phone) => phone_as_phone += 1,
            (Sense::Phone, Sense::Product) => phone_as_product += 1,
            (Sense::Product, Sense::Phone) => product_as_phone += 1,
            (Sense::Product, Sense::Product) => product_as_product += 1,
        }
    }

    let matches = phone_as_phone + product_as_product;
    let accuracy = matches as f64 / predictions.len() as f64 * 100.0;

    let actual_phone = key.iter().filter(|sense| **sense == Sense::Phone).count();
    let actual_product = key.len() - actual_phone;
    let baseline = actual_phone.max(actual_product) as f64 / key.len() as f64;

    Ok(ScoreReport {
        phone_as_phone,
        phone_as_product,
        product_as_phone,
        product_as_product,
        accuracy,
        baseline,
    })
}

/// Scores an answers file against a key file and writes the report.
///
/// # Arguments
/// * `answers_path` - The path to the prediction file, one instance per line.
/// * `key_path` - The path to the gold key file.
/// * `out` - Where the report is written.
///
/// # Errors
/// Returns an error if either file cannot be read, yields no senses, or the
/// report cannot be written.
pub fn score_files<W: Write>(answers_path: &Path, key_path: &Path, out: W) -> Result<()> {
    let answers = fs::read_to_string(answers_path).map_err(|e| {
        LinewiseError::score(format!("cannot read {}: {}", answers_path.display(), e))
    })?;
    let key = fs::read_to_string(key_path)
        .map_err(|e| LinewiseError::score(format!("cannot read {}: {}", key_path.display(), e)))?;

    let report = evaluate(&parse_answers(&answers), &parse_key(&key))?;
    report.write(out)?;
    Ok(())
}
