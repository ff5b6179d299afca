pub mod classifier;
pub mod corpus;
pub mod decision_list;
pub mod error;
pub mod scorer;
pub mod tokenizer;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn get_version() -> &'static str {
    VERSION
}
