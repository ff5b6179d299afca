use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use linewise::classifier::{create_model_file, Classifier};
use linewise::corpus::CorpusReader;
use linewise::decision_list::{DecisionList, DEFAULT_SMOOTHING};
use linewise::get_version;
use linewise::scorer;

#[derive(Debug, Args)]
#[clap(
    author,
    about = "Train on a labeled corpus and disambiguate a test corpus",
    version = get_version(),
)]
struct DisambiguateArgs {
    #[arg(short, long, default_value_t = DEFAULT_SMOOTHING)]
    smoothing: f64,

    train_file: PathBuf,
    test_file: PathBuf,
    model_file: PathBuf,
}

#[derive(Debug, Args)]
#[clap(
    author,
    about = "Score predicted senses against a gold key",
    version = get_version(),
)]
struct ScoreArgs {
    answers_file: PathBuf,
    key_file: PathBuf,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Disambiguate(DisambiguateArgs),
    Score(ScoreArgs),
}

#[derive(Debug, Parser)]
#[clap(
    name = "linewise",
    author,
    about = "A word sense disambiguation command line interface",
    version = get_version(),
)]
struct CommandArgs {
    #[clap(subcommand)]
    command: Commands,
}

fn disambiguate(args: DisambiguateArgs) -> Result<(), Box<dyn Error>> {
    // Claim the model file first so a pre-existing one aborts before any
    // corpus is read.
    let mut model = io::BufWriter::new(create_model_file(&args.model_file)?);

    let reader = CorpusReader::new();
    let examples = reader.load_training(&args.train_file)?;

    let mut learner = DecisionList::new(args.smoothing);
    learner.train(&examples)?;

    let instances = reader.load_test(&args.test_file)?;
    let classifier = Classifier::new(learner);

    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    classifier.tag(&instances, &mut model, &mut writer)?;

    Ok(())
}

fn score(args: ScoreArgs) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let writer = io::BufWriter::new(stdout.lock());

    scorer::score_files(&args.answers_file, &args.key_file, writer)?;

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CommandArgs::parse();

    match args.command {
        Commands::Disambiguate(args) => disambiguate(args),
        Commands::Score(args) => score(args),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
