//! `pseudoword` - generate random pseudowords from a dictionary file.
//!
//! ```text
//! % pseudoword -n 4 -p unkn
//! unknotte
//! unknower
//! unknotoxospostlinout
//! unknoscal
//! ```

mod display;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pseudoword_core::io::load_words;
use pseudoword_core::{Generator, NGramModel, PredictionInput};

/// *nix systems ship a standard word list, use it by default.
const DEFAULT_DICTFILE: &str = "/usr/share/dict/words";

#[derive(Parser, Debug)]
#[command(name = "pseudoword")]
#[command(version, about = "Generate random pseudowords.", long_about = None)]
struct Args {
    /// Probability of forming a compound word
    #[arg(short = 'c', value_name = "PCOMP", default_value_t = 0.0)]
    pcompound: f64,

    /// N of the N-gram model
    #[arg(short = 'g', value_name = "N", default_value_t = 3)]
    ngram: usize,

    /// Number of generated pseudowords
    #[arg(short = 'n', value_name = "NWORDS", default_value_t = 10)]
    nwords: usize,

    /// Constrain generated pseudowords to start with this prefix
    #[arg(short = 'p', value_name = "PREFIX")]
    prefix: Option<String>,

    /// Width of output at which lines should be wrapped (0: one word per line)
    #[arg(short = 'w', value_name = "WIDTH", default_value_t = 0)]
    width: usize,

    /// Seed of the random generator, for reproducible output
    #[arg(short = 's', value_name = "SEED")]
    seed: Option<u64>,

    /// Retries allowed to avoid pseudowords that are real dictionary words
    #[arg(short = 'r', value_name = "RETRIES", default_value_t = 0)]
    retries: usize,

    /// Sample words from this file
    #[arg(value_name = "DICT", default_value = DEFAULT_DICTFILE)]
    dictfile: PathBuf,
}

/// Loads the dictionary, learns the model and generates the pseudowords.
fn run(args: Args) -> Result<Vec<String>> {
    let words = load_words(&args.dictfile)
        .with_context(|| format!("cannot load dictionary {}", args.dictfile.display()))?;
    let model = NGramModel::build(&words, args.ngram).context("cannot build the word model")?;
    log::debug!("{} states learnt from {} words", model.len(), words.len());

    // `-p ""` means no constraint
    let prefix = args.prefix.filter(|prefix| !prefix.is_empty());
    let input = PredictionInput::new(args.nwords, prefix, args.retries)
        .with_compound_probability(args.pcompound)?;

    let mut generator = Generator::new(model, args.seed);
    Ok(generator.predict_batch(&input)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let width = args.width;

    let pseudowords = run(args)?;

    let mut out = io::stdout().lock();
    for line in display::lines(&pseudowords, width) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}
