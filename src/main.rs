use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use scrabble_crossword::crossword::RankingStrategy;
use scrabble_crossword::loader::{self, DEFAULT_WORDS};
use scrabble_crossword::report::{self, LayoutDocument};
use scrabble_crossword::utils::serialization;
use scrabble_crossword::{CrosswordGenerator, GeneratorConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Lay out a word list as a Scrabble-style crossword",
    long_about = None
)]
struct Args {
    /// Word list, one word per line (`3: Name` lines and `#` comments allowed)
    #[arg(short = 'w', long = "words")]
    words: Option<PathBuf>,

    /// Extra words accepted where letters cross, same format as the word list
    #[arg(short = 'd', long = "dictionary")]
    dictionary: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Board edge length
    #[arg(short = 'n', long = "size")]
    size: Option<usize>,

    /// Search time budget in seconds
    #[arg(short = 't', long = "timeout")]
    timeout: Option<f64>,

    /// Seed for word shuffling and tie-breaking
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Candidate ordering: intersections or intersections-then-center
    #[arg(short = 'r', long = "ranking")]
    ranking: Option<RankingStrategy>,

    /// Directory receiving layout.json and layout.txt
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let words = match &args.words {
        Some(path) => loader::load_word_list(path)?,
        None => DEFAULT_WORDS.iter().map(|w| w.to_uppercase()).collect(),
    };
    info!("Using {} words: {}", words.len(), words.join(", "));

    let generator = CrosswordGenerator::new(&words, config)?;
    let layout = match generator.generate() {
        Ok(layout) => layout,
        Err(failure) => {
            error!("Failed to generate crossword: {failure}");
            error!("Hint: try a larger board, a longer timeout or another seed.");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&layout, &mut out)?;
    out.flush()?;

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let json_path = dir.join("layout.json");
        serialization::save_to_disk(&LayoutDocument::from(&layout), &json_path)?;

        let text_path = dir.join("layout.txt");
        let file = File::create(&text_path)
            .with_context(|| format!("Failed to create file {}", text_path.display()))?;
        let mut writer = BufWriter::new(file);
        report::write_report(&layout, &mut writer)?;
        writer.flush()?;

        info!("Layout saved to {}", dir.display());
    }

    Ok(())
}

/// Defaults, then the config file, then `CROSSWORD_*` variables, then flags
fn build_config(args: &Args) -> Result<GeneratorConfig> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    let mut config = config.with_env()?;

    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(ranking) = args.ranking {
        config.ranking = ranking;
    }
    if let Some(path) = &args.dictionary {
        config.extra_words.extend(loader::load_word_list(path)?);
    }
    Ok(config)
}
