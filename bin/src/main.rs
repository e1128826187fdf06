use chrono::Datelike;
use clap::{Parser, Subcommand};
use starweave::*;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::process::ExitCode;
use std::time::Instant;

/// Generates seven-letter word puzzles from a word list and judges play
/// sessions against them.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to a file that contains a list of words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Seed for the puzzle search. Defaults to a seed derived from today's
    /// date, so unseeded runs produce the daily puzzle.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Minimum number of valid answers a puzzle must have.
    #[clap(long, default_value_t = 20)]
    min_answers: usize,

    /// Maximum number of candidate words to try before giving up.
    #[clap(long, default_value_t = 2000)]
    max_tries: usize,

    /// Minimum accepted word length.
    #[clap(long, default_value_t = 4)]
    min_len: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and print its letters, answers, and maximum score.
    Generate,
    /// Generate a puzzle and judge words typed on stdin.
    Play,
}

fn main() -> ExitCode {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let corpus = match load_corpus(&args.words_file) {
        Ok(corpus) => corpus,
        Err(err) => {
            eprintln!("Error reading {}: {}", args.words_file, err);
            return ExitCode::FAILURE;
        }
    };
    println!("There are {} usable words.", corpus.len());

    let seed = args.seed.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        daily_seed(today.year(), today.month(), today.day())
    });
    let options = GeneratorOptions {
        min_answers: args.min_answers,
        max_tries: args.max_tries,
        min_len: args.min_len,
    };

    let Some(puzzle) = generate(&corpus, seed, &options) else {
        eprintln!(
            "No puzzle with at least {} answers found; try a larger word list, \
             another seed, or --min-answers.",
            options.min_answers
        );
        return ExitCode::FAILURE;
    };

    let outcome = match args.command {
        Command::Generate => {
            print_puzzle(&puzzle);
            Ok(())
        }
        Command::Play => play(&puzzle, options.min_len),
    };
    if let Err(err) = outcome {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    ExitCode::SUCCESS
}

fn load_corpus(path: &str) -> io::Result<Corpus> {
    let mut words_reader = io::BufReader::new(File::open(path)?);
    Corpus::from_reader(&mut words_reader)
}

fn print_puzzle(puzzle: &Puzzle) {
    let ring: String = puzzle.ring_letters().iter().collect();
    println!(
        "Center letter: {}\nRing letters: {}",
        puzzle.required_letter(),
        ring
    );
    println!(
        "{} answers, {} starweaves, maximum score {}.",
        puzzle.allowed_words().len(),
        puzzle.starweaves().len(),
        puzzle.max_score()
    );
    let mut answers: Vec<&str> = puzzle.allowed_words().iter().map(|word| &**word).collect();
    answers.sort_unstable();
    for answer in answers {
        if puzzle.starweaves().contains(answer) {
            println!("\t{} *", answer);
        } else {
            println!("\t{}", answer);
        }
    }
}

fn play(puzzle: &Puzzle, min_len: usize) -> io::Result<()> {
    let ring: String = puzzle.ring_letters().iter().collect();
    println!(
        "Make words of {} or more letters using [{}] and the center letter '{}'.\n\
         Words using all seven letters score a bonus. Enter an empty line to stop.",
        min_len,
        ring,
        puzzle.required_letter()
    );

    let mut found: Vec<String> = Vec::new();
    let mut total = 0;
    let stdin = io::stdin();
    for maybe_line in stdin.lock().lines() {
        let line = maybe_line?;
        let word = line.trim().to_lowercase();
        if word.is_empty() {
            break;
        }
        if found.iter().any(|known| *known == word) {
            println!("Already found.");
            continue;
        }
        match puzzle.judge(&word) {
            Some(points) => {
                total += points;
                found.push(word.clone());
                if puzzle.starweaves().contains(word.as_str()) {
                    println!("Starweave! +{} ({} total)", points, total);
                } else {
                    println!("+{} ({} total)", points, total);
                }
            }
            None => println!("Not an answer."),
        }
    }

    println!(
        "You found {} of {} words for {} of {} points.",
        found.len(),
        puzzle.allowed_words().len(),
        total,
        puzzle.max_score()
    );
    Ok(())
}
