use std::{env, process};

use lemma_finder::{
    config::config::{Config, load_config},
    lemmatizer::lemmatizer::{Lemmatizer, LemmatizerError, summarize},
};
use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn print_config(config: &Config, lemmatizer: &Lemmatizer) {
    println!("  Dictionary:            {}", config.dictionary_path);
    println!("  Words in dictionary:   {}", lemmatizer.dictionary().size());
    println!("  Min prefix length:     {}", config.min_prefix_length);
    println!("  Max length gap:        {}", config.max_length_gap);
    println!("  Min prefix proximity:  {}", config.min_proximity);
    println!("  Max edit distance:     {}", config.max_edit_distance);
}

fn lemmatize(lemmatizer: &Lemmatizer, text: &str) {
    match lemmatizer.lemmatize_line(text) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{} -> {}", token.word, token.outcome);
            }
            let (found, lemmas) = summarize(&tokens);
            println!(
                "{} of {} words matched, {} distinct lemmas",
                found,
                tokens.len(),
                lemmas.len()
            );
        }
        Err(LemmatizerError::Tokenization(e)) => println!("{}", e),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_config("config.json");
    if let Some(path) = env::args().nth(1) {
        config.dictionary_path = path;
    }

    let lemmatizer = match Lemmatizer::new(&config) {
        Ok(lemmatizer) => lemmatizer,
        Err(e) => {
            error!(error = %e, "dictionary unavailable");
            eprintln!("Cannot start without a dictionary: {}", e);
            process::exit(1);
        }
    };

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            process::exit(1);
        }
    };

    println!("\nCurrent Configuration:");
    print_config(&config, &lemmatizer);
    println!("\nType 'help' for commands or 'exit' to quit.\n");

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    debug!(error = %e, "could not add line to history");
                }

                let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

                match command {
                    "help" => {
                        println!("The valid commands are->");
                        println!("lemma [text]: Finds the lemma of every word of the text");
                        println!("size: Shows how many words the dictionary holds");
                        println!("config: Shows the current configuration");
                        println!("exit: Quits");
                    }
                    "lemma" => lemmatize(&lemmatizer, rest),
                    "size" => {
                        println!(
                            "The dictionary holds {} words ({} malformed lines skipped)",
                            lemmatizer.dictionary().size(),
                            lemmatizer.dictionary().skipped_lines()
                        );
                    }
                    "config" => print_config(&config, &lemmatizer),
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!(
                            "Invalid command. Type help if you want to see the valid commands"
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
