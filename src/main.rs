// ABOUTME: CLI entry point: REPL or file runner

use clap::Parser;
use datascript::builtins::{filesystem::builtin_load, register_builtins};
use datascript::config;
use datascript::env::Environment;
use datascript::eval::eval;
use datascript::parser::parse;
use datascript::reader::read_program;
use datascript::value::Value;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use std::rc::Rc;

/// DataScript interpreter
#[derive(Parser, Debug)]
#[command(name = "datascript")]
#[command(version = config::VERSION)]
#[command(about = "A small dynamically-typed Lisp with Q-expressions and partial application")]
struct CliArgs {
    /// Script files to load in order (starts the REPL when absent)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    if args.files.is_empty() {
        run_repl(&env)
    } else {
        run_files(&env, &args.files);
        Ok(())
    }
}

/// Hand each file to the `load` builtin and print any Error it returns.
fn run_files(env: &Rc<Environment>, files: &[PathBuf]) {
    for file in files {
        let result = builtin_load(env, vec![Value::Str(file.display().to_string())]);
        if result.is_error() {
            println!("{}", result);
        }
    }
}

fn run_repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(rl_config)
        .map_err(|e| format!("failed to initialize line editor: {}", e))?;
    let _ = rl.load_history(config::HISTORY_FILE);

    println!("{} v{}", config::WELCOME_MESSAGE, config::VERSION);
    println!("{}", config::WELCOME_HINT);

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse(&line) {
                    Ok(nodes) => println!("{}", eval(env, read_program(nodes))),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
    Ok(())
}
