use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use monkey::{Interpreter, interpreter::object::Object};

/// monkey is a small programming language with closures, hashes and
/// syntactic macros.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run, or its path with `--file`. Starts a REPL when
    /// omitted.
    contents: Option<String>,
}

const PROMPT: &str = ">> ";

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match Interpreter::new().run(&script) {
        Ok(Object::Nil) => {},
        Ok(value @ Object::Error(_)) => {
            eprintln!("{value}");
            std::process::exit(1);
        },
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Reads lines from stdin and evaluates each one in a single session.
fn repl() {
    println!("This is the monkey programming language!");
    println!("Feel free to type in commands");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        match interpreter.run(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
