use std::{fs, process};

use clap::Parser;
use gander::{Context, Error, Value, parse};
use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};

/// gander is a small indentation-structured scripting language with
/// integers, booleans, conditionals and user functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells gander to read a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the final value of the script after running it.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the syntax tree before evaluating the script.
    #[arg(short, long)]
    describe: bool,

    /// A script, or a path with `--file`. Starts an interactive session when
    /// omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl(args.describe);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            process::exit(1);
        })
    } else {
        contents
    };

    let mut context = Context::new();
    match run_source(&mut context, &script, args.describe) {
        Ok(value) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Runs an interactive session until end of input.
///
/// Lines ending in `:` or `->` open a block; further lines are collected
/// until an empty line closes it.
fn repl(describe: bool) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Could not start the interactive session: {e}");
            process::exit(1);
        },
    };
    let mut context = Context::new();
    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() { ">> " } else { ".. " };
        match editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    debug!("could not record history: {e}");
                }

                if !pending.is_empty() && !line.trim().is_empty() {
                    pending.push_str(&line);
                    pending.push('\n');
                    continue;
                }
                if pending.is_empty() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    pending.push_str(&line);
                    pending.push('\n');
                    if opens_block(&line) {
                        continue;
                    }
                }

                let source = std::mem::take(&mut pending);
                match run_source(&mut context, &source, describe) {
                    Ok(Value::Nil) => {},
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}

fn opens_block(line: &str) -> bool {
    let line = line.trim_end();
    line.ends_with(':') || line.ends_with("->")
}

/// Parses and evaluates `source`, printing the tree first when asked to.
fn run_source(context: &mut Context, source: &str, describe: bool) -> Result<Value, Error> {
    let root = parse(source)?;
    debug!("running {} line(s)", source.lines().count());
    if describe {
        print!("{}", root.describe(0));
    }
    Ok(context.eval(&root)?)
}

