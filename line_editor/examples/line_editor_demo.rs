// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A tiny REPL. Run with:
//!
//! ```sh
//! cargo run --example line_editor_demo -- --words cat,catch,cats,dog
//! cargo run --example line_editor_demo -- --filenames --log-file /tmp/line_editor.log
//! ```
//!
//! Built in commands: `history`, `clear-history`, `exit`.

use clap::Parser;
use r3bl_line_editor::{Completer, FilenameCompleter, LineSession, LineSessionConfig,
                       ReadlineEvent, SimpleCompleter, TracingConfig,
                       try_initialize_logging_global};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive line editor demo")]
struct Cli {
    /// Prompt shown before each line.
    #[arg(long, short = 'p', default_value = "> ")]
    prompt: String,

    /// How many lines to remember.
    #[arg(long, default_value_t = r3bl_line_editor::DEFAULT_HISTORY_CAPACITY)]
    history_size: usize,

    /// Comma separated words to complete with <Tab>.
    #[arg(long, short = 'w', value_delimiter = ',')]
    words: Vec<String>,

    /// Complete file names instead of words.
    #[arg(long, short = 'f')]
    filenames: bool,

    /// Write debug logs to this file. Logging is off without it.
    #[arg(long, short = 'l')]
    log_file: Option<String>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    try_initialize_logging_global(TracingConfig::from(cli.log_file.clone()))?;
    tracing::info!(message = "starting demo", cli = ?cli);

    let config = LineSessionConfig::default().with_history_capacity(cli.history_size);
    let completer: Option<Box<dyn Completer>> = if cli.filenames {
        Some(Box::new(FilenameCompleter::new()))
    } else if cli.words.is_empty() {
        None
    } else {
        Some(Box::new(SimpleCompleter::new(cli.words.clone())))
    };

    let mut session = LineSession::new(config);
    session.set_completer(completer);

    loop {
        match session.read_line(&cli.prompt)? {
            ReadlineEvent::Line(line) => match line.trim() {
                "" => {}
                "exit" => break,
                "history" => {
                    for (index, entry) in session.history().iter_chronological().enumerate()
                    {
                        println!("{:>4}  {entry}", index + 1);
                    }
                }
                "clear-history" => session.set_max_history(cli.history_size),
                _ => {
                    println!("{line}");
                    session.add_history(line.as_str());
                }
            },
            ReadlineEvent::Cancelled => println!("^C"),
            ReadlineEvent::Eof => break,
        }
    }

    Ok(())
}
