//! Runs the Cinder front-end from the command line: loads a source file, tokenizes it and parses
//! it into a syntax tree.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use cinder_base::{
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use cinder_lexical::token_stream::TokenStream;
use cinder_syntax::syntax_tree::program::Program;
pub use clap::Parser;

/// The way the syntax tree is printed by `--dump-syntax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
pub enum Format {
    /// The pretty-printed `Debug` structure of the tree.
    #[default]
    Debug,

    /// The canonical source text of the tree.
    Source,
}

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "cinder",
    about = "Cinder programming language front-end.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to run the front-end on.
    pub file: PathBuf,

    /// Prints out the tokens of the program, one per line.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// Prints out the syntax tree of the program.
    #[clap(long = "dump-syntax")]
    pub dump_syntax: bool,

    /// The format used by `--dump-syntax`.
    #[clap(long, value_enum, default_value_t = Format::Debug)]
    pub format: Format,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{}: {}", .path.display(), .source)]
    Load {
        path: PathBuf,
        source: source_file::Error,
    },

    #[error(transparent)]
    Lexical(#[from] cinder_lexical::error::Error),

    #[error(transparent)]
    Syntax(#[from] cinder_syntax::error::Error),

    #[error("failed to write the output: {0}")]
    Output(#[from] io::Error),
}

/// Runs the front-end with the given arguments, printing the results to the standard output stream
/// and the diagnostics to the standard error stream.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let stdout = io::stdout();

    match execute(argument, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,

        // these already render as a full diagnostic
        Err(error @ (Error::Lexical(..) | Error::Syntax(..))) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }

        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, error));
            ExitCode::FAILURE
        }
    }
}

fn execute(argument: &Argument, output: &mut impl Write) -> Result<(), Error> {
    let source_file = SourceFile::load(&argument.file).map_err(|source| Error::Load {
        path: argument.file.clone(),
        source,
    })?;

    let token_stream = TokenStream::tokenize(&source_file)?;

    if argument.dump_tokens {
        for token in token_stream.iter() {
            writeln!(output, "{token}")?;
        }

        return Ok(());
    }

    let program = Program::parse(&token_stream)?;

    if argument.dump_syntax {
        match argument.format {
            Format::Debug => writeln!(output, "{program:#?}")?,
            Format::Source => write!(output, "{program}")?,
        }

        return Ok(());
    }

    writeln!(
        output,
        "{}",
        Message::new(
            Severity::Info,
            format!(
                "{}: {} declaration(s) parsed",
                argument.file.display(),
                program.declarations().len()
            )
        )
    )?;

    Ok(())
}

#[cfg(test)]
mod tests;
