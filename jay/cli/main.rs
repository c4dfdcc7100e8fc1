// Copyright (C) 2026 The Jay Team.
// This file is part of the Jay library.

// The Jay library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Jay library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Jay library. If not, see <https://www.gnu.org/licenses/>.

#![forbid(unsafe_code)]

use jay_errors::{CliError, Result};

use clap::Parser;
use std::{fs, io::Read, path::PathBuf, process::exit};

#[derive(Debug, Parser)]
#[clap(name = "jay", about = "Parse Jay source text and print the AST as JSON")]
struct Opt {
    /// Path to the source file. Standard input is read when no path is given.
    input_path: Option<PathBuf>,
}

fn run(opt: Opt) -> Result<()> {
    let source = match &opt.input_path {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| CliError::failed_to_load_source(path, e))?
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::failed_to_read_stdin)?;
            source
        }
    };

    tracing::debug!("parsing {} bytes of source", source.len());
    let ast = jay_parser::parse_ast(&source)?;

    println!("{}", ast.to_json_string()?);
    Ok(())
}

fn main() {
    color_backtrace::install();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("JAY_LOG"))
        .init();

    if let Err(error) = run(Opt::parse()) {
        eprintln!("{error}");
        exit(error.exit_code());
    }
}
