/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line shell: loads source text, checks it and prints
 *            the verdict with statistics or a diagnostic.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 *
 * License:
 * This file is part of the WHILEBOOL project.
 *
 * WHILEBOOL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use whilebool::config::{Config, LogFormat, LogLevel, OutputFormat};
use whilebool::diagnostics::DiagnosticPrinter;
use whilebool::error::{Error, Result};
use whilebool::logging::init_logger;
use whilebool::report::Report;

const STDIN_NAME: &str = "<stdin>";

#[derive(Parser)]
#[command(
    name = "whilebool",
    about = "Checks boolean while-language source and prints lexical statistics",
    version
)]
struct Cli {
    /// Source file; omit or pass "-" to read stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the token sequence
    #[arg(long)]
    tokens: bool,

    /// Only match keywords as whole words
    #[arg(long)]
    strict_keywords: bool,

    #[arg(long, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[arg(long, value_enum, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// Loads the config file if one was given, then applies flags on top.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if self.tokens {
            config.show_tokens = true;
        }
        if self.strict_keywords {
            config.strict_keywords = true;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }

        Ok(config)
    }

    /// The input path, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the input was valid.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.resolve_config()?;
    init_logger(&config.log);

    let (name, source) = read_source(cli.input_path())?;
    info!(target: "whilebool::cli", file = %name, bytes = source.len(), "Checking source");

    let report = Report::build(&source, config.keyword_mode(), config.show_tokens);
    debug!(target: "whilebool::cli", valid = report.valid, "Check finished");

    match config.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    if let Some(error) = &report.error {
        if config.format == OutputFormat::Text {
            DiagnosticPrinter::new(name, source.as_str()).print(error);
        }
    }

    Ok(report.valid)
}

fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok((path.display().to_string(), source))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| Error::Io {
                    path: PathBuf::from(STDIN_NAME),
                    source,
                })?;
            Ok((STDIN_NAME.to_string(), source))
        }
    }
}
