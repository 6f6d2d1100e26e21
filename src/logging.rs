/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      logging.rs
 * Purpose:   Installs the `tracing` subscriber used by the binary.
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

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Targets used by the library and binary.
pub const TARGETS: [&str; 3] = ["whilebool::lexer", "whilebool::parser", "whilebool::cli"];

/// Builds the filter directive for `config`.
///
/// Other crates stay at `warn`; the whilebool targets use the configured
/// level.
pub fn directive(config: &LogConfig) -> String {
    let mut directive = String::from("warn");
    for target in TARGETS {
        directive.push_str(&format!(",{}={}", target, config.level));
    }
    directive
}

/// Installs a global subscriber writing to stderr.
///
/// `RUST_LOG`, when set, replaces the configured filter. Calling this
/// twice is harmless: the second subscriber is simply not installed.
pub fn init_logger(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(config)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(error) = result {
        eprintln!("warning: logger not installed: {}", error);
    }
}
