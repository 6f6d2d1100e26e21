/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the grammar recognizer.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement rules
 *   - Expression rules
 *   - Shared helper utilities
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
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

/// Core recognizer orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `recognize(tokens)` entry point
pub mod parser;

/// Statement-level rules:
/// - program / while header
/// - open block tracking
pub mod statements;

/// Expression-level rules:
/// - operand ( operator operand )*
/// - open group tracking
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
/// - error construction
pub mod helpers;

/// Re-export the public entry point so callers can use:
/// `crate::parser::recognize(...)`
pub use parser::{recognize, Parser};
