//! # gander
//!
//! gander is an interpreter for a small, dynamically typed scripting language
//! whose blocks are structured by indentation.
//! It lexes, parses, and evaluates programs made of `nil`/`true`/`false` and
//! integer literals, variables, arithmetic and logical expressions,
//! `if`/`unless`/`elif`/`else` branches, `->` function declarations, and
//! `print`/`return` statements.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use log::debug;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context, namespace::Namespace, parser::core::parse, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a program as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one closed node variant per language construct.
/// - Renders trees as an indented listing for debugging.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while parsing or
/// evaluating a program, together with the crate-level [`Error`] that wraps
/// both phases.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model and
/// the session namespace.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Parses `source` and evaluates it against the session held by `context`.
///
/// The returned value is the value of the last top-level statement, or
/// [`Value::Nil`] for an empty program. A syntax error prevents evaluation
/// entirely; a runtime error aborts evaluation at the failing statement while
/// the effects of earlier statements (assignments, printed output) stand.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed source and [`Error::Runtime`] when
/// evaluation fails.
///
/// # Examples
/// ```
/// use gander::{Context, Value, parse_and_evaluate};
///
/// let mut context = Context::with_output(Vec::new());
///
/// let value = parse_and_evaluate("x = 5\nx + 1\n", &mut context).unwrap();
/// assert_eq!(value, Value::Integer(6));
///
/// let value = parse_and_evaluate("x\n", &mut context).unwrap();
/// assert_eq!(value, Value::Integer(5));
///
/// assert!(parse_and_evaluate("true + 1\n", &mut context).is_err());
/// ```
pub fn parse_and_evaluate<W: Write>(source: &str, context: &mut Context<W>) -> Result<Value, Error> {
    let root = parse(source)?;
    debug!("parsed program:\n{}", root.describe(0));

    Ok(context.eval(&root)?)
}
