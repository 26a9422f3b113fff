/// The evaluator module executes tree nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, applies operators,
/// updates the session namespace, performs `print` output, and yields one
/// value per node. It is the execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every node variant against a [`evaluator::core::Context`].
/// - Declares and calls user functions.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and lazily produces tokens for
/// literals, identifiers, keywords, and operators. Indentation at the start
/// of each line becomes an explicit token so the parser can track block
/// nesting.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Emits indentation, end-of-line and a single end-of-input token.
/// - Emits error tokens for unrecognized characters instead of halting.
pub mod lexer;
/// The namespace module holds variable bindings for one session.
pub mod namespace;
/// The parser module builds the tree from tokens.
///
/// The parser pulls tokens from the lexer on demand and assembles nodes on an
/// operand stack, enforcing the grammar and indentation-based block nesting.
///
/// # Responsibilities
/// - Converts tokens into nodes (expressions, statements, blocks).
/// - Validates grammar and indentation, reporting the first error with its
///   line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: `nil`, booleans and 64-bit integers.
/// - Implements truthiness, the logical operators and tag-sensitive equality.
pub mod value;
