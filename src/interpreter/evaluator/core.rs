use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{FunctionDef, Node},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::binary::core::eval_binary, namespace::Namespace, value::core::Value,
    },
    parse_and_evaluate,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum nesting of user function calls.
pub const MAX_CALL_DEPTH: usize = 100;

/// Stores the runtime evaluation context.
///
/// One context is one interpreter session: it holds the variable namespace,
/// the user functions declared so far, and the sink that `print` writes to.
/// Everything lives as long as the session.
///
/// ## Usage
///
/// `Context` is created once and reused for every line or file of a
/// session. Output goes to standard output unless another writer is
/// supplied with [`Context::with_output`].
pub struct Context<W = io::Stdout> {
    /// Variable bindings of the session.
    pub namespace:         Namespace,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when evaluating declarations like `Square(x) ->`.
    pub functions:         HashMap<String, Rc<FunctionDef>>,
    output:                W,
    pub(crate) call_depth: usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new session that prints to standard output, with an empty
    /// namespace and no user functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a new session that prints to `output`.
    ///
    /// # Example
    /// ```
    /// use gander::Context;
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.run("print 1 + 1\n").unwrap();
    ///
    /// assert_eq!(context.output(), b"2\n");
    /// ```
    pub fn with_output(output: W) -> Self {
        Self { namespace: Namespace::new(),
               functions: HashMap::new(),
               output,
               call_depth: 0 }
    }

    /// The writer `print` statements write to.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the session, returning its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Parses and evaluates `source` in this session.
    ///
    /// Equivalent to [`parse_and_evaluate`].
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        parse_and_evaluate(source, self)
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node variant; every variant yields exactly one value.
    ///
    /// # Example
    /// ```
    /// use gander::{Context, Value, ast::Node};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let node = Node::Identifier { name: "y".to_string(),
    ///                               line: 1, };
    ///
    /// assert_eq!(context.eval(&node).unwrap(), Value::Nil);
    /// ```
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Literal { value, .. } => Ok(*value),
            Node::Identifier { name, .. } => Ok(self.namespace.get(name)),
            Node::BinaryExpr { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, left, right, *line)
            },
            Node::Assign { name, expr, .. } => {
                let value = self.eval(expr)?;
                self.namespace.set(name.as_str(), value);
                Ok(value)
            },
            Node::Block { children, .. } => self.eval_block(children),
            Node::Branch { arms, default, .. } => self.eval_branch(arms, default.as_deref()),
            Node::FunctionDef(def) => Ok(self.define_function(def)),
            Node::Call { name,
                         arguments,
                         line, } => self.call_function(name, arguments, *line),
            Node::KeywordStmt { keyword,
                                expr,
                                line, } => self.eval_keyword(*keyword, expr, *line),
        }
    }

    /// Evaluates statements in order, yielding the last one's value.
    ///
    /// An empty block yields `nil`. The first failing statement stops the
    /// block; the effects of earlier statements stand.
    fn eval_block(&mut self, children: &[Node]) -> EvalResult<Value> {
        let mut last = Value::Nil;
        for child in children {
            last = self.eval(child)?;
        }
        Ok(last)
    }
}
