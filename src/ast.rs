use std::fmt::{self, Write};

use crate::interpreter::value::core::Value;

/// An abstract syntax tree node.
///
/// The parser produces one root [`Node::Block`] per program. The tree is
/// acyclic and can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A constant value.
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryExpr {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = expr`
    Assign {
        /// Name of the variable being bound.
        name: String,
        /// The value expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Statements sharing one indentation level.
    Block {
        /// The statements, in source order.
        children: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `if`/`unless` with optional `elif` arms and `else`, or the inline
    /// `statement if condition` form.
    Branch {
        /// Conditional arms, tried in order.
        arms:    Vec<Arm>,
        /// Body evaluated when no arm matches.
        default: Option<Box<Self>>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `Name(a, b) ->` followed by an indented body.
    FunctionDef(FunctionDef),
    /// A call such as `Square(3)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `print expr` or `return expr`.
    KeywordStmt {
        /// Which keyword introduced the statement.
        keyword: Keyword,
        /// The operand expression.
        expr:    Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
}

/// One conditional arm of a [`Node::Branch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm {
    pub condition: Node,
    pub body:      Node,
    /// `true` for `unless` arms, which match when the condition is falsy.
    pub inverted:  bool,
}

/// A user function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name:   String,
    pub params: Vec<String>,
    pub body:   Box<Node>,
    pub line:   usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Equal,
    NotEqual,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    Print,
    Return,
}

impl Node {
    /// Renders the tree rooted at this node as an indented listing, one node
    /// per line, two spaces per level of `depth`.
    ///
    /// # Example
    /// ```
    /// use gander::parse;
    ///
    /// let root = parse("x = 1 + 2\n").unwrap();
    ///
    /// assert_eq!(root.describe(0),
    ///            "# BLOCK (1):\n\
    ///             ##   ASSIGN `x` to:\n\
    ///             ##     ADD:\n\
    ///             ##       VALUE: 1\n\
    ///             ##       VALUE: 2\n");
    /// ```
    #[must_use]
    pub fn describe(&self, depth: usize) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.describe_into(&mut out, depth);
        out
    }

    fn describe_into(&self, out: &mut String, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);

        match self {
            Self::Literal { value, .. } => writeln!(out, "# {pad}VALUE: {value}")?,
            Self::Identifier { name, .. } => writeln!(out, "# {pad}IDENT: `{name}`")?,
            Self::BinaryExpr { op, left, right, .. } => {
                writeln!(out, "# {pad}{}:", op.name())?;
                left.describe_into(out, depth + 1)?;
                right.describe_into(out, depth + 1)?;
            },
            Self::Assign { name, expr, .. } => {
                writeln!(out, "# {pad}ASSIGN `{name}` to:")?;
                expr.describe_into(out, depth + 1)?;
            },
            Self::Block { children, .. } => {
                writeln!(out, "# {pad}BLOCK ({}):", children.len())?;
                for child in children {
                    child.describe_into(out, depth + 1)?;
                }
            },
            Self::Branch { arms, default, .. } => {
                for (i, arm) in arms.iter().enumerate() {
                    let header = match (i, arm.inverted) {
                        (0, false) => "IF",
                        (0, true) => "UNLESS",
                        _ => "ELSE IF",
                    };
                    writeln!(out, "# {pad}{header}:")?;
                    arm.condition.describe_into(out, depth + 1)?;
                    writeln!(out, "# {pad}THEN:")?;
                    arm.body.describe_into(out, depth + 1)?;
                }
                if let Some(default) = default {
                    writeln!(out, "# {pad}ELSE THEN:")?;
                    default.describe_into(out, depth + 1)?;
                }
            },
            Self::FunctionDef(def) => {
                writeln!(out, "# {pad}DEF `{}` ({}):", def.name, def.params.join(", "))?;
                def.body.describe_into(out, depth + 1)?;
            },
            Self::Call { name, arguments, .. } => {
                writeln!(out, "# {pad}CALL `{name}` ({}):", arguments.len())?;
                for argument in arguments {
                    argument.describe_into(out, depth + 1)?;
                }
            },
            Self::KeywordStmt { keyword, expr, .. } => {
                writeln!(out, "# {pad}{}:", keyword.name())?;
                expr.describe_into(out, depth + 1)?;
            },
        }

        Ok(())
    }
}

impl BinaryOperator {
    /// Upper-case name used in tree listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Equal => "EQUALS",
            Self::NotEqual => "NOT_EQUALS",
            Self::Add => "ADD",
            Self::Sub => "SUBTRACT",
            Self::Mul => "MULTIPLY",
            Self::Div => "DIVIDE",
        }
    }
}

impl Keyword {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "PRINT",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
