//! The abstract syntax tree produced by the parser.
//!
//! Nodes live in a `bumpalo` arena owned by the caller; child links are
//! plain arena references, so the whole tree is `Copy` and immutable once
//! built. Every node retains the token that introduced it for diagnostic
//! rendering.
//!
//! The `Display` implementations render the canonical parenthesized form
//! used by the precedence tests: infix as `(left op right)` with single
//! spaces, prefix as `(opoperand)` with none.

use crate::token::Token;
use core::fmt;


/// An ordered sequence of statements; the root of every parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'a> {
    pub statements: &'a [Statement<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    /// `let <name> = <value>;`
    Let {
        token: Token<'a>,
        name: Identifier<'a>,
        value: &'a Expression<'a>,
    },
    /// `return <value>;`
    Return {
        token: Token<'a>,
        value: &'a Expression<'a>,
    },
    /// A bare expression in statement position.
    Expression {
        token: Token<'a>,
        expression: &'a Expression<'a>,
    },
}

impl<'a> Statement<'a> {
    /// The token that introduced this statement.
    pub fn token(&self) -> Token<'a> {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => *token,
        }
    }
}

/// A brace-enclosed statement sequence, as used by `if` arms and function
/// bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStatement<'a> {
    pub token: Token<'a>,
    pub statements: &'a [Statement<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'a> {
    pub token: Token<'a>,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression<'a> {
    Integer {
        token: Token<'a>,
        value: i64,
    },
    Boolean {
        token: Token<'a>,
        value: bool,
    },
    Str {
        token: Token<'a>,
        value: &'a str,
    },
    Array {
        token: Token<'a>,
        elements: &'a [&'a Expression<'a>],
    },
    Identifier(Identifier<'a>),
    /// `<operator><right>`, for unary `!` and `-`.
    Prefix {
        token: Token<'a>,
        operator: &'a str,
        right: &'a Expression<'a>,
    },
    /// `<left> <operator> <right>`.
    Infix {
        token: Token<'a>,
        operator: &'a str,
        left: &'a Expression<'a>,
        right: &'a Expression<'a>,
    },
    /// `<left>[<index>]`.
    Index {
        token: Token<'a>,
        left: &'a Expression<'a>,
        index: &'a Expression<'a>,
    },
    If {
        token: Token<'a>,
        condition: &'a Expression<'a>,
        consequence: &'a BlockStatement<'a>,
        alternative: Option<&'a BlockStatement<'a>>,
    },
    Function {
        token: Token<'a>,
        parameters: &'a [Identifier<'a>],
        body: &'a BlockStatement<'a>,
    },
    /// `<function>(<arguments>)`.
    Call {
        token: Token<'a>,
        function: &'a Expression<'a>,
        arguments: &'a [&'a Expression<'a>],
    },
}

impl<'a> Expression<'a> {
    /// The token that introduced this expression.
    pub fn token(&self) -> Token<'a> {
        match self {
            Expression::Integer { token, .. }
            | Expression::Boolean { token, .. }
            | Expression::Str { token, .. }
            | Expression::Array { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::Index { token, .. }
            | Expression::If { token, .. }
            | Expression::Function { token, .. }
            | Expression::Call { token, .. } => *token,
            Expression::Identifier(identifier) => identifier.token,
        }
    }
}

// ============================================================================
// Canonical printing
// ============================================================================

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Statement::Return { value, .. } => write!(f, "return {};", value),
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
        }
    }
}

impl fmt::Display for BlockStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for statement in self.statements {
            write!(f, " {}", statement)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer { token, .. } => f.write_str(token.literal),
            Expression::Boolean { value, .. } => write!(f, "{}", value),
            Expression::Str { value, .. } => f.write_str(value),
            Expression::Array { elements, .. } => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::Index { left, index, .. } => write!(f, "({}[{}])", left, index),
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if {} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expression::Function {
                parameters, body, ..
            } => {
                write!(f, "fn(")?;
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, ") {}", body)
            }
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                write!(f, "{}(", function)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
