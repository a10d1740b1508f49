use std::fmt;

use crate::interpreter::token::{Literal, Token};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can appear directly in source
/// code: `nil`, the booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` keyword.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double-precision number literal.
    Number(f64),
    /// A string literal, without its quotes.
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(s) => Self::String(s.clone()),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so a tree has no shared or back references.
/// Operator nodes keep both the decoded operator, which consumers match on,
/// and the operator token, which carries the line for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `nil`).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:    UnaryOperator,
        /// The operator token.
        token: Token,
        /// The operand expression.
        right: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// The operator token.
        token: Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment of a new value to an existing variable.
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The value expression.
        value: Box<Self>,
    },
}

impl Expr {
    /// Dispatches to the visitor method matching this node's kind.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::{BinaryOperator, Expr, ExprVisitor, LiteralValue, UnaryOperator},
    ///     interpreter::token::Token,
    /// };
    ///
    /// struct Depth;
    ///
    /// impl ExprVisitor for Depth {
    ///     type Output = usize;
    ///
    ///     fn visit_literal(&mut self, _: &LiteralValue) -> usize {
    ///         1
    ///     }
    ///
    ///     fn visit_grouping(&mut self, expr: &Expr) -> usize {
    ///         1 + expr.accept(self)
    ///     }
    ///
    ///     fn visit_unary(&mut self, _: UnaryOperator, _: &Token, right: &Expr) -> usize {
    ///         1 + right.accept(self)
    ///     }
    ///
    ///     fn visit_binary(&mut self, left: &Expr, _: BinaryOperator, _: &Token, right: &Expr) -> usize {
    ///         1 + left.accept(self).max(right.accept(self))
    ///     }
    ///
    ///     fn visit_variable(&mut self, _: &Token) -> usize {
    ///         1
    ///     }
    ///
    ///     fn visit_assign(&mut self, _: &Token, value: &Expr) -> usize {
    ///         1 + value.accept(self)
    ///     }
    /// }
    ///
    /// let expr = Expr::Grouping { expr: Box::new(Expr::Literal { value: 1.0.into() }) };
    /// assert_eq!(expr.accept(&mut Depth), 2);
    /// ```
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal { value } => visitor.visit_literal(value),
            Self::Grouping { expr } => visitor.visit_grouping(expr),
            Self::Unary { op, token, right } => visitor.visit_unary(*op, token, right),
            Self::Binary { left,
                           op,
                           token,
                           right, } => visitor.visit_binary(left, *op, token, right),
            Self::Variable { name } => visitor.visit_variable(name),
            Self::Assign { name, value } => visitor.visit_assign(name, value),
        }
    }
}

/// One method per expression kind.
///
/// Every consumer of the tree (the evaluator, the printer) implements all of
/// them, so adding a node kind is a compile error until every consumer
/// handles it.
pub trait ExprVisitor {
    /// What visiting a node produces.
    type Output;

    /// Visits a literal.
    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output;
    /// Visits the inner expression of a grouping.
    fn visit_grouping(&mut self, expr: &Expr) -> Self::Output;
    /// Visits a prefix operation.
    fn visit_unary(&mut self, op: UnaryOperator, token: &Token, right: &Expr) -> Self::Output;
    /// Visits a binary operation.
    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    token: &Token,
                    right: &Expr)
                    -> Self::Output;
    /// Visits a variable reference.
    fn visit_variable(&mut self, name: &Token) -> Self::Output;
    /// Visits an assignment.
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Self::Output;
}

/// Represents a statement.
///
/// A program is a sequence of statements executed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects (`expr;`).
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print expr;`
    Print {
        /// The expression whose display form is printed.
        expr: Expr,
    },
    /// A variable declaration using `var`.
    Var {
        /// The identifier token of the variable.
        name:        Token,
        /// The optional initializer; `nil` when absent.
        initializer: Option<Expr>,
    },
}

impl Stmt {
    /// Dispatches to the visitor method matching this statement's kind.
    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Expression { expr } => visitor.visit_expression_stmt(expr),
            Self::Print { expr } => visitor.visit_print_stmt(expr),
            Self::Var { name, initializer } => visitor.visit_var_stmt(name, initializer.as_ref()),
        }
    }
}

/// One method per statement kind.
pub trait StmtVisitor {
    /// What visiting a statement produces.
    type Output;

    /// Visits an expression statement.
    fn visit_expression_stmt(&mut self, expr: &Expr) -> Self::Output;
    /// Visits a print statement.
    fn visit_print_stmt(&mut self, expr: &Expr) -> Self::Output;
    /// Visits a variable declaration.
    fn visit_var_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> Self::Output;
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
