use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, ExprVisitor, LiteralValue, Stmt, StmtVisitor, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        token::Token,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the syntax tree and executes it.
///
/// The interpreter owns the variable environment and the sink that `print`
/// statements write to. It is created once per run; statements executed
/// through the same interpreter share their variables.
///
/// ## Usage
///
/// ```
/// use treelox::interpreter::{
///     evaluator::core::Interpreter,
///     lexer::scan,
///     parser::statement::parse_program,
/// };
///
/// let (tokens, _) = scan("var greeting = \"hi\"; print greeting;");
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// let mut interpreter = Interpreter::new(Vec::<u8>::new());
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.into_output(), b"hi\n");
/// ```
pub struct Interpreter<W: Write> {
    environment: Environment,
    out:         W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty environment that prints to `out`.
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating any
    /// sub-expression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        expr.accept(self)
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns the `RuntimeError` raised by the statement, including
    /// `RuntimeError::Output` when printing fails.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        stmt.accept(self)
    }

    /// Executes statements in order, stopping at the first error.
    ///
    /// Output already written by earlier statements stays written.
    ///
    /// # Errors
    /// Returns the first `RuntimeError`; later statements do not run.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        statements.iter().try_for_each(|stmt| self.execute(stmt))
    }

    /// The display form of a value, as `print` writes it.
    #[must_use]
    pub fn stringify(value: &Value) -> String {
        value.to_string()
    }

    /// Read access to the interpreter's variables.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> ExprVisitor for Interpreter<W> {
    type Output = EvalResult<Value>;

    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output {
        Ok(Value::from(value))
    }

    fn visit_grouping(&mut self, expr: &Expr) -> Self::Output {
        self.evaluate(expr)
    }

    fn visit_unary(&mut self, op: UnaryOperator, token: &Token, right: &Expr) -> Self::Output {
        let value = self.evaluate(right)?;
        eval_unary(op, token, &value)
    }

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    token: &Token,
                    right: &Expr)
                    -> Self::Output {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        eval_binary(&left, op, token, &right)
    }

    fn visit_variable(&mut self, name: &Token) -> Self::Output {
        self.environment.get(name)
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Self::Output {
        let value = self.evaluate(value)?;
        self.environment.assign(name, value.clone())?;
        Ok(value)
    }
}

impl<W: Write> StmtVisitor for Interpreter<W> {
    type Output = EvalResult<()>;

    fn visit_expression_stmt(&mut self, expr: &Expr) -> Self::Output {
        self.evaluate(expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, expr: &Expr) -> Self::Output {
        let value = self.evaluate(expr)?;
        writeln!(self.out, "{}", Self::stringify(&value))?;
        Ok(())
    }

    fn visit_var_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> Self::Output {
        let value = match initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        self.environment.define(&name.lexeme, value);
        Ok(())
    }
}
