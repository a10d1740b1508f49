use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Variable bindings for one scope.
///
/// The grammar has no blocks or functions yet, so a program runs with a
/// single root environment. An optional enclosing environment is consulted
/// only when a name is missing from this one, which is how nested scopes
/// will shadow outer ones.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Box<Environment>>,
}

impl Environment {
    /// Creates an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment nested inside `enclosing`.
    ///
    /// Definitions in the new scope shadow the enclosing ones; names it does
    /// not bind are read and assigned in the enclosing scope.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     environment::Environment,
    ///     lexer::TokenKind,
    ///     token::Token,
    ///     value::Value,
    /// };
    ///
    /// let a = Token::new(TokenKind::Identifier, "a", None, 1);
    /// let b = Token::new(TokenKind::Identifier, "b", None, 1);
    ///
    /// let mut outer = Environment::new();
    /// outer.define("a", Value::from("outer a"));
    /// outer.define("b", Value::from("outer b"));
    ///
    /// let mut inner = Environment::with_enclosing(outer);
    /// inner.define("a", Value::from("inner a"));
    /// inner.assign(&b, Value::from("assigned b")).unwrap();
    /// assert_eq!(inner.get(&a).unwrap(), Value::from("inner a"));
    ///
    /// let outer = inner.into_enclosing().unwrap();
    /// assert_eq!(outer.get(&a).unwrap(), Value::from("outer a"));
    /// assert_eq!(outer.get(&b).unwrap(), Value::from("assigned b"));
    /// ```
    #[must_use]
    pub fn with_enclosing(enclosing: Self) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(Box::new(enclosing)), }
    }

    /// Gives back the enclosing environment, dropping this scope's bindings.
    #[must_use]
    pub fn into_enclosing(self) -> Option<Self> {
        self.enclosing.map(|enclosing| *enclosing)
    }

    /// Binds `name` to `value` in this scope.
    ///
    /// Always succeeds; an existing binding of the same name is overwritten.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up the variable named by `name`.
    ///
    /// # Errors
    /// Returns an `Undefined variable` error carrying `name` when no scope in
    /// the chain binds it.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     environment::Environment,
    ///     lexer::TokenKind,
    ///     token::Token,
    ///     value::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let x = Token::new(TokenKind::Identifier, "x", None, 1);
    ///
    /// assert!(env.get(&x).is_err());
    /// env.define("x", Value::Number(2.0));
    /// assert_eq!(env.get(&x).unwrap(), Value::Number(2.0));
    /// ```
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.get(name),
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    /// Rebinds an existing variable to `value`.
    ///
    /// The innermost scope that binds the name is updated.
    ///
    /// # Errors
    /// Returns an `Undefined variable` error carrying `name` when no scope in
    /// the chain binds it; nothing is defined in that case.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        match &mut self.enclosing {
            Some(enclosing) => enclosing.assign(name, value),
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }
}
