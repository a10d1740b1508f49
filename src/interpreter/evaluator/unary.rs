use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Evaluates a unary operation on an already evaluated operand.
///
/// Supported operators:
/// - `Negate`: numeric negation; the operand must be a number.
/// - `Not`: logical negation under the truthiness rule, defined for every
///   value.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `token`: The operator token, attached to any error.
/// - `value`: The operand.
///
/// # Errors
/// `Operand must be a number.` when negating a non-number.
///
/// # Example
/// ```
/// use treelox::{
///     ast::UnaryOperator,
///     interpreter::{
///         evaluator::unary::eval_unary,
///         lexer::TokenKind,
///         token::Token,
///         value::Value,
///     },
/// };
///
/// let minus = Token::new(TokenKind::Minus, "-", None, 1);
/// let bang = Token::new(TokenKind::Bang, "!", None, 1);
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &minus, &Value::Number(5.0)).unwrap(),
///            Value::Number(-5.0));
/// assert_eq!(eval_unary(UnaryOperator::Not, &bang, &Value::Number(0.0)).unwrap(),
///            Value::Bool(false));
/// assert!(eval_unary(UnaryOperator::Negate, &minus, &Value::from("abc")).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, token: &Token, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::operand_not_number(token)),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
