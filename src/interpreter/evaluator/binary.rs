use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// - `+` adds two numbers or concatenates two strings.
/// - `-`, `*`, `/` and the relational operators require two numbers.
///   Division follows IEEE 754, so dividing by zero yields an infinity or
///   NaN rather than an error.
/// - `==` and `!=` compare any two values; values of different types are
///   never equal.
///
/// # Parameters
/// - `left`: The left operand.
/// - `op`: The binary operator.
/// - `token`: The operator token, attached to any error.
/// - `right`: The right operand.
///
/// # Errors
/// - `Operands must be two numbers or two strings.` for `+` on anything
///   else.
/// - `Operand must be a number.` for the other arithmetic and relational
///   operators on non-numbers.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::eval_binary,
///         lexer::TokenKind,
///         token::Token,
///         value::Value,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Plus, "+", None, 1);
///
/// let sum = eval_binary(&Value::from("foo"), BinaryOperator::Add, &plus, &Value::from("bar"));
/// assert_eq!(sum.unwrap(), Value::from("foobar"));
///
/// let err = eval_binary(&Value::Number(1.0), BinaryOperator::Add, &plus, &Value::from("2"));
/// assert_eq!(err.unwrap_err().message(), "Operands must be two numbers or two strings.");
/// ```
pub fn eval_binary(left: &Value,
                   op: BinaryOperator,
                   token: &Token,
                   right: &Value)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => eval_addition(left, token, right),
        BinaryOperator::Sub => numbers(left, token, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOperator::Mul => numbers(left, token, right).map(|(a, b)| Value::Number(a * b)),
        BinaryOperator::Div => numbers(left, token, right).map(|(a, b)| Value::Number(a / b)),
        BinaryOperator::Less => numbers(left, token, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOperator::Greater => numbers(left, token, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOperator::LessEqual => {
            numbers(left, token, right).map(|(a, b)| Value::Bool(a <= b))
        },
        BinaryOperator::GreaterEqual => {
            numbers(left, token, right).map(|(a, b)| Value::Bool(a >= b))
        },
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

fn eval_addition(left: &Value, token: &Token, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(RuntimeError::invalid_addition(token)),
    }
}

/// Unpacks two number operands.
fn numbers(left: &Value, token: &Token, right: &Value) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::operand_not_number(token)),
    }
}
