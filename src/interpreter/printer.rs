use crate::{
    ast::{BinaryOperator, Expr, ExprVisitor, LiteralValue, Stmt, StmtVisitor, UnaryOperator},
    interpreter::token::Token,
    util::num::format_number_literal,
};

/// Renders syntax trees as fully parenthesized prefix text.
///
/// Every composite node prints as `(<tag> <children...>)`; literals print as
/// their textual form, with numbers always keeping a fractional digit. The
/// printer has no state and never evaluates anything.
///
/// # Example
/// ```
/// use treelox::interpreter::{
///     lexer::scan,
///     parser::core::parse_single_expression,
///     printer::AstPrinter,
/// };
///
/// let (tokens, _) = scan("-1 + (2 * \"x\")");
/// let expr = parse_single_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(AstPrinter.print(&expr), "(+ (- 1.0) (group (* 2.0 x)))");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders an expression.
    #[must_use]
    pub fn print(mut self, expr: &Expr) -> String {
        expr.accept(&mut self)
    }

    /// Renders a statement.
    #[must_use]
    pub fn print_stmt(mut self, stmt: &Stmt) -> String {
        stmt.accept(&mut self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({name}");
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        match value {
            LiteralValue::Nil => "nil".to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Number(n) => format_number_literal(*n),
            LiteralValue::String(s) => s.clone(),
        }
    }

    fn visit_grouping(&mut self, expr: &Expr) -> String {
        self.parenthesize("group", &[expr])
    }

    fn visit_unary(&mut self, op: UnaryOperator, _: &Token, right: &Expr) -> String {
        self.parenthesize(&op.to_string(), &[right])
    }

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    _: &Token,
                    right: &Expr)
                    -> String {
        self.parenthesize(&op.to_string(), &[left, right])
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        format!("(= {} {})", name.lexeme, value.accept(self))
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_expression_stmt(&mut self, expr: &Expr) -> String {
        self.parenthesize(";", &[expr])
    }

    fn visit_print_stmt(&mut self, expr: &Expr) -> String {
        self.parenthesize("print", &[expr])
    }

    fn visit_var_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        match initializer {
            Some(expr) => format!("(var {} {})", name.lexeme, expr.accept(self)),
            None => format!("(var {})", name.lexeme),
        }
    }
}
