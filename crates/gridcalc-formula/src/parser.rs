//! Formula parser
//!
//! A recursive descent parser for integer formulas. `*` and `/` bind tighter
//! than `+` and `-`, and both levels associate to the left.

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::CellId;

/// Maximum nesting of parentheses and unary signs
const MAX_NESTING: usize = 256;

/// Parse a formula body into an AST
///
/// The body is the formula text without its leading `=`. Whitespace between
/// tokens is ignored, and an empty body parses as `0`.
///
/// # Example
/// ```rust
/// use gridcalc_formula::{parse_formula, FormulaExpr};
///
/// let ast = parse_formula("A1 + a2 * 3").unwrap();
/// assert_eq!(ast.to_string(), "(A1+(A2*3))");
///
/// assert_eq!(parse_formula("  ").unwrap(), FormulaExpr::Number(0));
/// assert!(parse_formula("A1 +").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    let mut parser = FormulaParser::new(formula)?;

    if matches!(parser.current_token(), Token::Eof) {
        return Ok(FormulaExpr::Number(0));
    }

    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(FormulaError::Parse(format!(
            "Unexpected {:?} after expression",
            parser.current_token()
        )));
    }

    Ok(expr)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(i64),
    CellRef(CellId),

    Plus,
    Minus,
    Star,
    Slash,

    LeftParen,
    RightParen,

    Eof,
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token,
    depth: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
            depth: 0,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_alphanumeric() => return self.scan_operand(),
            c => {
                return Err(FormulaError::Parse(format!(
                    "Unexpected character '{}' at position {}",
                    c, self.pos
                )))
            }
        };

        self.advance();
        Ok(token)
    }

    /// Scan an alphanumeric run: either a number or a cell reference
    fn scan_operand(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let text = &self.input[start..self.pos];

        if text.bytes().all(|b| b.is_ascii_digit()) {
            // Leading zeros are allowed, "000" is zero
            return text
                .parse()
                .map(Token::Number)
                .map_err(|_| FormulaError::Parse(format!("Number too large: {text}")));
        }

        CellId::parse(text)
            .map(Token::CellRef)
            .map_err(|_| FormulaError::InvalidReference(text.to_string()))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = std::mem::replace(&mut self.current_token, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "Expected {:?}, got {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: -, +
    // 4. Primary: numbers, cell references, parentheses

    fn parse_expression(&mut self) -> FormulaResult<FormulaExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = FormulaExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_unary()?;
            left = FormulaExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> FormulaResult<FormulaExpr> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(FormulaError::Parse(format!(
                "Formula nested deeper than {MAX_NESTING} levels"
            )));
        }

        let expr = match self.current_token() {
            // Prefix unary minus
            Token::Minus => {
                self.consume()?;
                self.parse_unary().map(|operand| FormulaExpr::UnaryOp {
                    op: UnaryOperator::Negate,
                    operand: Box::new(operand),
                })
            }
            // Prefix plus (no-op)
            Token::Plus => {
                self.consume()?;
                self.parse_unary()
            }
            _ => self.parse_primary(),
        };

        self.depth -= 1;
        expr
    }

    fn parse_primary(&mut self) -> FormulaResult<FormulaExpr> {
        match self.consume()? {
            Token::Number(n) => Ok(FormulaExpr::Number(n)),

            Token::CellRef(id) => Ok(FormulaExpr::CellRef(id)),

            Token::LeftParen => {
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                Ok(expr)
            }

            token => Err(FormulaError::Parse(format!("Unexpected token: {:?}", token))),
        }
    }
}
