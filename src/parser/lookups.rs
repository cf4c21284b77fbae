use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binary operator levels, lowest to highest precedence.
///
/// Each level left-folds operands parsed at the next level up; the highest
/// level's operands are unary expressions.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    pub const LOWEST: BindingPower = BindingPower::LogicalOr;

    /// The token kind that continues an expression at this level.
    pub fn operator(self) -> TokenKind {
        match self {
            BindingPower::LogicalOr => TokenKind::LogicalOr,
            BindingPower::LogicalAnd => TokenKind::LogicalAnd,
            BindingPower::Equality => TokenKind::EqualityOperator,
            BindingPower::Relational => TokenKind::RelationalOperator,
            BindingPower::Additive => TokenKind::AdditiveOperator,
            BindingPower::Multiplicative => TokenKind::MultiplicativeOperator,
        }
    }

    /// The level operands are parsed at, `None` for unary operands.
    pub fn next(self) -> Option<BindingPower> {
        match self {
            BindingPower::LogicalOr => Some(BindingPower::LogicalAnd),
            BindingPower::LogicalAnd => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Relational),
            BindingPower::Relational => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative => None,
        }
    }

    /// Whether this level builds logical rather than binary nodes.
    pub fn is_logical(self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

/// Statement handler for a lookahead kind. Kinds without one start an
/// expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Semicolon => parse_empty_stmt,
        TokenKind::If => parse_if_stmt,
        TokenKind::OpenCurly => parse_block_stmt,
        TokenKind::Let => parse_variable_stmt,
        TokenKind::While => parse_while_stmt,
        TokenKind::Do => parse_do_while_stmt,
        TokenKind::For => parse_for_stmt,
        TokenKind::Def => parse_fn_decl_stmt,
        TokenKind::Class => parse_class_decl_stmt,
        TokenKind::Return => parse_return_stmt,
        _ => return None,
    };

    Some(handler)
}

/// Primary-expression handler for a lookahead kind.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        kind if kind.is_literal() => parse_literal_expr,
        TokenKind::OpenParen => parse_parenthesized_expr,
        TokenKind::Identifier => parse_identifier_expr,
        TokenKind::This => parse_this_expr,
        TokenKind::New => parse_new_expr,
        _ => return None,
    };

    Some(handler)
}
