use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrowBody, ArrowFunctionExpr, AssignmentExpr, AssignmentOperator, BinaryExpr,
            BinaryOperator, BooleanLiteral, CallExpr, Identifier, LogicalExpr, LogicalOperator,
            MemberExpr, NewExpr, NullLiteral, NumericLiteral, NumericValue, SequenceExpr,
            StringLiteral, SuperExpr, ThisExpr, UnaryExpr, UnaryOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block,
};

/// Entry point for a full expression: comma-separated assignment-expressions.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let first = parse_assignment_expr(parser)?;

    if !parser.at(TokenKind::Comma) {
        return Ok(first);
    }

    let mut expressions = vec![first];
    while parser.eat(TokenKind::Comma)?.is_some() {
        expressions.push(parse_assignment_expr(parser)?);
    }

    Ok(Expr::Sequence(SequenceExpr { expressions }))
}

pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let left = parse_binary_expr(parser, BindingPower::LOWEST)?;

        match parser.lookahead_kind() {
            Some(TokenKind::Arrow) => parse_arrow_function_expr(parser, left),
            Some(kind) if kind.is_assignment() => parse_assignment_rhs(parser, left),
            _ => Ok(left),
        }
    })
}

fn parse_assignment_rhs(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = if parser.at(TokenKind::SimpleAssign) {
        parser.consume(TokenKind::SimpleAssign)?
    } else {
        parser.consume(TokenKind::ComplexAssign)?
    };
    let operator = AssignmentOperator::from_symbol(&operator_token.value)
        .ok_or_else(|| unknown_operator(&operator_token))?;

    if !left.is_assignment_target() {
        return Err(Error::new(ErrorImpl::InvalidAssignmentTarget {
            found: left.node_type().to_string(),
        }));
    }

    // Right-associative: `a = b = c` is `a = (b = c)`.
    let right = parse_assignment_expr(parser)?;

    Ok(Expr::Assignment(AssignmentExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

fn parse_arrow_function_expr(parser: &mut Parser, params: Expr) -> Result<Expr, Error> {
    parser.consume(TokenKind::Arrow)?;

    let arguments = arrow_arguments(params)?;

    let body = if parser.at(TokenKind::OpenCurly) {
        ArrowBody::Block(parse_block(parser)?)
    } else {
        ArrowBody::Expression(Box::new(parse_assignment_expr(parser)?))
    };

    Ok(Expr::ArrowFunction(ArrowFunctionExpr { arguments, body }))
}

/// Accepts a bare identifier or a sequence made only of identifiers.
fn arrow_arguments(params: Expr) -> Result<Vec<Identifier>, Error> {
    match params {
        Expr::Identifier(identifier) => Ok(vec![identifier]),
        Expr::Sequence(sequence) => sequence
            .expressions
            .into_iter()
            .map(|expression| match expression {
                Expr::Identifier(identifier) => Ok(identifier),
                other => Err(invalid_arrow_arguments(&other)),
            })
            .collect(),
        other => Err(invalid_arrow_arguments(&other)),
    }
}

fn invalid_arrow_arguments(found: &Expr) -> Error {
    Error::new(ErrorImpl::InvalidArrowArguments {
        found: found.node_type().to_string(),
    })
}

/// Parses one precedence level, left-folding `left op right` while the
/// lookahead carries this level's operator.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let operator_kind = bp.operator();
    let mut left = parse_operand(parser, bp)?;

    while parser.at(operator_kind) {
        let operator_token = parser.consume(operator_kind)?;
        let right = parse_operand(parser, bp)?;

        left = if bp.is_logical() {
            Expr::Logical(LogicalExpr {
                operator: LogicalOperator::from_symbol(&operator_token.value)
                    .ok_or_else(|| unknown_operator(&operator_token))?,
                left: Box::new(left),
                right: Box::new(right),
            })
        } else {
            Expr::Binary(BinaryExpr {
                operator: BinaryOperator::from_symbol(&operator_token.value)
                    .ok_or_else(|| unknown_operator(&operator_token))?,
                left: Box::new(left),
                right: Box::new(right),
            })
        };
    }

    Ok(left)
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_unary_expr(parser),
    }
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_kind = match parser.lookahead_kind() {
        Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => kind,
        _ => return parse_call_member_expr(parser),
    };

    let operator_token = parser.consume(operator_kind)?;
    let operator = UnaryOperator::from_symbol(&operator_token.value)
        .ok_or_else(|| unknown_operator(&operator_token))?;
    let argument = parser.nested(parse_unary_expr)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        argument: Box::new(argument),
    }))
}

/// Member accesses and calls in any order, e.g. `a.b().c[0](1)`.
pub fn parse_call_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = if parser.at(TokenKind::Super) {
        parse_super_expr(parser)?
    } else {
        parse_primary_expr(parser)?
    };

    loop {
        expr = parse_member_expr(parser, expr)?;

        if !parser.at(TokenKind::OpenParen) {
            return Ok(expr);
        }

        let arguments = parse_arguments(parser)?;
        expr = Expr::Call(CallExpr {
            callee: Box::new(expr),
            arguments,
        });
    }
}

/// Extends `object` with `.identifier` and `[expression]` accesses.
pub fn parse_member_expr(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    let mut object = object;

    loop {
        let (property, computed) = match parser.lookahead_kind() {
            Some(TokenKind::Dot) => {
                parser.consume(TokenKind::Dot)?;
                (Expr::Identifier(parse_identifier(parser)?), false)
            }
            Some(TokenKind::OpenBracket) => {
                let property = parser.nested(|parser| {
                    parser.consume(TokenKind::OpenBracket)?;
                    let property = parse_expr(parser)?;
                    parser.consume(TokenKind::CloseBracket)?;
                    Ok(property)
                })?;
                (property, true)
            }
            _ => return Ok(object),
        };

        object = Expr::Member(MemberExpr {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        });
    }
}

/// `( [argument {, argument}] )`
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.nested(|parser| {
        parser.consume(TokenKind::OpenParen)?;

        let mut arguments = vec![];
        if !parser.at(TokenKind::CloseParen) {
            loop {
                arguments.push(parse_assignment_expr(parser)?);
                if parser.eat(TokenKind::Comma)?.is_none() {
                    break;
                }
            }
        }

        parser.consume(TokenKind::CloseParen)?;

        Ok(arguments)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind().and_then(nud_lookup) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expression")),
    }
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::Number) => {
            let token = parser.consume(TokenKind::Number)?;
            let value = match token.value.parse::<u64>() {
                Ok(integer) => NumericValue::Integer(integer),
                Err(_) => token
                    .value
                    .parse::<f64>()
                    .map(NumericValue::Float)
                    .map_err(|_| {
                        Error::new(ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        })
                    })?,
            };

            Ok(Expr::NumericLiteral(NumericLiteral { value }))
        }
        Some(TokenKind::String) => {
            let token = parser.consume(TokenKind::String)?;
            // Both quote characters are single bytes.
            let value = token.value[1..token.value.len() - 1].to_string();

            Ok(Expr::StringLiteral(StringLiteral { value }))
        }
        Some(TokenKind::True) => {
            parser.consume(TokenKind::True)?;
            Ok(Expr::BooleanLiteral(BooleanLiteral { value: true }))
        }
        Some(TokenKind::False) => {
            parser.consume(TokenKind::False)?;
            Ok(Expr::BooleanLiteral(BooleanLiteral { value: false }))
        }
        Some(TokenKind::Null) => {
            parser.consume(TokenKind::Null)?;
            Ok(Expr::NullLiteral(NullLiteral::default()))
        }
        _ => Err(Error::new(ErrorImpl::UnexpectedLiteral {
            token: parser
                .lookahead()
                .map(|token| token.value.clone())
                .unwrap_or_default(),
        })),
    }
}

/// `( expression )`. Grouping leaves no node behind.
pub fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        parser.consume(TokenKind::OpenParen)?;
        let expr = parse_expr(parser)?;
        parser.consume(TokenKind::CloseParen)?;

        Ok(expr)
    })
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.consume(TokenKind::Identifier)?;
    Ok(Identifier { name: token.value })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_identifier(parser).map(Expr::from)
}

pub fn parse_this_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::This)?;
    Ok(Expr::This(ThisExpr {}))
}

pub fn parse_super_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::Super)?;
    Ok(Expr::Super(SuperExpr {}))
}

/// `new Callee(args)` where the callee is a member chain without calls.
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        parser.consume(TokenKind::New)?;

        let head = parse_primary_expr(parser)?;
        let callee = parse_member_expr(parser, head)?;
        let arguments = parse_arguments(parser)?;

        Ok(Expr::New(NewExpr {
            callee: Box::new(callee),
            arguments,
        }))
    })
}

fn unknown_operator(token: &Token) -> Error {
    Error::new(ErrorImpl::UnexpectedTokenDetailed {
        token: token.value.clone(),
        message: format!("unknown {} operator", token.kind),
    })
}
