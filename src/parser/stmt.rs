use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{
            BlockStmt, ClassDeclStmt, DoWhileStmt, EmptyStmt, ExpressionStmt, ForInit, ForStmt,
            FunctionDeclStmt, IfStmt, ReturnStmt, VariableDeclaration, VariableStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_assignment_expr, parse_expr, parse_identifier, parse_parenthesized_expr},
    lookups::stmt_lookup,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        let kind = match parser.lookahead_kind() {
            Some(kind) => kind,
            None => return Err(parser.unexpected("statement")),
        };

        match stmt_lookup(kind) {
            Some(handler) => handler(parser),
            None => parse_expression_stmt(parser),
        }
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    parser.consume(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::Semicolon)?;
    Ok(Stmt::Empty(EmptyStmt {}))
}

/// `{ statement* }`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.consume(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.has_tokens() && !parser.at(TokenKind::CloseCurly) {
        body.push(parse_stmt(parser)?);
    }

    parser.consume(TokenKind::CloseCurly)?;

    Ok(BlockStmt { body })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parse_block(parser).map(Stmt::Block)
}

pub fn parse_variable_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let variable_stmt = parse_variable_declarations(parser)?;

    parser.consume(TokenKind::Semicolon)?;

    Ok(Stmt::Variable(variable_stmt))
}

/// `let` and its declaration list, without the terminating `;`.
fn parse_variable_declarations(parser: &mut Parser) -> Result<VariableStmt, Error> {
    parser.consume(TokenKind::Let)?;

    let mut declarations = vec![];
    loop {
        declarations.push(parse_variable_declaration(parser)?);
        if parser.eat(TokenKind::Comma)?.is_none() {
            break;
        }
    }

    Ok(VariableStmt { declarations })
}

fn parse_variable_declaration(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    let name = parser
        .consume_detailed(
            TokenKind::Identifier,
            "expected identifier during variable declaration",
        )?
        .value;

    let init = if parser.at(TokenKind::Semicolon) || parser.at(TokenKind::Comma) {
        None
    } else {
        parser.consume(TokenKind::SimpleAssign)?;
        Some(parse_assignment_expr(parser)?)
    };

    Ok(VariableDeclaration {
        id: Identifier::new(name),
        init,
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::If)?;

    let test = parse_parenthesized_expr(parser)?;
    let consequent = parse_stmt(parser)?;

    // Taking the `else` here binds it to the innermost open `if`.
    let alternate = if parser.eat(TokenKind::Else)?.is_some() {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        test,
        consequent: Box::new(consequent),
        alternate,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::While)?;

    let test = parse_parenthesized_expr(parser)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        test,
        body: Box::new(body),
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::Do)?;

    let body = parse_stmt(parser)?;

    parser.consume(TokenKind::While)?;
    let test = parse_parenthesized_expr(parser)?;
    parser.consume(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStmt {
        test,
        body: Box::new(body),
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::For)?;
    parser.consume(TokenKind::OpenParen)?;

    let init = if parser.at(TokenKind::Semicolon) {
        None
    } else if parser.at(TokenKind::Let) {
        Some(ForInit::Variable(parse_variable_declarations(parser)?))
    } else {
        Some(ForInit::Expression(parse_expr(parser)?))
    };
    parser.consume(TokenKind::Semicolon)?;

    let test = if parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume(TokenKind::Semicolon)?;

    let update = if parser.at(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        test,
        update,
        body: Box::new(body),
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::Def)?;

    let name = parse_identifier(parser)?;

    parser.consume(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    if !parser.at(TokenKind::CloseParen) {
        loop {
            params.push(parse_identifier(parser)?);
            if parser.eat(TokenKind::Comma)?.is_none() {
                break;
            }
        }
    }

    parser.consume(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::FunctionDecl(FunctionDeclStmt { name, params, body }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::Class)?;

    let id = parse_identifier(parser)?;

    let super_class = if parser.eat(TokenKind::Extends)?.is_some() {
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::ClassDecl(ClassDeclStmt {
        id,
        super_class,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume(TokenKind::Return)?;

    let argument = if parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.consume(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { argument }))
}
