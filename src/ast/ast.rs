use serde::Serialize;

use super::{
    expressions::{
        ArrowFunctionExpr, AssignmentExpr, BinaryExpr, BooleanLiteral, CallExpr, Identifier,
        LogicalExpr, MemberExpr, NewExpr, NullLiteral, NumericLiteral, SequenceExpr,
        StringLiteral, SuperExpr, ThisExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, ClassDeclStmt, DoWhileStmt, EmptyStmt, ExpressionStmt, ForStmt,
        FunctionDeclStmt, IfStmt, ReturnStmt, VariableStmt, WhileStmt,
    },
};

/// Root of every successful parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Program")]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statement node.
///
/// Variants carry their own `"type"` tag, so the enum serializes untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    Empty(EmptyStmt),
    Variable(VariableStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    FunctionDecl(FunctionDeclStmt),
    ClassDecl(ClassDeclStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// The discriminator this node serializes with.
    pub fn node_type(&self) -> &'static str {
        match self {
            Stmt::Expression(_) => "ExpressionStatement",
            Stmt::Block(_) => "BlockStatement",
            Stmt::Empty(_) => "EmptyStatement",
            Stmt::Variable(_) => "VariableStatement",
            Stmt::If(_) => "IfStatement",
            Stmt::While(_) => "WhileStatement",
            Stmt::DoWhile(_) => "DoWhileStatement",
            Stmt::For(_) => "ForStatement",
            Stmt::FunctionDecl(_) => "FunctionDeclaration",
            Stmt::ClassDecl(_) => "ClassDeclaration",
            Stmt::Return(_) => "ReturnStatement",
        }
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expr {
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Unary(UnaryExpr),
    Assignment(AssignmentExpr),
    ArrowFunction(ArrowFunctionExpr),
    Sequence(SequenceExpr),
    Call(CallExpr),
    Member(MemberExpr),
    New(NewExpr),
    Identifier(Identifier),
    This(ThisExpr),
    Super(SuperExpr),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
}

impl Expr {
    /// The discriminator this node serializes with.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expr::Binary(_) => "BinaryExpression",
            Expr::Logical(_) => "LogicalExpression",
            Expr::Unary(_) => "UnaryExpression",
            Expr::Assignment(_) => "AssignmentExpression",
            Expr::ArrowFunction(_) => "ArrowFunctionExpression",
            Expr::Sequence(_) => "SequenceExpression",
            Expr::Call(_) => "CallExpression",
            Expr::Member(_) => "MemberExpression",
            Expr::New(_) => "NewExpression",
            Expr::Identifier(_) => "Identifier",
            Expr::This(_) => "ThisExpression",
            Expr::Super(_) => "Super",
            Expr::NumericLiteral(_) => "NumericLiteral",
            Expr::StringLiteral(_) => "StringLiteral",
            Expr::BooleanLiteral(_) => "BooleanLiteral",
            Expr::NullLiteral(_) => "NullLiteral",
        }
    }

    /// Whether the node may stand on the left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Member(_))
    }
}

impl From<Identifier> for Expr {
    fn from(identifier: Identifier) -> Self {
        Expr::Identifier(identifier)
    }
}
