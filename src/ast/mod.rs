/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the closed statement/expression enums
/// - expressions: Node structs for expressions, literals and operators
/// - statements: Node structs for statements
///
/// Every node serializes with a `"type"` discriminator naming its variant.
pub mod ast;
pub mod expressions;
pub mod statements;
