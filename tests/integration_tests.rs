//! Integration tests for end-to-end parsing.
//!
//! These tests verify that the complete pipeline works correctly from source
//! text through tokenization and parsing to the serialized syntax tree.

use curly::{parse, ErrorKind, Parser};
use serde_json::{json, Value};

fn tree(source: &str) -> Value {
    let program = parse(source).unwrap();
    serde_json::to_value(&program).unwrap()
}

fn number(value: u64) -> Value {
    json!({ "type": "NumericLiteral", "value": value })
}

fn identifier(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

#[test]
fn test_variable_statement_with_precedence() {
    assert_eq!(
        tree("let x = 2 + 2 * 2;"),
        json!({
            "type": "Program",
            "body": [{
                "type": "VariableStatement",
                "declarations": [{
                    "type": "VariableDeclaration",
                    "id": identifier("x"),
                    "init": {
                        "type": "BinaryExpression",
                        "operator": "+",
                        "left": number(2),
                        "right": {
                            "type": "BinaryExpression",
                            "operator": "*",
                            "left": number(2),
                            "right": number(2)
                        }
                    }
                }]
            }]
        })
    );
}

#[test]
fn test_comments_and_literals() {
    let source = r#"
        // line comment
        /* block
           comment */
        "hello";
        'world';
        42;
        true;
        null;
    "#;

    assert_eq!(
        tree(source),
        json!({
            "type": "Program",
            "body": [
                { "type": "ExpressionStatement", "expression": { "type": "StringLiteral", "value": "hello" } },
                { "type": "ExpressionStatement", "expression": { "type": "StringLiteral", "value": "world" } },
                { "type": "ExpressionStatement", "expression": number(42) },
                { "type": "ExpressionStatement", "expression": { "type": "BooleanLiteral", "value": true } },
                { "type": "ExpressionStatement", "expression": { "type": "NullLiteral", "value": null } }
            ]
        })
    );
}

#[test]
fn test_numbers_serialize_as_integers() {
    let value = &tree("2;")["body"][0]["expression"]["value"];

    assert!(value.is_u64());
    assert_eq!(value.to_string(), "2");
}

#[test]
fn test_number_wider_than_u64_falls_back_to_float() {
    let value = &tree("18446744073709551616;")["body"][0]["expression"]["value"];

    assert!(value.is_f64());
    assert_eq!(value.as_f64(), Some(18446744073709551616.0));
}

#[test]
fn test_declarations_without_initializer() {
    assert_eq!(
        tree("let a, b = 1;")["body"][0]["declarations"],
        json!([
            { "type": "VariableDeclaration", "id": identifier("a"), "init": null },
            { "type": "VariableDeclaration", "id": identifier("b"), "init": number(1) }
        ])
    );
}

#[test]
fn test_if_else_tree() {
    assert_eq!(
        tree("if (x) { x = 1; } else x = 2;")["body"][0],
        json!({
            "type": "IfStatement",
            "test": identifier("x"),
            "consequent": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "=",
                        "left": identifier("x"),
                        "right": number(1)
                    }
                }]
            },
            "alternate": {
                "type": "ExpressionStatement",
                "expression": {
                    "type": "AssignmentExpression",
                    "operator": "=",
                    "left": identifier("x"),
                    "right": number(2)
                }
            }
        })
    );
}

#[test]
fn test_if_without_else_has_null_alternate() {
    assert_eq!(tree("if (x) ;")["body"][0]["alternate"], Value::Null);
}

#[test]
fn test_logical_and_unary_tree() {
    assert_eq!(
        tree("!a || b && -c;")["body"][0]["expression"],
        json!({
            "type": "LogicalExpression",
            "operator": "||",
            "left": { "type": "UnaryExpression", "operator": "!", "argument": identifier("a") },
            "right": {
                "type": "LogicalExpression",
                "operator": "&&",
                "left": identifier("b"),
                "right": { "type": "UnaryExpression", "operator": "-", "argument": identifier("c") }
            }
        })
    );
}

#[test]
fn test_relational_and_equality_tree() {
    assert_eq!(
        tree("a <= b != c;")["body"][0]["expression"],
        json!({
            "type": "BinaryExpression",
            "operator": "!=",
            "left": {
                "type": "BinaryExpression",
                "operator": "<=",
                "left": identifier("a"),
                "right": identifier("b")
            },
            "right": identifier("c")
        })
    );
}

#[test]
fn test_for_statement_tree() {
    assert_eq!(
        tree("for (let i = 0; i < 10; i += 1) { }")["body"][0],
        json!({
            "type": "ForStatement",
            "init": {
                "type": "VariableStatement",
                "declarations": [{
                    "type": "VariableDeclaration",
                    "id": identifier("i"),
                    "init": number(0)
                }]
            },
            "test": {
                "type": "BinaryExpression",
                "operator": "<",
                "left": identifier("i"),
                "right": number(10)
            },
            "update": {
                "type": "AssignmentExpression",
                "operator": "+=",
                "left": identifier("i"),
                "right": number(1)
            },
            "body": { "type": "BlockStatement", "body": [] }
        })
    );
}

#[test]
fn test_empty_for_clauses_are_null() {
    let for_stmt = &tree("for (;;) ;")["body"][0];

    assert_eq!(for_stmt["init"], Value::Null);
    assert_eq!(for_stmt["test"], Value::Null);
    assert_eq!(for_stmt["update"], Value::Null);
    assert_eq!(for_stmt["body"], json!({ "type": "EmptyStatement" }));
}

#[test]
fn test_while_and_do_while_tree() {
    assert_eq!(
        tree("while (x) x -= 1; do ; while (y);")["body"],
        json!([
            {
                "type": "WhileStatement",
                "test": identifier("x"),
                "body": {
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "-=",
                        "left": identifier("x"),
                        "right": number(1)
                    }
                }
            },
            {
                "type": "DoWhileStatement",
                "body": { "type": "EmptyStatement" },
                "test": identifier("y")
            }
        ])
    );
}

#[test]
fn test_function_declaration_tree() {
    assert_eq!(
        tree("def square(x) { return x * x; }")["body"][0],
        json!({
            "type": "FunctionDeclaration",
            "name": identifier("square"),
            "params": [identifier("x")],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": {
                        "type": "BinaryExpression",
                        "operator": "*",
                        "left": identifier("x"),
                        "right": identifier("x")
                    }
                }]
            }
        })
    );
}

#[test]
fn test_bare_return_has_null_argument() {
    assert_eq!(
        tree("def f() { return; }")["body"][0]["body"]["body"][0],
        json!({ "type": "ReturnStatement", "argument": null })
    );
}

#[test]
fn test_class_declaration_tree() {
    let source = r#"
        class Point3D extends Point {
            def constructor(x, y, z) {
                super(x, y);
                this.z = z;
            }
        }
    "#;

    assert_eq!(
        tree(source)["body"][0],
        json!({
            "type": "ClassDeclaration",
            "id": identifier("Point3D"),
            "superClass": identifier("Point"),
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "FunctionDeclaration",
                    "name": identifier("constructor"),
                    "params": [identifier("x"), identifier("y"), identifier("z")],
                    "body": {
                        "type": "BlockStatement",
                        "body": [
                            {
                                "type": "ExpressionStatement",
                                "expression": {
                                    "type": "CallExpression",
                                    "callee": { "type": "Super" },
                                    "arguments": [identifier("x"), identifier("y")]
                                }
                            },
                            {
                                "type": "ExpressionStatement",
                                "expression": {
                                    "type": "AssignmentExpression",
                                    "operator": "=",
                                    "left": {
                                        "type": "MemberExpression",
                                        "object": { "type": "ThisExpression" },
                                        "property": identifier("z"),
                                        "computed": false
                                    },
                                    "right": identifier("z")
                                }
                            }
                        ]
                    }
                }]
            }
        })
    );
}

#[test]
fn test_class_without_superclass() {
    assert_eq!(tree("class A {}")["body"][0]["superClass"], Value::Null);
}

#[test]
fn test_new_and_call_chain_tree() {
    assert_eq!(
        tree("new Point(1, 2).move(x)[0];")["body"][0]["expression"],
        json!({
            "type": "MemberExpression",
            "object": {
                "type": "CallExpression",
                "callee": {
                    "type": "MemberExpression",
                    "object": {
                        "type": "NewExpression",
                        "callee": identifier("Point"),
                        "arguments": [number(1), number(2)]
                    },
                    "property": identifier("move"),
                    "computed": false
                },
                "arguments": [identifier("x")]
            },
            "property": number(0),
            "computed": true
        })
    );
}

#[test]
fn test_arrow_function_tree() {
    assert_eq!(
        tree("let add = (a, b) => a + b;")["body"][0]["declarations"][0]["init"],
        json!({
            "type": "ArrowFunctionExpression",
            "arguments": [identifier("a"), identifier("b")],
            "body": {
                "type": "BinaryExpression",
                "operator": "+",
                "left": identifier("a"),
                "right": identifier("b")
            }
        })
    );
}

#[test]
fn test_arrow_function_with_block_body() {
    assert_eq!(
        tree("f = x => { return x; };")["body"][0]["expression"]["right"],
        json!({
            "type": "ArrowFunctionExpression",
            "arguments": [identifier("x")],
            "body": {
                "type": "BlockStatement",
                "body": [{ "type": "ReturnStatement", "argument": identifier("x") }]
            }
        })
    );
}

#[test]
fn test_sequence_expression_is_flat() {
    assert_eq!(
        tree("a, b, c;")["body"][0]["expression"],
        json!({
            "type": "SequenceExpression",
            "expressions": [identifier("a"), identifier("b"), identifier("c")]
        })
    );
}

#[test]
fn test_parenthesized_expression_leaves_no_node() {
    assert_eq!(tree("(((x)));")["body"][0]["expression"], identifier("x"));
}

#[test]
fn test_syntax_error_kind_and_message() {
    let error = parse("let x = ;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(
        error.to_string(),
        "SyntaxError: unexpected token (expected expression): \";\""
    );
}

#[test]
fn test_lexical_error_kind() {
    let error = parse("let x = $;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexicalError);
}

#[test]
fn test_empty_program_is_rejected() {
    let error = parse("   ").unwrap_err();

    assert_eq!(
        error.to_string(),
        "SyntaxError: unexpected end of input, expected: \"statement\""
    );
}

#[test]
fn test_default_depth_limit_rejects_deep_nesting() {
    let source = format!("{}{}", "{".repeat(200), "}".repeat(200));

    let error = parse(&source).unwrap_err();
    assert_eq!(
        error.to_string(),
        "SyntaxError: nesting depth exceeded limit of 128"
    );
}

#[test]
fn test_deep_new_chain_is_rejected() {
    let source = format!("{}X{};", "new ".repeat(2000), "()".repeat(2000));

    let error = parse(&source).unwrap_err();
    assert_eq!(
        error.to_string(),
        "SyntaxError: nesting depth exceeded limit of 128"
    );
}

#[test]
fn test_parser_reuse_gives_identical_trees() {
    let source = "let x = 10; while (x > 0) { x -= 1; }";
    let mut parser = Parser::new();

    let first = parser.parse(source).unwrap();
    assert!(parser.parse("let = 1;").is_err());
    let second = parser.parse(source).unwrap();

    assert_eq!(first, second);
}
