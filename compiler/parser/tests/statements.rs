// Copyright (C) 2026 The Jay Team.
// This file is part of the Jay library.

// The Jay library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Jay library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Jay library. If not, see <https://www.gnu.org/licenses/>.

use jay_ast::*;

use serde_json::json;

fn parse(source: &str) -> Program {
    jay_parser::parse(source).unwrap()
}

/// Parses `source` and compares the serialized tree against `expected`.
fn expect_ast(source: &str, expected: serde_json::Value) {
    let ast = jay_parser::parse_ast(source).unwrap();
    assert_eq!(ast.to_json_value().unwrap(), expected, "unexpected tree for `{source}`");
}

#[test]
fn test_empty_source_yields_empty_program() {
    let program = parse("");
    assert!(program.body.is_empty());

    let program = parse("  // only trivia\n  /* here */  ");
    assert!(program.body.is_empty());
    assert_eq!(program.span.hi.to_usize(), "  // only trivia\n  /* here */  ".len());
}

#[test]
fn test_statement_sequence() {
    let program = parse("1;2;3;");
    assert_eq!(program.body.len(), 3);
    for statement in program.body.iter() {
        assert!(matches!(statement, Statement::Expression(_)));
    }
}

#[test]
fn test_empty_statement() {
    expect_ast(
        ";",
        json!({
            "type": "Program", "start": 0, "end": 1, "sourceType": "script",
            "body": [{ "type": "EmptyStatement", "start": 0, "end": 1 }],
        }),
    );
}

#[test]
fn test_nested_blocks() {
    let program = parse("{ \"Hello World!\"; { 123; } }");
    assert_eq!(program.body.len(), 1);
    let block = match &program.body[0] {
        Statement::Block(block) => block,
        statement => panic!("expected a block, found `{statement}`"),
    };
    assert_eq!(block.body.len(), 2);
    // The directive pass only applies to the program prologue, not to
    // blocks.
    match &block.body[0] {
        Statement::Expression(stmt) => assert_eq!(stmt.directive, None),
        statement => panic!("expected an expression statement, found `{statement}`"),
    }
    assert!(matches!(&block.body[1], Statement::Block(_)));
}

#[test]
fn test_block_span_covers_braces() {
    let program = parse("{}");
    match &program.body[0] {
        Statement::Block(block) => {
            assert_eq!(block.span.lo.to_usize(), 0);
            assert_eq!(block.span.hi.to_usize(), 2);
        }
        statement => panic!("expected a block, found `{statement}`"),
    }
}

#[test]
fn test_variable_declaration() {
    expect_ast(
        "let a, b = 1;",
        json!({
            "type": "Program", "start": 0, "end": 13, "sourceType": "script",
            "body": [{
                "type": "VariableDeclaration", "start": 0, "end": 13,
                "declarations": [
                    {
                        "type": "VariableDeclarator", "start": 4, "end": 5,
                        "id": { "type": "Identifier", "start": 4, "end": 5, "name": "a" },
                        "init": null,
                    },
                    {
                        "type": "VariableDeclarator", "start": 7, "end": 12,
                        "id": { "type": "Identifier", "start": 7, "end": 8, "name": "b" },
                        "init": { "type": "Literal", "start": 11, "end": 12, "value": 1, "raw": "1" },
                    },
                ],
                "kind": "let",
            }],
        }),
    );
}

#[test]
fn test_const_declaration() {
    let program = parse("const tau = 6;");
    match &program.body[0] {
        Statement::Variable(declaration) => {
            assert_eq!(declaration.kind, DeclarationKind::Const);
            assert_eq!(declaration.declarations.len(), 1);
        }
        statement => panic!("expected a variable declaration, found `{statement}`"),
    }
}

#[test]
fn test_variable_declaration_requires_identifier() {
    let err = jay_parser::parse("let 1 = 2;").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370003");
}

#[test]
fn test_if_without_else() {
    let program = parse("if (a > b) result = 100;");
    match &program.body[0] {
        Statement::If(stmt) => {
            assert!(matches!(stmt.test, Expression::Binary(_)));
            assert!(stmt.alternate.is_none());
        }
        statement => panic!("expected an if statement, found `{statement}`"),
    }
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let program = parse("if (a > b) if (c > d) result = 123; else result = 321; else result = 111;");
    let outer = match &program.body[0] {
        Statement::If(stmt) => stmt,
        statement => panic!("expected an if statement, found `{statement}`"),
    };
    assert!(outer.alternate.is_some());
    match &*outer.consequent {
        Statement::If(inner) => {
            // The first `else` belongs to the inner `if`.
            assert!(inner.alternate.is_some());
        }
        statement => panic!("expected an if statement, found `{statement}`"),
    }
}

#[test]
fn test_while_statement() {
    let program = parse("while (x > 0) x = x - 1;");
    match &program.body[0] {
        Statement::While(stmt) => {
            assert!(matches!(stmt.test, Expression::Binary(_)));
            assert!(matches!(&*stmt.body, Statement::Expression(_)));
        }
        statement => panic!("expected a while statement, found `{statement}`"),
    }
}

#[test]
fn test_do_while_statement() {
    let source = "do x = x - 1; while (x > 0);";
    let program = parse(source);
    match &program.body[0] {
        Statement::DoWhile(stmt) => {
            assert!(matches!(stmt.test, Expression::Binary(_)));
            // The span reaches the required terminating semicolon.
            assert_eq!(stmt.span.hi.to_usize(), source.len());
        }
        statement => panic!("expected a do-while statement, found `{statement}`"),
    }
}

#[test]
fn test_do_while_requires_semicolon() {
    let err = jay_parser::parse("do x = 1; while (x)").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370003");
}

#[test]
fn test_for_statement_with_declaration_init() {
    let program = parse("for (let i = 0; i < 3; i = i + 1) x = i;");
    match &program.body[0] {
        Statement::For(stmt) => {
            match &stmt.init {
                Some(ForInit::VariableDeclaration(declaration)) => {
                    assert_eq!(declaration.kind, DeclarationKind::Let);
                    // The init declaration ends at its last declarator, not
                    // at the slot separator.
                    assert_eq!(declaration.span.hi.to_usize(), "for (let i = 0".len());
                }
                init => panic!("expected a declaration init, found {init:?}"),
            }
            assert!(stmt.test.is_some());
            assert!(stmt.update.is_some());
        }
        statement => panic!("expected a for statement, found `{statement}`"),
    }
}

#[test]
fn test_for_statement_with_expression_init() {
    let program = parse("for (i = 0; i < 3; i = i + 1) { }");
    match &program.body[0] {
        Statement::For(stmt) => {
            assert!(matches!(stmt.init, Some(ForInit::Expression(_))));
            assert!(matches!(&*stmt.body, Statement::Block(_)));
        }
        statement => panic!("expected a for statement, found `{statement}`"),
    }
}

#[test]
fn test_for_statement_with_empty_slots() {
    let program = parse("for (;;) ;");
    match &program.body[0] {
        Statement::For(stmt) => {
            assert!(stmt.init.is_none());
            assert!(stmt.test.is_none());
            assert!(stmt.update.is_none());
            assert!(matches!(&*stmt.body, Statement::Empty(_)));
        }
        statement => panic!("expected a for statement, found `{statement}`"),
    }
}

#[test]
fn test_function_declaration() {
    expect_ast(
        "function f() {}",
        json!({
            "type": "Program", "start": 0, "end": 15, "sourceType": "script",
            "body": [{
                "type": "FunctionDeclaration", "start": 0, "end": 15,
                "id": { "type": "Identifier", "start": 9, "end": 10, "name": "f" },
                "expression": false, "generator": false, "async": false,
                "params": [],
                "body": { "type": "BlockStatement", "start": 13, "end": 15, "body": [] },
            }],
        }),
    );
}

#[test]
fn test_function_declaration_with_params_and_return() {
    let program = parse("function add(a, b) { return a + b; }");
    let function = match &program.body[0] {
        Statement::Function(function) => function,
        statement => panic!("expected a function declaration, found `{statement}`"),
    };
    assert_eq!(function.id.name, "add");
    assert_eq!(function.params.len(), 2);
    match &function.body.body[0] {
        Statement::Return(stmt) => assert!(matches!(stmt.argument, Some(Expression::Binary(_)))),
        statement => panic!("expected a return statement, found `{statement}`"),
    }
}

#[test]
fn test_return_without_argument() {
    let program = parse("function f() { return; }");
    let function = match &program.body[0] {
        Statement::Function(function) => function,
        statement => panic!("expected a function declaration, found `{statement}`"),
    };
    match &function.body.body[0] {
        Statement::Return(stmt) => assert!(stmt.argument.is_none()),
        statement => panic!("expected a return statement, found `{statement}`"),
    }
}

#[test]
fn test_directive_prologue() {
    let program = parse("\"use strict\";\n1;");
    match &program.body[0] {
        Statement::Expression(stmt) => assert_eq!(stmt.directive.as_deref(), Some("use strict")),
        statement => panic!("expected an expression statement, found `{statement}`"),
    }
    match &program.body[1] {
        Statement::Expression(stmt) => assert_eq!(stmt.directive, None),
        statement => panic!("expected an expression statement, found `{statement}`"),
    }
}

#[test]
fn test_directive_prologue_stops_at_first_non_string() {
    let program = parse("\"a\"; \"b\"; 1; \"c\";");
    let directives: Vec<_> = program
        .body
        .iter()
        .map(|statement| match statement {
            Statement::Expression(stmt) => stmt.directive.clone(),
            statement => panic!("expected an expression statement, found `{statement}`"),
        })
        .collect();
    assert_eq!(
        directives,
        vec![Some("a".to_string()), Some("b".to_string()), None, None]
    );
}

#[test]
fn test_directive_serialization() {
    expect_ast(
        "\"ok\";",
        json!({
            "type": "Program", "start": 0, "end": 5, "sourceType": "script",
            "body": [{
                "type": "ExpressionStatement", "start": 0, "end": 5,
                "expression": { "type": "Literal", "start": 0, "end": 4, "value": "ok", "raw": "\"ok\"" },
                "directive": "ok",
            }],
        }),
    );
}

#[test]
fn test_class_declaration() {
    expect_ast(
        "class A { b() {} }",
        json!({
            "type": "Program", "start": 0, "end": 18, "sourceType": "script",
            "body": [{
                "type": "ClassDeclaration", "start": 0, "end": 18,
                "id": { "type": "Identifier", "start": 6, "end": 7, "name": "A" },
                "superClass": null,
                "body": {
                    "type": "ClassBody", "start": 8, "end": 18,
                    "body": [{
                        "type": "MethodDefinition", "start": 10, "end": 16,
                        "key": { "type": "Identifier", "start": 10, "end": 11, "name": "b" },
                        "kind": "method", "static": false,
                        "value": {
                            "type": "FunctionExpression", "start": 11, "end": 16,
                            "expression": false, "generator": false, "async": false,
                            "params": [],
                            "body": { "type": "BlockStatement", "start": 14, "end": 16, "body": [] },
                        },
                    }],
                },
            }],
        }),
    );
}

#[test]
fn test_class_with_constructor_and_super_call() {
    let program = parse("class Point extends Vector2D { constructor(x, y) { super(x, y); } }");
    let class = match &program.body[0] {
        Statement::Class(class) => class,
        statement => panic!("expected a class declaration, found `{statement}`"),
    };
    assert_eq!(class.id.name, "Point");
    assert_eq!(class.super_class.as_ref().map(|c| c.name.as_str()), Some("Vector2D"));
    assert_eq!(class.body.body.len(), 1);

    let method = match &class.body.body[0] {
        ClassMember::Method(method) => method,
        member => panic!("expected a method definition, found `{member}`"),
    };
    assert_eq!(method.kind, MethodKind::Constructor);
    assert_eq!(method.value.params.len(), 2);

    match &method.value.body.body[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Call(call) => {
                match &*call.callee {
                    Expression::Identifier(identifier) => assert_eq!(identifier.name, "super"),
                    expression => panic!("expected an identifier, found `{expression}`"),
                }
                assert_eq!(call.arguments.len(), 2);
            }
            expression => panic!("expected a call, found `{expression}`"),
        },
        statement => panic!("expected an expression statement, found `{statement}`"),
    }
}

#[test]
fn test_class_property_definitions() {
    let program = parse("class A { count = 0; ready; }");
    let class = match &program.body[0] {
        Statement::Class(class) => class,
        statement => panic!("expected a class declaration, found `{statement}`"),
    };
    assert_eq!(class.body.body.len(), 2);

    match &class.body.body[0] {
        ClassMember::Property(property) => {
            assert_eq!(property.key.name, "count");
            assert!(matches!(property.value, Some(Expression::Literal(_))));
        }
        member => panic!("expected a property definition, found `{member}`"),
    }
    match &class.body.body[1] {
        ClassMember::Property(property) => {
            assert_eq!(property.key.name, "ready");
            assert!(property.value.is_none());
        }
        member => panic!("expected a property definition, found `{member}`"),
    }
}

#[test]
fn test_method_definition_kind_depends_on_name() {
    let program = parse("class A { constructor() {} scale(factor) {} }");
    let class = match &program.body[0] {
        Statement::Class(class) => class,
        statement => panic!("expected a class declaration, found `{statement}`"),
    };
    let kinds: Vec<_> = class
        .body
        .body
        .iter()
        .map(|member| match member {
            ClassMember::Method(method) => method.kind,
            member => panic!("expected a method definition, found `{member}`"),
        })
        .collect();
    assert_eq!(kinds, vec![MethodKind::Constructor, MethodKind::Method]);
}

#[test]
fn test_serialization_is_stable_across_equivalent_sources() {
    fn strip_spans(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                map.remove("start");
                map.remove("end");
                for (_, entry) in map.iter_mut() {
                    strip_spans(entry);
                }
            }
            serde_json::Value::Array(list) => {
                for entry in list.iter_mut() {
                    strip_spans(entry);
                }
            }
            _ => (),
        }
    }

    let mut compact = jay_parser::parse_ast("let total=1+2;").unwrap().to_json_value().unwrap();
    let mut spaced = jay_parser::parse_ast("let total = 1 + 2 ; // sum\n")
        .unwrap()
        .to_json_value()
        .unwrap();

    strip_spans(&mut compact);
    strip_spans(&mut spaced);
    assert_eq!(compact, spaced);

    // Serializing the same tree twice yields the same string.
    let ast = jay_parser::parse_ast("if (a) { b = 1; }").unwrap();
    assert_eq!(ast.to_json_string().unwrap(), ast.to_json_string().unwrap());
}
