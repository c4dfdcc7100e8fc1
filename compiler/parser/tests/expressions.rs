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

/// Returns the expression of the only statement of the program.
fn first_expression(program: &Program) -> &Expression {
    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Statement::Expression(stmt) => &stmt.expression,
        statement => panic!("expected an expression statement, found `{statement}`"),
    }
}

#[test]
fn test_additive_expression() {
    expect_ast(
        "1+1;",
        json!({
            "type": "Program", "start": 0, "end": 4, "sourceType": "script",
            "body": [{
                "type": "ExpressionStatement", "start": 0, "end": 4,
                "expression": {
                    "type": "BinaryExpression", "start": 0, "end": 3,
                    "operator": "+",
                    "left": { "type": "Literal", "start": 0, "end": 1, "value": 1, "raw": "1" },
                    "right": { "type": "Literal", "start": 2, "end": 3, "value": 1, "raw": "1" },
                },
            }],
        }),
    );
}

#[test]
fn test_parenthesized_operand_widens_the_fold() {
    // The binary node folded over `(2+2)` starts at the opening parenthesis;
    // the inner node keeps its own span.
    expect_ast(
        "(2+2)*2;",
        json!({
            "type": "Program", "start": 0, "end": 8, "sourceType": "script",
            "body": [{
                "type": "ExpressionStatement", "start": 0, "end": 8,
                "expression": {
                    "type": "BinaryExpression", "start": 0, "end": 7,
                    "operator": "*",
                    "left": {
                        "type": "BinaryExpression", "start": 1, "end": 4,
                        "operator": "+",
                        "left": { "type": "Literal", "start": 1, "end": 2, "value": 2, "raw": "2" },
                        "right": { "type": "Literal", "start": 3, "end": 4, "value": 2, "raw": "2" },
                    },
                    "right": { "type": "Literal", "start": 6, "end": 7, "value": 2, "raw": "2" },
                },
            }],
        }),
    );
}

#[test]
fn test_parenthesized_expression_is_returned_unchanged() {
    let program = parse("(42);");
    match first_expression(&program) {
        Expression::Literal(literal) => assert_eq!(literal.raw, "42"),
        expression => panic!("expected a literal, found `{expression}`"),
    }
}

#[test]
fn test_binary_chains_fold_left() {
    // `1+1-2` parses as `(1+1)-2`.
    let program = parse("1+1-2;");
    match first_expression(&program) {
        Expression::Binary(outer) => {
            assert_eq!(outer.op, BinaryOperation::Sub);
            match &*outer.left {
                Expression::Binary(inner) => assert_eq!(inner.op, BinaryOperation::Add),
                expression => panic!("expected a binary expression, found `{expression}`"),
            }
            assert!(matches!(&*outer.right, Expression::Literal(_)));
        }
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // `2+2*2` parses as `2+(2*2)`.
    let program = parse("2+2*2;");
    match first_expression(&program) {
        Expression::Binary(outer) => {
            assert_eq!(outer.op, BinaryOperation::Add);
            match &*outer.right {
                Expression::Binary(inner) => assert_eq!(inner.op, BinaryOperation::Mul),
                expression => panic!("expected a binary expression, found `{expression}`"),
            }
        }
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_relational_binds_tighter_than_equality() {
    // `1 == 2 < 3` parses as `1 == (2 < 3)`.
    let program = parse("1 == 2 < 3;");
    match first_expression(&program) {
        Expression::Binary(outer) => {
            assert_eq!(outer.op, BinaryOperation::Eq);
            match &*outer.right {
                Expression::Binary(inner) => assert_eq!(inner.op, BinaryOperation::Lt),
                expression => panic!("expected a binary expression, found `{expression}`"),
            }
        }
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_relational_chains_fold_left() {
    // `a>a>a` parses as `(a>a)>a`.
    let program = parse("a>a>a;");
    match first_expression(&program) {
        Expression::Binary(outer) => {
            assert_eq!(outer.op, BinaryOperation::Gt);
            assert!(matches!(&*outer.left, Expression::Binary(_)));
            assert!(matches!(&*outer.right, Expression::Identifier(_)));
        }
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_strict_equality_operators() {
    let program = parse("a === b;");
    match first_expression(&program) {
        Expression::Binary(binary) => assert_eq!(binary.op, BinaryOperation::StrictEq),
        expression => panic!("expected a binary expression, found `{expression}`"),
    }

    let program = parse("a !== b;");
    match first_expression(&program) {
        Expression::Binary(binary) => assert_eq!(binary.op, BinaryOperation::StrictNeq),
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_logical_expressions_use_their_own_node() {
    // `a = 1 || 2 == 2 && 3` parses as `a = (1 || ((2 == 2) && 3))`.
    let program = parse("a = 1 || 2 == 2 && 3;");
    let assignment = match first_expression(&program) {
        Expression::Assignment(assignment) => assignment,
        expression => panic!("expected an assignment, found `{expression}`"),
    };
    let or = match &*assignment.right {
        Expression::Logical(or) => {
            assert_eq!(or.op, LogicalOperation::Or);
            or
        }
        expression => panic!("expected a logical expression, found `{expression}`"),
    };
    match &*or.right {
        Expression::Logical(and) => {
            assert_eq!(and.op, LogicalOperation::And);
            match &*and.left {
                Expression::Binary(eq) => assert_eq!(eq.op, BinaryOperation::Eq),
                expression => panic!("expected a binary expression, found `{expression}`"),
            }
        }
        expression => panic!("expected a logical expression, found `{expression}`"),
    }
}

#[test]
fn test_assignment_is_right_associative() {
    // `a = b = c` parses as `a = (b = c)`.
    let program = parse("a = b = c;");
    match first_expression(&program) {
        Expression::Assignment(outer) => {
            assert!(matches!(&*outer.left, Expression::Identifier(_)));
            match &*outer.right {
                Expression::Assignment(inner) => {
                    assert!(matches!(&*inner.left, Expression::Identifier(_)));
                    assert!(matches!(&*inner.right, Expression::Identifier(_)));
                }
                expression => panic!("expected an assignment, found `{expression}`"),
            }
        }
        expression => panic!("expected an assignment, found `{expression}`"),
    }
}

#[test]
fn test_compound_assignment_operators() {
    for (source, op) in [
        ("a += 1;", AssignmentOperation::AddAssign),
        ("a -= 1;", AssignmentOperation::SubAssign),
        ("a *= 1;", AssignmentOperation::MulAssign),
        ("a /= 1;", AssignmentOperation::DivAssign),
    ] {
        let program = parse(source);
        match first_expression(&program) {
            Expression::Assignment(assignment) => assert_eq!(assignment.op, op),
            expression => panic!("expected an assignment, found `{expression}`"),
        }
    }
}

#[test]
fn test_member_access_may_be_assigned_to() {
    let program = parse("point.x = 1;");
    match first_expression(&program) {
        Expression::Assignment(assignment) => {
            assert!(matches!(&*assignment.left, Expression::Member(_)));
        }
        expression => panic!("expected an assignment, found `{expression}`"),
    }
}

#[test]
fn test_invalid_assignment_target() {
    let err = jay_parser::parse("1 = 2;").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370006");
}

#[test]
fn test_unary_expressions_nest_right() {
    let program = parse("!!x;");
    match first_expression(&program) {
        Expression::Unary(outer) => {
            assert_eq!(outer.op, UnaryOperation::Not);
            match &*outer.argument {
                Expression::Unary(inner) => {
                    assert_eq!(inner.op, UnaryOperation::Not);
                    assert!(matches!(&*inner.argument, Expression::Identifier(_)));
                }
                expression => panic!("expected a unary expression, found `{expression}`"),
            }
        }
        expression => panic!("expected a unary expression, found `{expression}`"),
    }
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    // `-a * b` parses as `(-a) * b`.
    let program = parse("-a * b;");
    match first_expression(&program) {
        Expression::Binary(binary) => {
            assert_eq!(binary.op, BinaryOperation::Mul);
            match &*binary.left {
                Expression::Unary(unary) => assert_eq!(unary.op, UnaryOperation::Negate),
                expression => panic!("expected a unary expression, found `{expression}`"),
            }
        }
        expression => panic!("expected a binary expression, found `{expression}`"),
    }
}

#[test]
fn test_unary_serializes_with_prefix() {
    expect_ast(
        "-1;",
        json!({
            "type": "Program", "start": 0, "end": 3, "sourceType": "script",
            "body": [{
                "type": "ExpressionStatement", "start": 0, "end": 3,
                "expression": {
                    "type": "UnaryExpression", "start": 0, "end": 2,
                    "operator": "-", "prefix": true,
                    "argument": { "type": "Literal", "start": 1, "end": 2, "value": 1, "raw": "1" },
                },
            }],
        }),
    );
}

#[test]
fn test_member_chains_grow_left() {
    // `a.b.c` parses as `(a.b).c`.
    let program = parse("a.b.c;");
    match first_expression(&program) {
        Expression::Member(outer) => {
            assert!(!outer.computed);
            assert!(matches!(&*outer.object, Expression::Member(_)));
        }
        expression => panic!("expected a member access, found `{expression}`"),
    }
}

#[test]
fn test_computed_member_access() {
    let program = parse("list[i + 1];");
    match first_expression(&program) {
        Expression::Member(member) => {
            assert!(member.computed);
            assert!(matches!(&*member.property, Expression::Binary(_)));
        }
        expression => panic!("expected a member access, found `{expression}`"),
    }
}

#[test]
fn test_call_after_member_chain() {
    // `console.log(1, 2)` calls the member access with two arguments.
    let program = parse("console.log(1, 2);");
    match first_expression(&program) {
        Expression::Call(call) => {
            assert!(matches!(&*call.callee, Expression::Member(_)));
            assert_eq!(call.arguments.len(), 2);
        }
        expression => panic!("expected a call, found `{expression}`"),
    }
}

#[test]
fn test_chained_calls() {
    // `f(1)(2)` wraps the first call in a second one.
    let program = parse("f(1)(2);");
    match first_expression(&program) {
        Expression::Call(outer) => {
            assert!(matches!(&*outer.callee, Expression::Call(_)));
            assert_eq!(outer.arguments.len(), 1);
        }
        expression => panic!("expected a call, found `{expression}`"),
    }
}

#[test]
fn test_literals() {
    for (source, value, raw) in [
        ("123;", LiteralValue::Number(123), "123"),
        ("\"Hello World!\";", LiteralValue::String("Hello World!".to_string()), "\"Hello World!\""),
        ("'single';", LiteralValue::String("single".to_string()), "'single'"),
        ("true;", LiteralValue::Boolean(true), "true"),
        ("false;", LiteralValue::Boolean(false), "false"),
        ("null;", LiteralValue::Null, "null"),
    ] {
        let program = parse(source);
        match first_expression(&program) {
            Expression::Literal(literal) => {
                assert_eq!(literal.value, value);
                assert_eq!(literal.raw, raw);
            }
            expression => panic!("expected a literal, found `{expression}`"),
        }
    }
}

#[test]
fn test_this_and_super_parse_as_identifiers() {
    let program = parse("this.x;");
    match first_expression(&program) {
        Expression::Member(member) => match &*member.object {
            Expression::Identifier(identifier) => assert_eq!(identifier.name, "this"),
            expression => panic!("expected an identifier, found `{expression}`"),
        },
        expression => panic!("expected a member access, found `{expression}`"),
    }

    let program = parse("super(1);");
    match first_expression(&program) {
        Expression::Call(call) => match &*call.callee {
            Expression::Identifier(identifier) => assert_eq!(identifier.name, "super"),
            expression => panic!("expected an identifier, found `{expression}`"),
        },
        expression => panic!("expected a call, found `{expression}`"),
    }
}

#[test]
fn test_expression_statement_requires_semicolon() {
    let err = jay_parser::parse("123").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370003");
    assert!(err.to_string().contains("Expected ';' -- found '<eof>'"));
}

#[test]
fn test_unknown_token_is_reported_with_offset() {
    let err = jay_parser::parse("@").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370000");
    assert!(err.to_string().contains("--> 0..1"));
}

#[test]
fn test_primary_expression_rejects_stray_keyword() {
    // `new` is tokenized but has no production.
    let err = jay_parser::parse("new X();").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370004");
}

#[test]
fn test_integer_out_of_range() {
    let err = jay_parser::parse("99999999999999999999999999;").unwrap_err();
    assert_eq!(err.error_code(), "EPAR0370007");
}
