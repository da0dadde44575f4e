//! Operator-precedence tests.
//!
//! Precedence is checked two ways: by rendering the parsed program in the
//! canonical parenthesized form, and by comparing the AST of an expression
//! against the AST of its explicitly parenthesized spelling.

use super::parse;
use crate::ast::Program;
use bumpalo::Bump;

fn ast<'a>(arena: &'a Bump, source: &'a str) -> Program<'a> {
    parse(arena, source)
        .unwrap_or_else(|errors| panic!("parsing failed: {:?}\n{:?}", source, errors))
}

fn assert_prints(cases: &[(&str, &str)]) {
    let arena = Bump::new();
    for (source, expected) in cases {
        let source = &*arena.alloc_str(source);
        assert_eq!(
            ast(&arena, source).to_string(),
            *expected,
            "source: {:?}",
            source
        );
    }
}

#[test]
fn test_prefix_binds_tighter_than_product() {
    assert_prints(&[
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
    ]);
}

#[test]
fn test_arithmetic_is_left_associative() {
    assert_prints(&[
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
    ]);
}

#[test]
fn test_comparison_below_arithmetic() {
    assert_prints(&[
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
    ]);
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_prints(&[
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
    ]);
}

#[test]
fn test_call_binds_tighter_than_arithmetic() {
    assert_prints(&[
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ]);
}

#[test]
fn test_index_binds_tightest() {
    assert_prints(&[
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
    ]);
}

#[test]
fn test_statement_sequences_print_in_order() {
    assert_prints(&[("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)")]);
}

#[test]
fn test_explicit_parentheses_yield_identical_ast() {
    let arena = Bump::new();
    let equivalent = [
        ("a + b - c", "(a + b) - c"),
        ("a * b / c", "(a * b) / c"),
        ("a + b * c", "a + (b * c)"),
        ("-a * b", "(-a) * b"),
        ("a == b < c", "a == (b < c)"),
        ("a + add(b)[0]", "a + ((add(b))[0])"),
    ];
    for (implicit, explicit) in equivalent {
        let implicit = &*arena.alloc_str(implicit);
        let explicit = &*arena.alloc_str(explicit);
        // Compare the expression trees; the statement node itself retains
        // the introducing token, which legitimately differs when the
        // explicit spelling starts with a parenthesis.
        assert_eq!(
            first_expression(&arena, implicit),
            first_expression(&arena, explicit),
            "{:?} vs {:?}",
            implicit,
            explicit
        );
    }
}

fn first_expression<'a>(arena: &'a Bump, source: &'a str) -> &'a crate::ast::Expression<'a> {
    match ast(arena, source).statements {
        [crate::ast::Statement::Expression { expression, .. }] => *expression,
        other => panic!("expected one expression statement, got {:?}", other),
    }
}
