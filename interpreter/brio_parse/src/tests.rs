use super::*;
use brio_fmt::print_program;
use pretty_assertions::assert_eq;

/// Lex and parse, asserting no errors, and render through the printer.
fn parse_clean(source: &str) -> String {
    let mut diagnostics = Diagnostics::new();
    let tokens = brio_lexer::lex(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    assert!(
        !diagnostics.had_error(),
        "unexpected parse errors: {:?}",
        diagnostics.drain()
    );
    print_program(&statements)
}

/// Lex and parse a source expected to fail; returns (statements, rendered diagnostics).
fn parse_with_errors(source: &str) -> (Vec<Stmt>, Vec<String>) {
    let mut diagnostics = Diagnostics::new();
    let tokens = brio_lexer::lex(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    assert!(diagnostics.had_error(), "expected parse errors");
    let rendered = diagnostics.drain().iter().map(|d| d.to_string()).collect();
    (statements, rendered)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_clean("1 + 2 * 3;"), "(; (+ 1 (* 2 3)))");
}

#[test]
fn binary_operators_left_associate() {
    assert_eq!(parse_clean("1 - 2 - 3;"), "(; (- (- 1 2) 3))");
    assert_eq!(parse_clean("8 / 4 / 2;"), "(; (/ (/ 8 4) 2))");
}

#[test]
fn unary_right_associates() {
    assert_eq!(parse_clean("!!true;"), "(; (! (! true)))");
    assert_eq!(parse_clean("--1;"), "(; (- (- 1)))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(parse_clean("(1 + 2) * 3;"), "(; (* (group (+ 1 2)) 3))");
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(parse_clean("1 < 2 == true;"), "(; (== (< 1 2) true))");
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(parse_clean("a or b and c;"), "(; (or a (and b c)))");
}

#[test]
fn assignment_right_associates() {
    assert_eq!(parse_clean("a = b = 1;"), "(; (= a (= b 1)))");
}

#[test]
fn var_declarations() {
    assert_eq!(parse_clean("var a;"), "(var a)");
    assert_eq!(parse_clean("var a = 1 + 2;"), "(var a (+ 1 2))");
}

#[test]
fn else_binds_to_nearest_if() {
    assert_eq!(
        parse_clean("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))"
    );
}

#[test]
fn while_statement() {
    assert_eq!(
        parse_clean("while (a < 3) print a;"),
        "(while (< a 3) (print a))"
    );
}

#[test]
fn for_desugars_into_while() {
    assert_eq!(
        parse_clean("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"
    );
}

#[test]
fn for_with_all_clauses_omitted() {
    assert_eq!(parse_clean("for (;;) print 1;"), "(while true (print 1))");
}

#[test]
fn for_with_expression_initializer() {
    assert_eq!(
        parse_clean("for (i = 0; i < 2;) print i;"),
        "(block (; (= i 0)) (while (< i 2) (print i)))"
    );
}

#[test]
fn block_groups_statements() {
    assert_eq!(
        parse_clean("{ var a = 1; print a; }"),
        "(block (var a 1) (print a))"
    );
}

#[test]
fn invalid_assignment_target_reports_and_continues() {
    let (statements, errors) = parse_with_errors("1 + 2 = 3;");
    // The left-hand expression survives as an expression statement.
    assert_eq!(print_program(&statements), "(; (+ 1 2))");
    assert_eq!(errors, vec!["[line: 1] Error  at '=': Invalid assignment target"]);
}

#[test]
fn missing_close_paren() {
    let (_, errors) = parse_with_errors("(1 + 2;");
    assert_eq!(errors, vec!["[line: 1] Error  at ';': Expect ')' after expression"]);
}

#[test]
fn error_at_end_of_input() {
    let (_, errors) = parse_with_errors("1 +");
    assert_eq!(errors, vec!["[line: 1] Error  at end: Expect expression"]);
}

#[test]
fn recovery_surfaces_multiple_errors_in_one_pass() {
    let (statements, errors) = parse_with_errors("var = 1;\n+;\nprint 3;");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "[line: 1] Error  at '=': Expect variable name");
    assert_eq!(errors[1], "[line: 2] Error  at '+': Expect expression");
    // The healthy statement after both errors still parses.
    assert_eq!(print_program(&statements), "(print 3)");
}

#[test]
fn recovery_inside_block_keeps_remaining_statements() {
    let (statements, errors) = parse_with_errors("{ var = 1; print 2; }");
    assert_eq!(errors.len(), 1);
    assert_eq!(print_program(&statements), "(block (print 2))");
}

#[test]
fn missing_semicolon_after_expression() {
    let (_, errors) = parse_with_errors("1 + 2");
    assert_eq!(errors, vec!["[line: 1] Error  at end: Expect ';' after expression"]);
}

#[test]
fn var_not_allowed_as_if_branch() {
    let (_, errors) = parse_with_errors("if (true) var a = 1;");
    assert_eq!(errors, vec!["[line: 1] Error  at 'var': Expect expression"]);
}
