use super::*;
use pretty_assertions::assert_eq;

/// Lex, parse, and interpret one source against `interpreter`, skipping
/// interpretation when any static error was reported.
fn run_with(interpreter: &mut Interpreter, diagnostics: &mut Diagnostics, source: &str) {
    let tokens = brio_lexer::lex(source, diagnostics);
    let statements = brio_parse::parse(&tokens, diagnostics);
    if !diagnostics.had_error() {
        interpreter.interpret(&statements, diagnostics);
    }
}

/// One-shot run with a buffering print handler.
/// Returns (printed output, rendered diagnostics, had_runtime_error).
fn run(source: &str) -> (String, Vec<String>, bool) {
    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::with_print_handler(PrintHandlerImpl::buffer());
    run_with(&mut interpreter, &mut diagnostics, source);
    let rendered = diagnostics.drain().iter().map(|d| d.to_string()).collect();
    (
        interpreter.captured_output(),
        rendered,
        diagnostics.had_runtime_error(),
    )
}

/// Run a source expected to produce no errors at all; returns the output.
fn run_clean(source: &str) -> String {
    let (output, errors, had_runtime_error) = run(source);
    assert_eq!(errors, Vec::<String>::new());
    assert!(!had_runtime_error);
    output
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_clean("print 1 + 2 * 3;"), "7\n");
}

#[test]
fn integral_results_print_without_fraction() {
    assert_eq!(run_clean("print 10 / 4;"), "2.5\n");
    assert_eq!(run_clean("print 8 / 2;"), "4\n");
}

#[test]
fn block_shadowing_does_not_leak() {
    assert_eq!(
        run_clean("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(run_clean("print \"a\" + \"b\";"), "ab\n");
}

#[test]
fn mixed_plus_is_a_runtime_error_with_no_output() {
    let (output, errors, had_runtime_error) = run("print \"a\" + 1;");
    assert_eq!(output, "");
    assert!(had_runtime_error);
    assert_eq!(
        errors,
        vec!["Operands must be two numbers or two strings\n[line 1]"]
    );
}

#[test]
fn equality_semantics() {
    assert_eq!(run_clean("print 1 == 1.0;"), "true\n");
    assert_eq!(run_clean("print nil == nil;"), "true\n");
    assert_eq!(run_clean("print nil == false;"), "false\n");
    assert_eq!(run_clean("print \"1\" == 1;"), "false\n");
    assert_eq!(run_clean("print 1 != 2;"), "true\n");
}

#[test]
fn for_loop_prints_and_scopes_its_variable() {
    let (output, errors, had_runtime_error) =
        run("for (var i = 0; i < 3; i = i + 1) print i;\nprint i;");
    // The loop runs, then `i` is gone: the desugared outer block scoped it.
    assert_eq!(output, "0\n1\n2\n");
    assert!(had_runtime_error);
    assert_eq!(errors, vec!["Undefined variable 'i'.\n[line 2]"]);
}

#[test]
fn while_loop() {
    assert_eq!(
        run_clean("var i = 0; while (i < 2) i = i + 1; print i;"),
        "2\n"
    );
}

#[test]
fn assignment_to_undeclared_creates_no_binding() {
    let (output, errors, _) = run("x = 1;\nprint x;");
    assert_eq!(output, "");
    // Both statements fail independently: the assignment did not create `x`.
    assert_eq!(
        errors,
        vec![
            "Undefined variable 'x'.\n[line 1]",
            "Undefined variable 'x'.\n[line 2]"
        ]
    );
}

#[test]
fn execution_continues_after_a_runtime_error() {
    let (output, errors, had_runtime_error) = run("var a = 1;\nprint \"a\" + 1;\nprint a;");
    assert_eq!(output, "1\n");
    assert!(had_runtime_error);
    assert_eq!(
        errors,
        vec!["Operands must be two numbers or two strings\n[line 2]"]
    );
}

#[test]
fn scope_is_restored_after_an_error_inside_a_block() {
    let (output, errors, _) = run("var a = 1;\n{ var a = 2; print \"x\" + 1; }\nprint a;");
    assert_eq!(output, "1\n");
    assert_eq!(errors.len(), 1);
}

#[test]
fn evaluation_is_repeatable() {
    assert_eq!(run_clean("print 1 + 2; print 1 + 2;"), "3\n3\n");
}

#[test]
fn truthiness_in_conditions() {
    assert_eq!(run_clean("if (0) print \"zero\"; else print \"no\";"), "zero\n");
    assert_eq!(run_clean("if (\"\") print \"empty\";"), "empty\n");
    assert_eq!(run_clean("if (nil) print \"yes\"; else print \"no\";"), "no\n");
}

#[test]
fn logical_operators_return_operand_values() {
    assert_eq!(run_clean("print \"hi\" or 2;"), "hi\n");
    assert_eq!(run_clean("print nil or \"yes\";"), "yes\n");
    assert_eq!(run_clean("print nil and 1;"), "nil\n");
    assert_eq!(run_clean("print 1 and 2;"), "2\n");
    assert_eq!(run_clean("print false or false;"), "false\n");
}

#[test]
fn logical_operators_short_circuit_side_effects() {
    // The right-hand assignment must not run when `or` short-circuits.
    assert_eq!(
        run_clean("var a = 1; true or (a = 2); print a;"),
        "1\n"
    );
    assert_eq!(
        run_clean("var a = 1; false and (a = 2); print a;"),
        "1\n"
    );
}

#[test]
fn var_without_initializer_is_nil() {
    assert_eq!(run_clean("var a; print a;"), "nil\n");
}

#[test]
fn unary_operators() {
    assert_eq!(run_clean("print -(3);"), "-3\n");
    assert_eq!(run_clean("print !nil;"), "true\n");
    assert_eq!(run_clean("print !0;"), "false\n");

    let (_, errors, _) = run("print -\"a\";");
    assert_eq!(errors, vec!["Operand must be a number\n[line 1]"]);
}

#[test]
fn assignment_is_an_expression_yielding_the_value() {
    assert_eq!(run_clean("var a = 1; print a = 2;"), "2\n");
}

#[test]
fn else_branch_runs_when_condition_is_falsy() {
    assert_eq!(
        run_clean("if (1 > 2) print \"then\"; else print \"else\";"),
        "else\n"
    );
}

#[test]
fn static_errors_suppress_interpretation() {
    let (output, errors, had_runtime_error) = run("print 1;\nprint ;");
    // The first statement parsed fine, but the run has a syntax error, so
    // nothing executes.
    assert_eq!(output, "");
    assert!(!had_runtime_error);
    assert_eq!(errors, vec!["[line: 2] Error  at ';': Expect expression"]);
}

#[test]
fn bindings_created_before_a_failure_survive() {
    // The var statement completes; the next statement fails mid-expression
    // after `b` was already defined. `b` stays bound.
    let (output, errors, _) = run("var b = 1;\nvar c = \"x\" + 1;\nprint b;\nprint c;");
    assert_eq!(output, "1\n");
    // `c` was never defined: its initializer failed.
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[1],
        "Undefined variable 'c'.\n[line 4]"
    );
}

#[test]
fn interactive_session_keeps_globals_and_runtime_flag() {
    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::with_print_handler(PrintHandlerImpl::buffer());

    // Line 1: define a global.
    run_with(&mut interpreter, &mut diagnostics, "var a = 40;");
    assert!(!diagnostics.had_error());

    // Line 2: a syntax error; the static flag resets before line 3.
    run_with(&mut interpreter, &mut diagnostics, "print ;");
    assert!(diagnostics.had_error());
    diagnostics.reset_static();
    diagnostics.drain();

    // Line 3: a runtime error; its flag persists.
    run_with(&mut interpreter, &mut diagnostics, "print a + \"x\";");
    assert!(diagnostics.had_runtime_error());
    diagnostics.drain();

    // Line 4: the global from line 1 is still visible.
    run_with(&mut interpreter, &mut diagnostics, "print a + 2;");
    assert!(!diagnostics.had_error());
    assert!(diagnostics.had_runtime_error());
    assert_eq!(interpreter.captured_output(), "42\n");
}
