// ABOUTME: End-to-end scenarios driving whole programs through parse, read, and eval

use datascript::builtins::register_builtins;
use datascript::env::Environment;
use datascript::eval::eval;
use datascript::parser::parse;
use datascript::reader::read_program;
use std::rc::Rc;

/// Set up a root environment with all builtins registered.
fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);
    env
}

/// Evaluate one REPL line and render the result the way the driver would.
fn run(env: &Rc<Environment>, line: &str) -> String {
    let nodes = parse(line).expect("program should parse");
    eval(env, read_program(nodes)).to_string()
}

#[test]
fn test_variadic_addition() {
    let env = setup();
    assert_eq!(run(&env, "+ 1 2 3"), "6");
}

#[test]
fn test_global_binding_then_use() {
    let env = setup();
    assert_eq!(run(&env, "= {x} 10"), "()");
    assert_eq!(run(&env, "+ x 5"), "15");
}

#[test]
fn test_immediate_lambda_application() {
    let env = setup();
    assert_eq!(run(&env, "(lambda {x y} {+ x y}) 3 4"), "7");
}

#[test]
fn test_partial_application() {
    let env = setup();
    assert_eq!(run(&env, "= {add} (lambda {x y} {+ x y})"), "()");
    assert_eq!(run(&env, "(add 3) 4"), "7");
    assert_eq!(run(&env, "add 3 4"), "7");
}

#[test]
fn test_if_selects_branch() {
    let env = setup();
    assert_eq!(run(&env, "if (> 2 1) {+ 10 1} {+ 20 1}"), "11");
    assert_eq!(run(&env, "if (> 1 2) {+ 10 1} {+ 20 1}"), "21");
}

#[test]
fn test_head_of_list() {
    let env = setup();
    assert_eq!(run(&env, "head {1 2 3}"), "{1}");
}

#[test]
fn test_eval_of_joined_qexprs() {
    let env = setup();
    assert_eq!(run(&env, "eval (join {+} {1} {2 3})"), "6");
}

#[test]
fn test_string_concatenation() {
    let env = setup();
    assert_eq!(run(&env, "+ \"foo\" \"bar\""), "\"foobar\"");
}

#[test]
fn test_division_by_zero_is_an_error() {
    let env = setup();
    assert_eq!(run(&env, "/ 10 0"), "error: Division By Zero.");
}

#[test]
fn test_rest_parameter_collects_extra_arguments() {
    let env = setup();
    assert_eq!(run(&env, "(lambda {x & rest} {rest}) 1 2 3 4"), "{2 3 4}");
}

// ===== Universal properties =====

#[test]
fn test_qexprs_are_inert_until_evaluated() {
    let env = setup();
    assert_eq!(run(&env, "{+ 1 2}"), "{+ 1 2}");
    assert_eq!(run(&env, "{x y (/ 1 0)}"), "{x y (/ 1 0)}");
    assert_eq!(run(&env, "eval {+ 1 2}"), "3");
}

#[test]
fn test_equality_is_an_equivalence_and_ne_its_complement() {
    let env = setup();
    let values = ["1", "\"a\"", "{1 2}", "{}", "()"];
    for a in values {
        assert_eq!(run(&env, &format!("== {} {}", a, a)), "1");
        for b in values {
            let eq = run(&env, &format!("== {} {}", a, b));
            let ne = run(&env, &format!("!= {} {}", a, b));
            assert_ne!(eq, ne);
            // Symmetry.
            assert_eq!(eq, run(&env, &format!("== {} {}", b, a)));
        }
    }
}

#[test]
fn test_global_def_vs_local_put() {
    let env = setup();
    assert_eq!(run(&env, "= {x} 100"), "()");

    // put inside a lambda binds in the lambda's own frame only.
    run(&env, "= {with_local} (lambda {v} {fetch (list (put {y} v) y) 1})");
    assert_eq!(run(&env, "with_local 9"), "9");
    assert_eq!(run(&env, "y"), "error: unbound Symbol 'y'");

    // = inside a lambda writes through to the root frame.
    run(&env, "= {set_global} (lambda {v} {= {x} v})");
    assert_eq!(run(&env, "set_global 42"), "()");
    assert_eq!(run(&env, "x"), "42");
}

#[test]
fn test_errors_short_circuit_without_invoking_the_callee() {
    let env = setup();
    run(&env, "= {called} 0");
    run(&env, "= {mark} (lambda {v} {= {called} 1})");

    assert_eq!(run(&env, "mark (/ 1 0)"), "error: Division By Zero.");
    assert_eq!(run(&env, "called"), "0");
}

#[test]
fn test_first_error_wins() {
    let env = setup();
    assert_eq!(run(&env, "+ (/ 1 0) missing"), "error: Division By Zero.");
    assert_eq!(
        run(&env, "+ missing (/ 1 0)"),
        "error: unbound Symbol 'missing'"
    );
}

#[test]
fn test_root_sexpr_reduction_rules() {
    let env = setup();
    assert_eq!(run(&env, "()"), "()");
    assert_eq!(run(&env, "(5)"), "5");
    assert_eq!(
        run(&env, "(+ 1 2) (+ 3 4)"),
        "error: sexpression starts with incorrect type; got number, expected function."
    );
}
