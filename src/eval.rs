// ABOUTME: Tree-walking evaluator: S-expression reduction and the application protocol

use crate::env::Environment;
use crate::value::{Kind, Lambda, Value};
use std::collections::VecDeque;
use std::rc::Rc;

/// Evaluate a value. Symbols resolve to a copy of their binding,
/// S-expressions reduce, and everything else is already a result.
pub fn eval(env: &Rc<Environment>, v: Value) -> Value {
    match v {
        Value::Symbol(name) => env.get(&name),
        Value::Sexpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}

/// Reduce an S-expression: evaluate the children left to right, then apply
/// the head to the rest. Arguments are eager; quotation exists only as
/// syntactic Q-expressions.
fn eval_sexpr(env: &Rc<Environment>, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    // The first Error among the children is the whole reduction's result.
    if let Some(i) = cells.iter().position(|cell| cell.is_error()) {
        return cells.swap_remove(i);
    }

    if cells.is_empty() {
        return Value::Sexpr(cells);
    }
    if cells.len() == 1 {
        return cells.remove(0);
    }

    let f = cells.remove(0);
    if f.kind() != Kind::Function {
        return Value::error(format!(
            "sexpression starts with incorrect type; got {}, expected function.",
            f.kind()
        ));
    }
    apply(env, f, cells)
}

/// Apply a callable to already-evaluated arguments. Builtins and lambdas
/// share this one dispatch site.
pub fn apply(env: &Rc<Environment>, f: Value, args: Vec<Value>) -> Value {
    match f {
        Value::Builtin(func) => func(env, args),
        Value::Lambda(lambda) => apply_lambda(env, *lambda, args),
        other => Value::error(format!(
            "sexpression starts with incorrect type; got {}, expected function.",
            other.kind()
        )),
    }
}

fn apply_lambda(env: &Rc<Environment>, mut f: Lambda, args: Vec<Value>) -> Value {
    let given = args.len();
    let total = f.formals.len();
    let mut args: VecDeque<Value> = args.into();

    while let Some(actual) = args.pop_front() {
        if f.formals.is_empty() {
            return Value::error(format!(
                "function passed too many arguments; got {}, expected {}.",
                given, total
            ));
        }

        let sym = f.formals.remove(0);

        // '&' collects this and every remaining actual into the rest slot.
        if sym == "&" {
            if f.formals.len() != 1 {
                return Value::error(
                    "function format invalid; symbol '&' not followed by single symbol.",
                );
            }
            let rest = f.formals.remove(0);
            let mut rest_args = vec![actual];
            rest_args.extend(args.drain(..));
            f.env.put(rest, Value::Qexpr(rest_args));
            break;
        }

        f.env.put(sym, actual);
    }

    // A trailing '&' with no actuals left still binds the rest slot, to {}.
    if f.formals.first().is_some_and(|sym| sym == "&") {
        if f.formals.len() != 2 {
            return Value::error(
                "function format invalid; symbol '&' not followed by single symbol.",
            );
        }
        f.formals.remove(0);
        let rest = f.formals.remove(0);
        f.env.put(rest, Value::Qexpr(Vec::new()));
    }

    if f.formals.is_empty() {
        // Fully applied: hang the frame under the caller and run the body.
        f.env.set_parent(Rc::clone(env));
        let Lambda { body, env: frame, .. } = f;
        eval(&frame, body.into_sexpr())
    } else {
        // Under-supplied: the partially-bound lambda is itself the result.
        Value::Lambda(Box::new(f))
    }
}
