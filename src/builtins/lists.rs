//! List operations over Q-expressions
//!
//! - `list`: quote the evaluated arguments into a Q-expression
//! - `head`: one-element Q-expression holding the first element
//! - `tail`: everything but the first element
//! - `body`: everything but the first and last elements
//! - `pop`: remove the element at an index, if in bounds
//! - `fetch`: the element at an index
//! - `len`: element, byte, or digit count
//! - `join`: concatenate Q-expressions
//! - `range`: Q-expression of integers from `a` towards `b`, exclusive

use super::{ensure_arity, ensure_not_empty, ensure_type};
use crate::env::Environment;
use crate::value::{Kind, Value};
use std::rc::Rc;

/// Retypes the evaluated argument list into a Q-expression.
pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::Qexpr(args)
}

pub fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("head", args, 1);
    ensure_type!("head", args, 0, Kind::Qexpr);
    ensure_not_empty!("head", args, 0);

    let mut cells = args.remove(0).into_cells();
    cells.truncate(1);
    Value::Qexpr(cells)
}

pub fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("tail", args, 1);
    ensure_type!("tail", args, 0, Kind::Qexpr);
    ensure_not_empty!("tail", args, 0);

    let mut cells = args.remove(0).into_cells();
    cells.remove(0);
    Value::Qexpr(cells)
}

/// Drops both the first and last element; `{x}` collapses to `{}`.
pub fn builtin_body(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("body", args, 1);
    ensure_type!("body", args, 0, Kind::Qexpr);
    ensure_not_empty!("body", args, 0);

    let mut cells = args.remove(0).into_cells();
    cells.remove(0);
    cells.pop();
    Value::Qexpr(cells)
}

/// `(pop list idx)`: the list without the element at `idx`; out-of-bounds
/// indices leave the list unchanged.
pub fn builtin_pop(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("pop", args, 2);
    ensure_type!("pop", args, 0, Kind::Qexpr);
    ensure_type!("pop", args, 1, Kind::Number);
    ensure_not_empty!("pop", args, 0);

    let idx = args[1].as_number();
    let mut cells = args.remove(0).into_cells();
    if let Ok(i) = usize::try_from(idx) {
        if i < cells.len() {
            cells.remove(i);
        }
    }
    Value::Qexpr(cells)
}

/// `(fetch list idx)`: the element at `idx`.
pub fn builtin_fetch(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("fetch", args, 2);
    ensure_type!("fetch", args, 0, Kind::Qexpr);
    ensure_type!("fetch", args, 1, Kind::Number);
    ensure_not_empty!("fetch", args, 0);

    let idx = args[1].as_number();
    let mut cells = args.remove(0).into_cells();
    match usize::try_from(idx) {
        Ok(i) if i < cells.len() => cells.swap_remove(i),
        _ => Value::error("invalid index"),
    }
}

/// Element count for expressions, byte length for strings, decimal digit
/// count for numbers.
pub fn builtin_len(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("len", args, 1);

    match args.remove(0) {
        Value::Sexpr(cells) | Value::Qexpr(cells) => Value::Number(cells.len() as i64),
        Value::Str(s) => Value::Number(s.len() as i64),
        Value::Number(n) => Value::Number(n.unsigned_abs().to_string().len() as i64),
        other => Value::error(format!(
            "function 'len' passed incorrect type for argument 0; got {}, expected number, string, sexpression or qexpression.",
            other.kind()
        )),
    }
}

/// Concatenates any number of Q-expressions into one.
pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    for i in 0..args.len() {
        ensure_type!("join", args, i, Kind::Qexpr);
    }

    let mut joined = Vec::new();
    for arg in args {
        joined.extend(arg.into_cells());
    }
    Value::Qexpr(joined)
}

/// `(range a b)`: the integers from `a` to `b` exclusive, stepping towards
/// `b`; empty when the endpoints are equal.
pub fn builtin_range(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ensure_arity!("range", args, 2);
    ensure_type!("range", args, 0, Kind::Number);
    ensure_type!("range", args, 1, Kind::Number);

    let start = args[0].as_number();
    let stop = args[1].as_number();

    let cells: Vec<Value> = if start <= stop {
        (start..stop).map(Value::Number).collect()
    } else {
        ((stop + 1)..=start).rev().map(Value::Number).collect()
    };
    Value::Qexpr(cells)
}

/// Register list builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("list".to_string(), Value::Builtin(builtin_list));
    env.put("head".to_string(), Value::Builtin(builtin_head));
    env.put("tail".to_string(), Value::Builtin(builtin_tail));
    env.put("body".to_string(), Value::Builtin(builtin_body));
    env.put("pop".to_string(), Value::Builtin(builtin_pop));
    env.put("fetch".to_string(), Value::Builtin(builtin_fetch));
    env.put("len".to_string(), Value::Builtin(builtin_len));
    env.put("join".to_string(), Value::Builtin(builtin_join));
    env.put("range".to_string(), Value::Builtin(builtin_range));
}
