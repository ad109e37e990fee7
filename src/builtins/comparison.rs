//! Comparison operations: ==, !=, <, <=, >, >=
//!
//! Equality is structural over every variant; the ordering operators work on
//! Numbers only. All six return `1` or `0`.

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::value::{Kind, Value};
use std::rc::Rc;

pub fn builtin_eq(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    compare(args, "==")
}

pub fn builtin_ne(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    compare(args, "!=")
}

fn compare(args: Vec<Value>, op: &str) -> Value {
    ensure_arity!(op, args, 2);

    let equal = args[0] == args[1];
    let truth = if op == "==" { equal } else { !equal };
    Value::Number(truth as i64)
}

pub fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    order(args, ">")
}

pub fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    order(args, "<")
}

pub fn builtin_ge(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    order(args, ">=")
}

pub fn builtin_le(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    order(args, "<=")
}

fn order(args: Vec<Value>, op: &str) -> Value {
    ensure_arity!(op, args, 2);
    ensure_type!(op, args, 0, Kind::Number);
    ensure_type!(op, args, 1, Kind::Number);

    let a = args[0].as_number();
    let b = args[1].as_number();
    let truth = match op {
        ">" => a > b,
        "<" => a < b,
        ">=" => a >= b,
        _ => a <= b,
    };
    Value::Number(truth as i64)
}

/// Register comparison builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("==".to_string(), Value::Builtin(builtin_eq));
    env.put("!=".to_string(), Value::Builtin(builtin_ne));
    env.put(">".to_string(), Value::Builtin(builtin_gt));
    env.put("<".to_string(), Value::Builtin(builtin_lt));
    env.put(">=".to_string(), Value::Builtin(builtin_ge));
    env.put("<=".to_string(), Value::Builtin(builtin_le));
}
