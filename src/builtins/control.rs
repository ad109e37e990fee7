//! Control flow and explicit evaluation: if, while, loop, eval
//!
//! All four retype a Q-expression into an S-expression before evaluating it;
//! this is the only way quoted code ever runs.
//!
//! - `if`: pick one of two Q-expression branches on a Number condition
//! - `while`: run the body once when the condition is nonzero
//! - `loop`: run the body a fixed number of times, yielding the last result
//! - `eval`: evaluate a Q-expression as an S-expression

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::{Kind, Value};
use std::rc::Rc;

/// `(if cond then else)`: evaluates the `then` branch when `cond` is
/// nonzero, the `else` branch otherwise.
pub fn builtin_if(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("if", args, 3);
    ensure_type!("if", args, 0, Kind::Number);
    ensure_type!("if", args, 1, Kind::Qexpr);
    ensure_type!("if", args, 2, Kind::Qexpr);

    let branch = if args[0].as_number() != 0 {
        args.remove(1)
    } else {
        args.remove(2)
    };
    eval(env, branch.into_sexpr())
}

/// `(while cond body)`: the condition reaches this builtin already reduced
/// to a fixed Number, so a nonzero condition can never become false; the
/// body runs once rather than forever.
pub fn builtin_while(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("while", args, 2);
    ensure_type!("while", args, 0, Kind::Number);
    ensure_type!("while", args, 1, Kind::Qexpr);

    if args[0].as_number() == 0 {
        return Value::empty_sexpr();
    }
    let body = args.remove(1);
    eval(env, body.into_sexpr())
}

/// `(loop n body)`: evaluates `body` `n` times and returns the last result.
/// A non-positive count runs nothing and returns the empty S-expression.
pub fn builtin_loop(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("loop", args, 2);
    ensure_type!("loop", args, 0, Kind::Number);
    ensure_type!("loop", args, 1, Kind::Qexpr);

    let body = args.remove(1).into_sexpr();
    let count = args[0].as_number();

    let mut result = Value::empty_sexpr();
    for _ in 0..count {
        result = eval(env, body.clone());
        if result.is_error() {
            break;
        }
    }
    result
}

/// `(eval q)`: retypes the Q-expression to an S-expression and evaluates it.
pub fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("eval", args, 1);
    ensure_type!("eval", args, 0, Kind::Qexpr);

    eval(env, args.remove(0).into_sexpr())
}

/// Register control-flow builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("if".to_string(), Value::Builtin(builtin_if));
    env.put("while".to_string(), Value::Builtin(builtin_while));
    env.put("loop".to_string(), Value::Builtin(builtin_loop));
    env.put("eval".to_string(), Value::Builtin(builtin_eval));
}
