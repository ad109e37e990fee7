//! Type introspection: typeof, type_name
//!
//! - `typeof`: the internal tag index of a value, as a Number
//! - `type_name`: the tag name for an index, as a string

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::value::{Kind, Value};
use std::rc::Rc;

pub fn builtin_typeof(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("typeof", args, 1);

    Value::Number(args.remove(0).kind() as i64)
}

pub fn builtin_type_name(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ensure_arity!("type_name", args, 1);
    ensure_type!("type_name", args, 0, Kind::Number);

    Value::Str(Kind::name_of(args[0].as_number()).to_string())
}

/// Register type introspection builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("typeof".to_string(), Value::Builtin(builtin_typeof));
    env.put("type_name".to_string(), Value::Builtin(builtin_type_name));
}
