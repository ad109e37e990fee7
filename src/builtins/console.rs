//! Console I/O: print, println, read
//!
//! - `print`: write each argument in its display form, space-separated
//! - `println`: like `print` with a trailing newline
//! - `read`: prompt on stdout, read one line from stdin as a string
//!
//! `print` and `println` return the empty S-expression.

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::value::{Kind, Value};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    for arg in &args {
        print!("{} ", arg);
    }
    Value::empty_sexpr()
}

pub fn builtin_println(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    for arg in &args {
        print!("{} ", arg);
    }
    println!();
    Value::empty_sexpr()
}

/// `(read prompt)`: blocks for one line of stdin, returned without its line
/// terminator.
pub fn builtin_read(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("read", args, 1);
    ensure_type!("read", args, 0, Kind::Str);

    print!("{}", args.remove(0).into_string());
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Value::Str(line)
        }
        Err(e) => Value::error(format!("could not read line: {}", e)),
    }
}

/// Register console I/O builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("print".to_string(), Value::Builtin(builtin_print));
    env.put("println".to_string(), Value::Builtin(builtin_println));
    env.put("read".to_string(), Value::Builtin(builtin_read));
}
