//! Source file loading: load
//!
//! `(load "path")` parses a whole file and evaluates its top-level
//! expressions in order against the caller's environment. Errors raised by
//! individual expressions are printed as they occur and do not stop the rest
//! of the file; an unreadable or unparseable file is an Error.

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::parser;
use crate::reader;
use crate::value::{Kind, Value};
use std::fs;
use std::rc::Rc;

pub fn builtin_load(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("load", args, 1);
    ensure_type!("load", args, 0, Kind::Str);

    let path = args.remove(0).into_string();
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => return Value::error(format!("could not load Library {}: {}", path, e)),
    };

    let nodes = match parser::parse(&source) {
        Ok(nodes) => nodes,
        Err(e) => return Value::error(format!("could not load Library {}: {}", path, e)),
    };

    for node in nodes {
        let result = eval(env, reader::read(node));
        if result.is_error() {
            println!("{}", result);
        }
    }
    Value::empty_sexpr()
}

/// Register file loading builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("load".to_string(), Value::Builtin(builtin_load));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use std::path::PathBuf;

    fn setup() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    fn write_script(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("temp script should be writable");
        path
    }

    fn load(env: &Rc<Environment>, path: &std::path::Path) -> Value {
        builtin_load(env, vec![Value::Str(path.display().to_string())])
    }

    #[test]
    fn test_load_evaluates_top_level_expressions() {
        let env = setup();
        let path = write_script(
            "datascript_load_ok.ds",
            "; fixture script\n(= {x} 10)\n(= {double} (lambda {n} {* n 2}))\n",
        );

        assert_eq!(load(&env, &path), Value::empty_sexpr());
        assert_eq!(env.get("x"), Value::Number(10));
        assert_eq!(
            eval(&env, Value::Sexpr(vec![
                Value::Symbol("double".to_string()),
                Value::Number(21),
            ])),
            Value::Number(42)
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_continues_past_expression_errors() {
        let env = setup();
        let path = write_script(
            "datascript_load_err.ds",
            "(/ 1 0)\n(= {after} 1)\n",
        );

        assert_eq!(load(&env, &path), Value::empty_sexpr());
        assert_eq!(env.get("after"), Value::Number(1));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let env = setup();
        let path = std::env::temp_dir().join("datascript_no_such_file.ds");
        assert!(load(&env, &path).is_error());
    }

    #[test]
    fn test_load_parse_failure_is_an_error() {
        let env = setup();
        let path = write_script("datascript_load_bad.ds", "(+ 1 2");
        assert!(load(&env, &path).is_error());
        let _ = fs::remove_file(path);
    }
}
