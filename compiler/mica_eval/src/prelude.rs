//! Natives bound in every interpreter's prelude scope.

use mica_ir::{ScopeId, StringInterner};
use num_bigint::BigInt;

use crate::{Callable, Environment, EvalResult, Interpreter, RuntimeError, Value};

pub(crate) fn install(env: &mut Environment, scope: ScopeId, interner: &StringInterner) {
    env.define_function(
        scope,
        interner.intern("print"),
        1,
        Callable::Native(native_print),
    );
    env.define_function(
        scope,
        interner.intern("range"),
        2,
        Callable::Native(native_range),
    );
}

/// `print(value)`: the value's display text and a newline.
fn native_print(interp: &mut Interpreter<'_>, args: Vec<Value>) -> EvalResult {
    if let Some(value) = args.first() {
        interp.print_handler().println(&value.to_string());
    }
    Ok(Value::Nil)
}

/// `range(start, end)`: the integers from `start` up to but excluding `end`.
fn native_range(_: &mut Interpreter<'_>, args: Vec<Value>) -> EvalResult {
    let mut args = args.into_iter();
    let start = expect_integer(args.next())?;
    let end = expect_integer(args.next())?;
    Ok(Value::Range { start, end })
}

fn expect_integer(value: Option<Value>) -> Result<BigInt, RuntimeError> {
    match value {
        Some(Value::Integer(n)) => Ok(n),
        Some(other) => Err(RuntimeError::type_mismatch("Integer", &other)),
        None => Err(RuntimeError::type_mismatch("Integer", &Value::Nil)),
    }
}
