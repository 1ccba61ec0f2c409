//! Runtime bindings.

use mica_ir::{ScopeArena, ScopeId};

use crate::{EvalResult, Interpreter, Value};

/// A host function. Receives the interpreter (for its print sink and
/// environment) and the evaluated arguments.
pub type NativeFn = fn(&mut Interpreter<'_>, Vec<Value>) -> EvalResult;

/// What a function binding refers to at run time.
#[derive(Copy, Clone, Debug)]
pub enum Callable {
    Native(NativeFn),
    /// The method at this index of the running source, closed over the
    /// scope it was defined in.
    User { method: usize, scope: ScopeId },
}

/// The runtime scope arena: variables hold values, functions hold callables.
pub type Environment = ScopeArena<Value, Callable>;

/// Outcome of executing a statement.
pub(crate) enum Flow {
    Normal,
    /// A `RETURN` unwinding to the enclosing call.
    Return(Value),
}
