//! Tree-walking interpreter for Mica.
//!
//! Evaluates a [`Source`](mica_ir::Source) directly, whether or not the
//! analyzer has filled its resolution slots. All names are looked up at run
//! time, so an unanalyzed program reports type and name problems as
//! [`RuntimeError`]s.
//!
//! # Architecture
//!
//! - `interpreter/`: the [`Interpreter`], its builder, statement execution,
//!   expression evaluation
//! - `operators/`: binary operators over [`Value`]s
//! - `environment`: callables and the runtime scope arena
//! - `prelude`: the natives every program sees (`print`, `range`)
//! - `print_handler`: where `print` output goes

mod environment;
mod errors;
mod interpreter;
mod operators;
mod prelude;
mod print_handler;
mod value;

pub use environment::{Callable, Environment, NativeFn};
pub use errors::{EvalResult, RuntimeError, RuntimeErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{divide_half_even, evaluate_binary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

#[cfg(test)]
mod tests;
