//! The interpreter: environment, host API, and method invocation.
//!
//! Scopes live in one [`Environment`] arena:
//!
//! ```text
//! prelude (print, range)
//!   └── globals (host definitions)
//!         └── program (one per `run`: fields, methods)
//!               └── one frame per method invocation
//! ```
//!
//! Records are scopes with no parent. `IF`, `WHILE` and `FOR` bodies run in
//! the enclosing frame, so their declarations stay visible after the block.
//!
//! A frame is released when its call returns, and the program scope when
//! `run` finishes. Nothing else can hold a frame: values refer only to
//! records. Records are never released, so scopes allocated before the most
//! recent record stay in place.

mod builder;
mod eval;
mod exec;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use mica_ir::{Name, ScopeId, Source, Span, StringInterner};
use mica_stack::ensure_sufficient_stack;

use crate::environment::Flow;
use crate::{
    prelude, Callable, Environment, EvalResult, NativeFn, RuntimeError, SharedPrintHandler, Value,
};

/// Evaluates [`Source`] trees.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    env: Environment,
    globals: ScopeId,
    scope: ScopeId,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    depth: usize,
    /// Scope count right after the most recent record was allocated.
    /// Releases never go below it.
    pinned: usize,
}

impl<'a> Interpreter<'a> {
    fn new(
        interner: &'a StringInterner,
        print_handler: SharedPrintHandler,
        max_call_depth: usize,
    ) -> Self {
        let mut env = Environment::new();
        prelude::install(&mut env, ScopeId::PRELUDE, interner);
        let pinned = env.scope_count();
        Interpreter {
            interner,
            env,
            globals: ScopeId::GLOBALS,
            scope: ScopeId::GLOBALS,
            print_handler,
            max_call_depth,
            depth: 0,
            pinned,
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run `source`: define its fields and methods in a fresh program scope,
    /// then call `main()` and return its result.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, source: &Source) -> EvalResult {
        let mark = self.env.scope_count();
        let program = self.alloc_scope(Some(self.globals))?;
        self.scope = program;
        let result = self.run_program(source, program);
        self.scope = self.globals;
        self.depth = 0;
        self.release_to(mark);
        result
    }

    fn run_program(&mut self, source: &Source, program: ScopeId) -> EvalResult {
        for field in &source.fields {
            let value = match field.value {
                Some(value) => self.eval_expr(source, value)?,
                None => Value::Nil,
            };
            self.env.define_variable(program, field.name, value);
        }
        for (index, method) in source.methods.iter().enumerate() {
            self.env.define_function(
                program,
                method.name,
                method.params.len(),
                Callable::User {
                    method: index,
                    scope: program,
                },
            );
        }

        let main = self.interner.intern("main");
        let callable = self
            .env
            .lookup_function(program, main, 0)
            .copied()
            .ok_or_else(|| RuntimeError::undefined_function("main", 0))?;
        let result = self.call(source, callable, Vec::new(), Span::DUMMY)?;
        tracing::debug!(result = %result, "main returned");
        Ok(result)
    }

    /// Invoke `callable` with evaluated `args`.
    ///
    /// A user method runs in a fresh child of its captured scope; its
    /// `RETURN` stops here and becomes the result.
    fn call(
        &mut self,
        source: &Source,
        callable: Callable,
        args: Vec<Value>,
        span: Span,
    ) -> EvalResult {
        let (index, captured) = match callable {
            Callable::Native(native) => return native(self, args).map_err(|e| e.with_span(span)),
            Callable::User { method, scope } => (method, scope),
        };
        let method = source.methods.get(index).ok_or_else(|| {
            RuntimeError::undefined_function("<method>", args.len()).with_span(span)
        })?;

        if self.depth >= self.max_call_depth {
            return Err(RuntimeError::stack_overflow(self.max_call_depth).with_span(span));
        }
        tracing::trace!(
            method = self.interner.lookup(method.name),
            depth = self.depth,
            "call"
        );

        let mark = self.env.scope_count();
        let frame = self
            .alloc_scope(Some(captured))
            .map_err(|e| e.with_span(span))?;
        for (param, arg) in method.params.iter().zip(args) {
            self.env.define_variable(frame, param.name, arg);
        }

        let saved = std::mem::replace(&mut self.scope, frame);
        self.depth += 1;
        let flow = ensure_sufficient_stack(|| self.exec_block(source, method.body));
        self.depth -= 1;
        self.scope = saved;
        self.release_to(mark);

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }

    fn alloc_scope(&mut self, parent: Option<ScopeId>) -> Result<ScopeId, RuntimeError> {
        self.env
            .alloc(parent)
            .map_err(|e| RuntimeError::scope_overflow(&e))
    }

    /// Release the scopes allocated since `mark`, keeping every record.
    fn release_to(&mut self, mark: usize) {
        self.env.truncate(mark.max(self.pinned));
    }

    // Host API

    /// Create an empty record.
    pub fn new_record(&mut self) -> EvalResult {
        let scope = self.alloc_scope(None)?;
        self.pinned = self.env.scope_count();
        Ok(Value::Record(scope))
    }

    /// Bind a variable visible to every program this interpreter runs.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.env.define_variable(self.globals, name, value);
    }

    /// Bind a native function visible to every program this interpreter runs.
    pub fn define_native(&mut self, name: Name, arity: usize, native: NativeFn) {
        self.env
            .define_function(self.globals, name, arity, Callable::Native(native));
    }

    /// Set a member variable of `record`.
    pub fn define_member(
        &mut self,
        record: &Value,
        name: Name,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let scope = record.as_record().ok_or_else(|| RuntimeError::not_a_record(record))?;
        self.env.define_variable(scope, name, value);
        Ok(())
    }

    /// Set a member function of `record`.
    pub fn define_member_native(
        &mut self,
        record: &Value,
        name: Name,
        arity: usize,
        native: NativeFn,
    ) -> Result<(), RuntimeError> {
        let scope = record.as_record().ok_or_else(|| RuntimeError::not_a_record(record))?;
        self.env
            .define_function(scope, name, arity, Callable::Native(native));
        Ok(())
    }

    /// Read a member variable of `record`.
    pub fn member(&self, record: &Value, name: Name) -> Option<&Value> {
        self.env.lookup_variable(record.as_record()?, name)
    }

    /// Read a host global.
    pub fn global(&self, name: Name) -> Option<&Value> {
        self.env.lookup_variable(self.globals, name)
    }
}
