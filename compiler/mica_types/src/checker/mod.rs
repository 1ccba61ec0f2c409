//! The analyzer proper.
//!
//! Scopes live in one [`ScopeArena`] for the analyzer's lifetime:
//!
//! ```text
//! prelude (print, range)
//!   └── globals (host definitions)
//!         └── program (one per `analyze` call: fields, methods)
//!               └── method, block, and loop scopes
//! ```
//!
//! Each `analyze` call starts from a fresh program scope and releases it
//! afterwards, so analyzing the same tree twice produces the same
//! resolution slots. Method and block scopes are released as soon as their
//! body has been checked.

mod expr;
mod item;
mod stmt;

use mica_ir::{
    Function, Name, ObjectType, ScopeArena, ScopeId, Source, Span, StringInterner, Type, Variable,
};
use rustc_hash::FxHashSet;

use crate::{SemanticError, TypeRegistry};

type CheckResult<T = ()> = Result<T, SemanticError>;

/// What a `RETURN` in the method being analyzed must produce.
enum ReturnType {
    Declared(Type),
    /// No annotation: the first `RETURN` fixes the type.
    Inferred(Option<Type>),
}

/// Resolves names and checks types over a [`Source`], filling its slots.
pub struct Analyzer<'a> {
    interner: &'a StringInterner,
    registry: TypeRegistry,
    scopes: ScopeArena<Variable, Function>,
    globals: ScopeId,
    scope: ScopeId,
    returns: ReturnType,
    /// Program methods, keyed by `(name, arity)`, whose return type is
    /// still unknown. Calling one defers the calling body.
    pending: FxHashSet<(Name, usize)>,
}

impl<'a> Analyzer<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        let mut scopes = ScopeArena::new();
        let prelude = ScopeId::PRELUDE;

        let print = interner.intern("print");
        scopes.define_function(
            prelude,
            print,
            1,
            Function {
                name: print,
                params: vec![Type::Any],
                ret: Type::Nil,
            },
        );
        let range = interner.intern("range");
        scopes.define_function(
            prelude,
            range,
            2,
            Function {
                name: range,
                params: vec![Type::Integer, Type::Integer],
                ret: Type::IntegerIterable,
            },
        );

        Analyzer {
            interner,
            registry: TypeRegistry::new(interner),
            scopes,
            globals: ScopeId::GLOBALS,
            scope: ScopeId::GLOBALS,
            returns: ReturnType::Declared(Type::Any),
            pending: FxHashSet::default(),
        }
    }

    /// Make a host object type nameable in annotations.
    pub fn register_type(&mut self, object: ObjectType) -> Type {
        self.registry.register(object)
    }

    /// Declare a host-provided global variable.
    pub fn define_global(&mut self, name: Name, ty: Type) {
        self.scopes
            .define_variable(self.globals, name, Variable { name, ty });
    }

    /// Declare a host-provided global function.
    pub fn define_function(&mut self, name: Name, params: Vec<Type>, ret: Type) {
        let arity = params.len();
        self.scopes
            .define_function(self.globals, name, arity, Function { name, params, ret });
    }

    /// Analyze `source`, writing every resolution slot.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn analyze(&mut self, source: &mut Source) -> CheckResult {
        let mark = self.scopes.scope_count();
        self.scope = self
            .scopes
            .alloc(Some(self.globals))
            .map_err(|e| SemanticError::scope_overflow(&e, Span::DUMMY))?;
        let result = self.check_source(source);
        self.scope = self.globals;
        self.scopes.truncate(mark);
        self.pending.clear();
        result
    }

    /// Run `f` in a fresh child of the current scope, released afterwards.
    fn in_child_scope<T>(
        &mut self,
        span: Span,
        f: impl FnOnce(&mut Self) -> CheckResult<T>,
    ) -> CheckResult<T> {
        let saved = self.scope;
        let mark = self.scopes.scope_count();
        self.scope = self
            .scopes
            .alloc(Some(saved))
            .map_err(|e| SemanticError::scope_overflow(&e, span))?;
        let result = f(self);
        self.scope = saved;
        self.scopes.truncate(mark);
        result
    }

    fn resolve_type_name(&self, name: Name, span: Span) -> CheckResult<Type> {
        self.registry
            .resolve(name)
            .cloned()
            .ok_or_else(|| SemanticError::unknown_type(self.text(name), span))
    }

    #[inline]
    fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}
