//! Parent-linked binding environments.
//!
//! Scopes live in a stack-like [`ScopeArena`] and refer to their parent by
//! [`ScopeId`], so a child is always allocated after its parent and the
//! chain can never be cyclic. Every arena starts with two roots:
//! [`ScopeId::PRELUDE`] and its child [`ScopeId::GLOBALS`]. Scopes allocated
//! after a mark can be released with [`ScopeArena::truncate`] once no handle
//! to them survives.
//!
//! The arena is generic over what a binding stores: the analyzer
//! instantiates it with types and signatures, the interpreter with values
//! and callables.

use std::fmt;

use rustc_hash::FxHashMap;

use super::Name;

/// Handle to a scope in a [`ScopeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Root scope holding the built-ins.
    pub const PRELUDE: ScopeId = ScopeId(0);
    /// Child of the prelude holding host definitions.
    pub const GLOBALS: ScopeId = ScopeId(1);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error when a scope cannot be allocated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// The arena already holds `u32::MAX` scopes.
    Overflow { count: usize },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::Overflow { count } => write!(
                f,
                "scope arena holds {count} scopes, max is {} (0x{:X})",
                u32::MAX,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for ScopeError {}

struct Scope<V, F> {
    parent: Option<ScopeId>,
    variables: FxHashMap<Name, V>,
    functions: FxHashMap<(Name, usize), F>,
}

/// Arena of scopes. Variables are keyed by name, functions by `(name, arity)`.
pub struct ScopeArena<V, F> {
    scopes: Vec<Scope<V, F>>,
}

impl<V, F> Scope<V, F> {
    fn new(parent: Option<ScopeId>) -> Self {
        Scope {
            parent,
            variables: FxHashMap::default(),
            functions: FxHashMap::default(),
        }
    }
}

/// Number of root scopes every arena starts with.
const ROOTS: usize = 2;

impl<V, F> ScopeArena<V, F> {
    /// An arena holding only the prelude and globals scopes.
    pub fn new() -> Self {
        ScopeArena {
            scopes: vec![Scope::new(None), Scope::new(Some(ScopeId::PRELUDE))],
        }
    }

    /// Create a new empty scope under `parent`.
    pub fn alloc(&mut self, parent: Option<ScopeId>) -> Result<ScopeId, ScopeError> {
        let count = self.scopes.len();
        let raw = u32::try_from(count).map_err(|_| ScopeError::Overflow { count })?;
        self.scopes.push(Scope::new(parent));
        Ok(ScopeId(raw))
    }

    /// Release every scope allocated since the arena held `len` scopes.
    ///
    /// Handles to released scopes must not be used again. The two roots are
    /// never released.
    pub fn truncate(&mut self, len: usize) {
        self.scopes.truncate(len.max(ROOTS));
    }

    #[inline]
    #[track_caller]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Bind `name` in `scope` itself, replacing any binding already there
    /// and shadowing any in an ancestor.
    #[track_caller]
    pub fn define_variable(&mut self, scope: ScopeId, name: Name, value: V) {
        self.scopes[scope.index()].variables.insert(name, value);
    }

    /// Find `name`, walking from `scope` up to the root.
    pub fn lookup_variable(&self, scope: ScopeId, name: Name) -> Option<&V> {
        self.chain(scope)
            .find_map(|s| self.scopes[s.index()].variables.get(&name))
    }

    #[track_caller]
    pub fn define_function(&mut self, scope: ScopeId, name: Name, arity: usize, function: F) {
        self.scopes[scope.index()]
            .functions
            .insert((name, arity), function);
    }

    /// Find the `(name, arity)` function, walking from `scope` up to the root.
    pub fn lookup_function(&self, scope: ScopeId, name: Name, arity: usize) -> Option<&F> {
        self.chain(scope)
            .find_map(|s| self.scopes[s.index()].functions.get(&(name, arity)))
    }

    /// Iterate `scope` and its ancestors, innermost first.
    pub fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |s| self.scopes[s.index()].parent)
    }

    /// Number of live scopes, roots included.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

impl<V, F> Default for ScopeArena<V, F> {
    fn default() -> Self {
        Self::new()
    }
}
