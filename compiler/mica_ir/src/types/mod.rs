//! Static type descriptors and the payloads of the analyzer's resolution slots.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Name, StringInterner};

/// Nominal type tag.
///
/// `Any` and `Comparable` are the two structural supertypes; every other
/// tag is only compatible with itself. Object types compare by name.
#[derive(Clone, Debug)]
pub enum Type {
    Nil,
    Boolean,
    Integer,
    Decimal,
    Character,
    String,
    Any,
    Comparable,
    IntegerIterable,
    Object(Arc<ObjectType>),
}

impl Type {
    /// Source-level name of the type.
    pub fn name(&self, interner: &StringInterner) -> &'static str {
        match self {
            Type::Nil => "Nil",
            Type::Boolean => "Boolean",
            Type::Integer => "Integer",
            Type::Decimal => "Decimal",
            Type::Character => "Character",
            Type::String => "String",
            Type::Any => "Any",
            Type::Comparable => "Comparable",
            Type::IntegerIterable => "IntegerIterable",
            Type::Object(object) => interner.lookup(object.name),
        }
    }

    /// Member table, present only for object types.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Object(a), Type::Object(b)) => a.name == b.name,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Type {}

/// A user-defined type: a name plus the variables and methods reachable
/// through a receiver of that type.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub name: Name,
    fields: FxHashMap<Name, Variable>,
    methods: FxHashMap<(Name, usize), Function>,
}

impl ObjectType {
    pub fn new(name: Name) -> Self {
        ObjectType {
            name,
            fields: FxHashMap::default(),
            methods: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: Name, ty: Type) -> Self {
        self.fields.insert(name, Variable { name, ty });
        self
    }

    #[must_use]
    pub fn with_method(mut self, name: Name, params: Vec<Type>, ret: Type) -> Self {
        self.methods
            .insert((name, params.len()), Function { name, params, ret });
        self
    }

    pub fn field(&self, name: Name) -> Option<&Variable> {
        self.fields.get(&name)
    }

    pub fn method(&self, name: Name, arity: usize) -> Option<&Function> {
        self.methods.get(&(name, arity))
    }
}

/// A resolved variable: what an `Access` or declaration is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: Name,
    pub ty: Type,
}

/// A resolved function signature: what a `Call` or method is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: Name,
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Function {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
