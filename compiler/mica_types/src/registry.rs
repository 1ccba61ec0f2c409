//! Type names visible to annotations.

use std::sync::Arc;

use mica_ir::{Name, ObjectType, StringInterner, Type};
use rustc_hash::FxHashMap;

/// Maps annotation names to types: the built-in scalars plus any
/// host-registered object types.
pub struct TypeRegistry {
    types: FxHashMap<Name, Type>,
}

impl TypeRegistry {
    const BUILTINS: [Type; 9] = [
        Type::Any,
        Type::Nil,
        Type::Comparable,
        Type::Boolean,
        Type::Integer,
        Type::Decimal,
        Type::Character,
        Type::String,
        Type::IntegerIterable,
    ];

    pub fn new(interner: &StringInterner) -> Self {
        let types = Self::BUILTINS
            .into_iter()
            .map(|ty| (interner.intern(ty.name(interner)), ty))
            .collect();
        TypeRegistry { types }
    }

    /// Make `object` nameable in annotations, replacing any earlier type
    /// with the same name.
    pub fn register(&mut self, object: ObjectType) -> Type {
        let name = object.name;
        let ty = Type::Object(Arc::new(object));
        self.types.insert(name, ty.clone());
        ty
    }

    pub fn resolve(&self, name: Name) -> Option<&Type> {
        self.types.get(&name)
    }
}
