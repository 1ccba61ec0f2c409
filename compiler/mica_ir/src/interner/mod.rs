//! String interner for identifiers and type names.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

struct InternTable {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Maps identifier text to [`Name`] handles and back.
///
/// Interned strings are leaked, so [`lookup`](Self::lookup) hands out
/// `&'static str` without holding the lock. A compilation interns a few
/// hundred names at most.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the empty string and the language's
    /// well-known names already interned.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", Name::EMPTY);
        let interner = StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![""],
            }),
        };
        for known in ["main", "print", "range"] {
            interner.intern(known);
        }
        interner
    }

    /// Intern `s`, returning the existing handle if it was seen before.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(s) {
            return name;
        }

        let mut table = self.table.write();
        if let Some(&name) = table.map.get(s) {
            return name;
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let raw = u32::try_from(table.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded u32::MAX entries"));
        let name = Name::from_raw(raw);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        name
    }

    /// Text of an interned name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings.get(name.index()).copied().unwrap_or("")
    }

    /// Look up the handle for `s` without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// True when only the empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
