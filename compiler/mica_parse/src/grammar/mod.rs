//! Grammar productions, one `impl Parser` block per area.
//!
//! - `item.rs`: source, fields, methods, type annotations
//! - `stmt.rs`: statements and block bodies
//! - `expr/`: the binary precedence chain, member access, primaries

mod expr;
mod item;
mod stmt;
