//! Method-level runtime reflection.
//!
//! Rust has no built-in method introspection, so types opt in: put
//! `#[reflect_methods]` (from `wiregizmo-macro`) on an inherent impl block and
//! every `pub fn` in it is recorded, in declaration order, as a
//! [`MethodInfo`]. The listing helpers then dump those methods as text, the
//! way a debugger console would.
//!
//! ```ignore
//! struct Turret;
//!
//! #[reflect_methods]
//! impl Turret {
//!     pub fn aim(&mut self, yaw: f32) {}
//!     pub fn fire(&self) -> bool { true }
//! }
//!
//! assert_eq!(methods_of_type::<Turret>(false), "aim\nfire\n");
//! assert_eq!(methods_of_object(&Turret, true), "fn aim(&mut self, yaw: f32)\nfn fire(&self) -> bool\n");
//! ```

mod registry;

use std::fmt;

pub use registry::{ReflectError, ReflectResult, TypeRegistry};

/// Description of one reflected method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    /// Method name (e.g. `"advance_tick"`).
    pub name: &'static str,
    /// Full signature without visibility (e.g. `"fn advance_tick(&self, delta_seconds: f32)"`).
    pub signature: &'static str,
}

impl MethodInfo {
    pub const fn new(name: &'static str, signature: &'static str) -> Self {
        Self { name, signature }
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature)
    }
}

/// Static reflection data of a type.
///
/// Generated by `#[reflect_methods]`; can also be implemented by hand.
pub trait ReflectType {
    /// The type name as a static string (e.g. `"DebugDrawer"`).
    const NAME: &'static str;
    /// Public methods in declaration order.
    const METHODS: &'static [MethodInfo];
}

/// Object-safe view of [`ReflectType`], for inspecting values whose concrete
/// type is not known statically.
pub trait Reflect {
    fn type_name(&self) -> &'static str;
    fn methods(&self) -> &'static [MethodInfo];
}

impl<T: ReflectType> Reflect for T {
    fn type_name(&self) -> &'static str {
        T::NAME
    }

    fn methods(&self) -> &'static [MethodInfo] {
        T::METHODS
    }
}

/// List the methods of `obj`'s type, one per line.
///
/// With `include_info` each line is the full signature, otherwise just the
/// name. Every line, including the last, ends with `'\n'`.
pub fn methods_of_object(obj: &dyn Reflect, include_info: bool) -> String {
    format_methods(obj.methods(), include_info)
}

/// List the methods of `T`, one per line. See [`methods_of_object`].
pub fn methods_of_type<T: ReflectType>(include_info: bool) -> String {
    format_methods(T::METHODS, include_info)
}

pub(crate) fn format_methods(methods: &[MethodInfo], include_info: bool) -> String {
    let mut out = String::new();
    for method in methods {
        if include_info {
            out.push_str(method.signature);
        } else {
            out.push_str(method.name);
        }
        out.push('\n');
    }
    out
}
