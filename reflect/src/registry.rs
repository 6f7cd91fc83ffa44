use std::collections::HashMap;

use thiserror::Error;

use crate::{MethodInfo, ReflectType, format_methods};

/// Errors from looking up types by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    #[error("Type `{0}` is not registered")]
    UnknownType(String),
    #[error("Type `{0}` is already registered")]
    DuplicateType(&'static str),
}

pub type ReflectResult<T> = Result<T, ReflectError>;

/// Name-keyed registry of reflected types.
///
/// Lets tools list the methods of a type chosen at runtime, for instance
/// from a console command, where [`methods_of_type`](crate::methods_of_type)
/// needs the type statically.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Registered type names, in registration order.
    names: Vec<&'static str>,
    methods: HashMap<&'static str, &'static [MethodInfo]>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its [`ReflectType::NAME`].
    pub fn register<T: ReflectType>(&mut self) -> ReflectResult<()> {
        if self.methods.contains_key(T::NAME) {
            return Err(ReflectError::DuplicateType(T::NAME));
        }
        log::debug!(
            "Registered reflected type {} ({} methods)",
            T::NAME,
            T::METHODS.len()
        );
        self.names.push(T::NAME);
        self.methods.insert(T::NAME, T::METHODS);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered type names, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Methods of the type registered as `name`.
    pub fn methods(&self, name: &str) -> ReflectResult<&'static [MethodInfo]> {
        self.methods
            .get(name)
            .copied()
            .ok_or_else(|| ReflectError::UnknownType(name.to_owned()))
    }

    /// List the methods of the type registered as `name`, one per line.
    /// See [`methods_of_object`](crate::methods_of_object).
    pub fn methods_of_type_name(&self, name: &str, include_info: bool) -> ReflectResult<String> {
        Ok(format_methods(self.methods(name)?, include_info))
    }
}
