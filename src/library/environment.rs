//! The assembled environment and the variables of one evaluation.

use super::{FunctionDecl, Library, VariableDecl, build_variables};
use crate::config::{LibraryConfig, Validatable};
use crate::error::{ExprError, Result};
use crate::model::Document;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::path::Path;

/// A library collected into a function registry.
///
/// Calls are dispatched by the runtime types of their arguments; the first
/// overload whose parameter types accept the arguments wins.
#[derive(Debug)]
pub struct Environment {
    library: Library,
    functions: IndexMap<&'static str, FunctionDecl>,
}

impl Environment {
    /// Assemble an environment from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Config`] if the configuration does not validate.
    pub fn new(config: LibraryConfig) -> Result<Self> {
        Self::with_library(Library::new(config))
    }

    /// Assemble an environment from a prepared library.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Config`] if the configuration does not validate
    /// or the library declares a function or overload id twice.
    pub fn with_library(library: Library) -> Result<Self> {
        let errors = library.config().validate();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(ExprError::config(messages.join("; ")));
        }

        let mut functions = IndexMap::new();
        let mut overload_ids = std::collections::HashSet::new();
        for decl in library.functions() {
            for overload in &decl.overloads {
                if !overload_ids.insert(overload.id) {
                    return Err(ExprError::config(format!(
                        "duplicate overload id: {}",
                        overload.id
                    )));
                }
            }
            if functions.contains_key(decl.name) {
                return Err(ExprError::config(format!(
                    "duplicate function: {}",
                    decl.name
                )));
            }
            functions.insert(decl.name, decl);
        }

        tracing::info!(
            library = library.name(),
            functions = functions.len(),
            overloads = overload_ids.len(),
            enable_io = library.config().enable_io,
            "expression environment assembled"
        );

        Ok(Self { library, functions })
    }

    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    #[must_use]
    pub const fn config(&self) -> &LibraryConfig {
        self.library.config()
    }

    /// Variables every activation from this environment binds
    #[must_use]
    pub fn variables(&self) -> Vec<VariableDecl> {
        self.library.variables()
    }

    /// Look up a function declaration by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.get(name)
    }

    /// Function declarations in registration order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.functions.values()
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Call a function with evaluated arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnknownFunction`] for names that are not
    /// registered, [`ExprError::UnsupportedOperand`] when no overload
    /// accepts the argument types, and otherwise whatever the function
    /// returns.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let decl = self
            .functions
            .get(name)
            .ok_or_else(|| ExprError::UnknownFunction(name.to_string()))?;

        // A receiver match with mistyped arguments is left to the function,
        // which reports which argument is wrong.
        let overload = decl
            .resolve(args)
            .or_else(|| decl.overloads.iter().find(|o| o.matches_receiver(args)));
        let Some(overload) = overload else {
            let operands: Vec<&str> = args.iter().map(Value::type_name).collect();
            return Err(ExprError::unsupported_operand(name, operands.join(", ")));
        };

        tracing::trace!(function = name, overload = overload.id, "dispatching call");
        overload.binding.invoke(name, args)
    }

    /// Convert a native value through the library's type adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::TypeConversion`] for values the adapter does
    /// not know.
    pub fn adapt(&self, native: Box<dyn Any>) -> Result<Value> {
        self.library.type_adapter().native_to_value(native)
    }

    /// Build the variables for one evaluation.
    ///
    /// Paths are loaded through the library's loader regardless of
    /// `enable_io`, which only governs `load_sbom`.
    ///
    /// # Errors
    ///
    /// Returns the load error of the first path that fails.
    pub fn activation<P: AsRef<Path>>(
        &self,
        paths: &[P],
        documents: Vec<Document>,
    ) -> Result<Activation> {
        build_variables(self.config(), paths, documents, self.library.loader())
    }
}

/// Variables bound for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct Activation {
    vars: IndexMap<String, Value>,
}

impl Activation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the value it replaces.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Bound names and values in binding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}
