//! Environment assembly.
//!
//! A [`Library`] bundles everything an evaluator needs to know about the
//! SBOM graph: the element types it may encounter, the variables bound
//! into every evaluation, the function table and the type adapter that
//! turns native values into [`Value`](crate::value::Value)s.
//! [`Environment`] collects a library into a callable function registry.
//!
//! ```ignore
//! use protobom_expr::{Environment, LibraryConfig};
//!
//! let env = Environment::new(LibraryConfig::default())?;
//! let activation = env.activation(&[] as &[&str], vec![document])?;
//! let sboms = activation.resolve("sboms").unwrap();
//! let files = env.call("get_files", &[sboms.as_list().unwrap()[0].clone()])?;
//! ```

mod declarations;
mod environment;
mod variables;

pub use declarations::{
    Binding, BinaryFn, FunctionDecl, FunctionFn, Overload, UnaryFn, function_table,
};
pub use environment::{Activation, Environment};
pub use variables::build_variables;

use crate::config::LibraryConfig;
use crate::functions::{DocumentLoader, JsonDocumentLoader};
use crate::value::{ElementType, ProtobomTypeAdapter, TypeAdapter, ValueType};
use std::sync::Arc;

/// Name the library registers under
pub const NAME: &str = "protobom.api";

/// A variable the library binds into every evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub name: String,
    pub ty: ValueType,
}

/// The protobom expression library.
#[derive(Debug, Clone)]
pub struct Library {
    config: LibraryConfig,
    loader: Arc<dyn DocumentLoader>,
    adapter: ProtobomTypeAdapter,
}

impl Library {
    /// Create a library reading documents with [`JsonDocumentLoader`].
    #[must_use]
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            loader: Arc::new(JsonDocumentLoader),
            adapter: ProtobomTypeAdapter::new(),
        }
    }

    /// Replace the document loader.
    #[must_use]
    pub fn with_loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.loader = loader;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        NAME
    }

    #[must_use]
    pub const fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// The loader used for `load_sbom` and for binding documents by path.
    #[must_use]
    pub fn loader(&self) -> &dyn DocumentLoader {
        &*self.loader
    }

    /// Element types registered with the evaluator
    #[must_use]
    pub const fn types(&self) -> &'static [ElementType] {
        ElementType::ALL
    }

    /// Variables bound into every evaluation.
    #[must_use]
    pub fn variables(&self) -> Vec<VariableDecl> {
        vec![
            VariableDecl {
                name: self.config.toolkit_var_name.clone(),
                ty: ValueType::Element(ElementType::Toolkit),
            },
            VariableDecl {
                name: self.config.docs_var_name.clone(),
                ty: ValueType::List,
            },
        ]
    }

    /// Function declarations; `load_sbom` is present only with IO enabled.
    #[must_use]
    pub fn functions(&self) -> Vec<FunctionDecl> {
        let loader = self.config.enable_io.then(|| Arc::clone(&self.loader));
        function_table(loader)
    }

    #[must_use]
    pub fn type_adapter(&self) -> &dyn TypeAdapter {
        &self.adapter
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}
