//! Attribute-driven source generation for observable properties.
//!
//! `notifygen` scans parsed Rust syntax trees for struct fields carrying the
//! `#[observable]` marker and emits, per containing type, a companion source
//! unit that turns each marked field into a property: a getter over the
//! backing field and a setter that only assigns and raises a change
//! notification when the incoming value differs from the stored one.
//!
//! The pipeline is a single batch pass:
//!
//! ```text
//! scan -> semantic -> group -> (naming + emit) -> sink
//! ```
//!
//! Each stage is a pure function of its input; re-running the pass on
//! unchanged trees produces byte-identical output, which is what makes the
//! generated units safe to cache on hint key.
//!
//! ```
//! use notifygen::prelude::*;
//!
//! let tree = SourceTree::parse(
//!     "person.rs",
//!     vec!["demo".to_string()],
//!     r#"
//!         pub struct Person {
//!             #[observable]
//!             _name: String,
//!         }
//!     "#,
//! )
//! .unwrap();
//!
//! let (units, report) = run_to_vec(&[tree]);
//! assert_eq!(report.resolved, 1);
//! // support unit plus one container unit
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[1].hint, "demo.Person.g.rs");
//! ```

pub mod emit;
pub mod group;
pub mod marker;
pub mod naming;
pub mod pipeline;
pub mod scan;
pub mod semantic;
pub mod tree;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        emit::GeneratedUnit,
        group::{ContainerGroup, Diagnostic},
        pipeline::{GeneratorSink, Report, run, run_to_vec},
        semantic::{ContainerKey, ResolvedField, SemanticModel},
        tree::SourceTree,
    };
}

///
/// Error
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to parse source tree '{name}': {source}")]
    Parse { name: String, source: syn::Error },
}
