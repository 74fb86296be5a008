//! Input syntax trees as handed over by the host.

use crate::Error;

///
/// SourceTree
///
/// One parsed compilation input. The host supplies the tree's name (used in
/// logs and errors only) and the crate-relative module path under which the
/// tree's top-level items live; both are opaque to the scanner.
///

#[derive(Debug)]
pub struct SourceTree {
    name: String,
    module_path: Vec<String>,
    file: syn::File,
}

impl SourceTree {
    /// Parse raw source text into a tree.
    pub fn parse(
        name: impl Into<String>,
        module_path: Vec<String>,
        source: &str,
    ) -> Result<Self, Error> {
        let name = name.into();
        let file = syn::parse_file(source).map_err(|source| Error::Parse {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            module_path,
            file,
        })
    }

    /// Wrap an already parsed file.
    #[must_use]
    pub const fn from_file(name: String, module_path: Vec<String>, file: syn::File) -> Self {
        Self {
            name,
            module_path,
            file,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn module_path(&self) -> &[String] {
        &self.module_path
    }

    #[must_use]
    pub const fn file(&self) -> &syn::File {
        &self.file
    }
}
