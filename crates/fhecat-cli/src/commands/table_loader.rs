use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fhecat_core::{CatalogTable, TableError};
use fhecat_registry::{Registry, builtin_registry};

use super::output::fail;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("{}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

/// Load a literal table from a file, or from stdin when the path is `-`.
pub fn load_table(path: &Path) -> Result<CatalogTable, LoadError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?
    };

    CatalogTable::from_json(&json).map_err(|source| LoadError::Table {
        path: path.to_owned(),
        source,
    })
}

/// The registry for `--table`, or the builtin one. Exits on any failure,
/// printing validation diagnostics first.
pub fn require_registry(path: Option<&Path>, color: bool) -> Cow<'static, Registry> {
    let Some(path) = path else {
        return Cow::Borrowed(builtin_registry());
    };

    let table = match load_table(path) {
        Ok(table) => table,
        Err(e) => fail(&e.to_string(), color),
    };
    match Registry::build(&table) {
        Ok(registry) => Cow::Owned(registry),
        Err(err) => {
            if let Some(diagnostics) = err.diagnostics() {
                eprint!("{}", diagnostics.render_colored(color));
                eprintln!();
            }
            fail(&format!("{}: {}", path.display(), err), color)
        }
    }
}
