// crates/ports/src/loader.rs
use std::path::Path;

use load_all_shared_kernel::Result;

/// Port resolving an absolute directory path to a value.
///
/// Ownership of the returned value moves to the caller. Implementations decide
/// what "loading" means (parsing a manifest, a registry lookup, ...).
pub trait ModuleLoader: Send + Sync {
    type Output;

    fn load(&self, path: &Path) -> Result<Self::Output>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for &L {
    type Output = L::Output;

    fn load(&self, path: &Path) -> Result<Self::Output> {
        (**self).load(path)
    }
}
