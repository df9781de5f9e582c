use super::SafeArithmetic;
use crate::arith::ArithmeticResult;
use crate::config::{LIBRARY_ENV, LibraryConfig};
use crate::error::{Error, Result};
use crate::ffi::{self, BinaryOpFn, MagicNumberFn};
use libloading::{Library, library_filename};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Calls the exported C symbols of a `cdylib` opened at runtime.
///
/// The function pointers are only valid while `_lib` is loaded, so they never
/// leave this struct.
pub struct SharedBinding {
    path: PathBuf,
    magic_number: MagicNumberFn,
    add_safe: BinaryOpFn,
    sub_safe: BinaryOpFn,
    _lib: Library,
}

impl SharedBinding {
    pub fn open(path: &Path) -> Result<Self> {
        // SAFETY: loading runs the library's initialisers. The library is
        // expected to be this crate built as a cdylib, which has none.
        let lib = unsafe { Library::new(path) }.map_err(|e| Error::library(path, e))?;

        // SAFETY: the declared types match the `extern "C"` definitions in `crate::ffi`.
        let (magic_number, add_safe, sub_safe) = unsafe {
            (
                resolve::<MagicNumberFn>(&lib, ffi::MAGIC_NUMBER_SYMBOL)?,
                resolve::<BinaryOpFn>(&lib, ffi::ADD_SAFE_SYMBOL)?,
                resolve::<BinaryOpFn>(&lib, ffi::SUB_SAFE_SYMBOL)?,
            )
        };

        info!(path = %path.display(), "shared library loaded");
        Ok(Self {
            path: path.to_path_buf(),
            magic_number,
            add_safe,
            sub_safe,
            _lib: lib,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Look up `name` and copy the function pointer out of the symbol.
///
/// # Safety
///
/// `T` must match the type of the exported symbol, and the result must not
/// be used after `lib` is unloaded.
unsafe fn resolve<T: Copy>(lib: &Library, name: &[u8]) -> Result<T> {
    let symbol = unsafe { lib.get::<T>(name) }.map_err(|e| Error::symbol(name, e))?;
    Ok(*symbol)
}

impl SafeArithmetic for SharedBinding {
    fn magic_number(&self) -> i32 {
        // SAFETY: resolved from the library held in `self`.
        unsafe { (self.magic_number)() }
    }

    fn add_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        // SAFETY: resolved from the library held in `self`.
        unsafe { (self.add_safe)(a, b) }.into()
    }

    fn sub_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        // SAFETY: resolved from the library held in `self`.
        unsafe { (self.sub_safe)(a, b) }.into()
    }
}

impl std::fmt::Debug for SharedBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBinding")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Find the shared library to open.
///
/// Order: `library.path`, then `$SAFE_ARITH_LIB`, then the platform file name
/// for `library.name` in each of `library.search_dirs` and finally in the
/// directory of the running executable and its `deps/` subdirectory.
pub fn locate_library(library: &LibraryConfig) -> Result<PathBuf> {
    if let Some(path) = &library.path {
        debug!(path = %path.display(), "using configured library path");
        return Ok(path.clone());
    }
    if let Some(path) = std::env::var_os(LIBRARY_ENV).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(path);
        debug!(path = %path.display(), "using library path from {LIBRARY_ENV}");
        return Ok(path);
    }

    let filename = library_filename(&library.name);
    let mut searched = library.search_dirs.clone();
    if let Some(dir) = std::env::current_exe()?.parent() {
        searched.extend(exe_search_dirs(dir));
    }

    if let Some(found) = find_in(&searched, &filename) {
        debug!(path = %found.display(), "found library");
        return Ok(found);
    }

    Err(Error::LibraryNotFound {
        name: filename.to_string_lossy().into_owned(),
        searched,
    })
}

/// Cargo uplifts a cdylib next to the binaries on `cargo build`, but a plain
/// `cargo test` leaves it in `deps/` only.
fn exe_search_dirs(exe_dir: &Path) -> [PathBuf; 2] {
    [exe_dir.to_path_buf(), exe_dir.join("deps")]
}

fn find_in(dirs: &[PathBuf], filename: &OsStr) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}
