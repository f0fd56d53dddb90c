use std::fmt;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use log::{debug, info};

use super::error::LoadError;
use crate::quake;

pub const SYMBOL: &[u8] = b"Q_rsqrt";
/// Overrides the shared library path.
pub const LIBRARY_ENV: &str = "QRSQRT_NATIVE_LIB";
pub const LIBRARY_NAME: &str = "qrsqrt_native";

/// The three square-root routines under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Native,
    Quake,
    /// `Q_rsqrt` resolved from the shared library, times the input.
    External,
}

impl Provider {
    /// Pass order. The reference always runs first.
    pub const ALL: [Provider; 3] = [Provider::Native, Provider::Quake, Provider::External];
    pub const APPROXIMATIONS: [Provider; 2] = [Provider::Quake, Provider::External];

    pub fn name(self) -> &'static str {
        match self {
            Provider::Native => "Native",
            Provider::Quake => "Quake",
            Provider::External => "External",
        }
    }

    pub fn is_reference(self) -> bool {
        self == Provider::Native
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline(never)]
pub fn native_sqrt(x: f32) -> f32 {
    x.sqrt()
}

#[inline(never)]
pub fn quake_sqrt(x: f32) -> f32 {
    quake::fast_sqrt(x)
}

/// A reciprocal square root reachable from outside this crate.
///
/// The harness multiplies the returned value by the input, the same way
/// [`quake::fast_sqrt`] finishes [`quake::q_rsqrt`].
pub trait ExternalRsqrt {
    fn q_rsqrt(&self, x: f32) -> f32;
}

impl<F> ExternalRsqrt for F
where
    F: Fn(f32) -> f32,
{
    fn q_rsqrt(&self, x: f32) -> f32 {
        self(x)
    }
}

type RsqrtFn = unsafe extern "C" fn(f32) -> f32;

/// `Q_rsqrt` resolved from a shared library that stays loaded for the
/// lifetime of this value.
pub struct NativeLibrary {
    q_rsqrt: RsqrtFn,
    path: PathBuf,
    _lib: Library,
}

impl NativeLibrary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        // SAFETY: loading runs the library's initialisers; the qrsqrt-native
        // cdylib has none beyond the Rust runtime's.
        let lib = unsafe { Library::new(&path) }.map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        // SAFETY: the symbol is declared `extern "C" fn(f32) -> f32` by the
        // library; the copied pointer is only called while `_lib` is alive.
        let q_rsqrt = unsafe {
            let sym: Symbol<RsqrtFn> = lib.get(SYMBOL).map_err(|source| LoadError::Symbol {
                path: path.clone(),
                source,
            })?;
            *sym
        };
        info!("Using Q_rsqrt from {}", path.display());
        Ok(Self {
            q_rsqrt,
            path,
            _lib: lib,
        })
    }

    /// Resolves the library path: `explicit`, then [`LIBRARY_ENV`], then the
    /// platform file name next to the running executable or one directory up
    /// (test and bench binaries live in `target/<profile>/deps`).
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, LoadError> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(value) = std::env::var(LIBRARY_ENV) {
            let value = value.trim();
            if !value.is_empty() {
                return Ok(PathBuf::from(value));
            }
        }

        let exe = std::env::current_exe().map_err(LoadError::CurrentExe)?;
        let file_name = libloading::library_filename(LIBRARY_NAME);
        let mut searched = Vec::new();
        let mut dir = exe.parent();
        for _ in 0..2 {
            let Some(d) = dir else {
                break;
            };
            let candidate = d.join(&file_name);
            debug!("looking for {}", candidate.display());
            if candidate.exists() {
                return Ok(candidate);
            }
            searched.push(candidate);
            dir = d.parent();
        }
        Err(LoadError::NotFound { searched })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExternalRsqrt for NativeLibrary {
    #[inline]
    fn q_rsqrt(&self, x: f32) -> f32 {
        // SAFETY: see `load`; `Q_rsqrt` is total over f32 bit patterns.
        unsafe { (self.q_rsqrt)(x) }
    }
}

impl fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
