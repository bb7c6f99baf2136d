//! Where the query system's modules live, and what they are called.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::QueryError;

/// Environment variable naming the base directory.
pub const BASE_DIR_VAR: &str = "QSYSTEM";

/// Operating system family, for the few invocations that differ.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The name under which an executable is found on this platform.
    pub fn executable(self, name: &str) -> String {
        match self {
            Self::Unix => String::from(name),
            Self::Windows => format!("{name}.exe"),
        }
    }
}

/// The files making up a query system installation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Module {
    /// Model extraction stage.
    Extractor,
    /// Literal normalization stage.
    Normalizer,
    /// Facts written by the normalizer.
    Datastore,
    /// Prolog queries over the datastore.
    Queries,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub base: PathBuf,
    pub platform: Platform,
}

impl Config {
    pub fn new(base: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            base: base.into(),
            platform,
        }
    }

    /// Read the base directory from the environment.
    pub fn from_env() -> Result<Self, QueryError> {
        Self::from_var(env::var_os(BASE_DIR_VAR))
    }

    fn from_var(base: Option<OsString>) -> Result<Self, QueryError> {
        match base {
            Some(base) if !base.is_empty() => Ok(Self::new(base, Platform::current())),
            _ => Err(QueryError::MissingBaseDir(BASE_DIR_VAR)),
        }
    }

    /// The installed location of a module.
    pub fn module(&self, module: Module) -> PathBuf {
        let name = match module {
            Module::Extractor => self.platform.executable("qs-extract"),
            Module::Normalizer => self.platform.executable("qs-prep"),
            Module::Datastore => String::from("qsystem_data.pl"),
            Module::Queries => String::from("general_queries.pl"),
        };
        self.base.join(name)
    }

    pub fn datastore(&self) -> PathBuf {
        self.module(Module::Datastore)
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    #[test]
    fn modules() {
        let unix = Config::new("/opt/qsystem", Platform::Unix);
        assert_eq!(
            unix.module(Module::Extractor),
            Path::new("/opt/qsystem/qs-extract")
        );
        assert_eq!(
            unix.module(Module::Normalizer),
            Path::new("/opt/qsystem/qs-prep")
        );
        assert_eq!(unix.datastore(), Path::new("/opt/qsystem/qsystem_data.pl"));
        assert_eq!(
            unix.module(Module::Queries),
            Path::new("/opt/qsystem/general_queries.pl")
        );

        let windows = Config::new("/opt/qsystem", Platform::Windows);
        assert_eq!(
            windows.module(Module::Normalizer),
            Path::new("/opt/qsystem/qs-prep.exe"),
            "stage executables need a suffix"
        );
        assert_eq!(windows.datastore(), unix.datastore(), "data files do not");
    }

    #[test]
    fn missing_base() {
        assert!(matches!(
            Config::from_var(None),
            Err(QueryError::MissingBaseDir("QSYSTEM"))
        ));
        assert!(
            Config::from_var(Some(OsString::new())).is_err(),
            "empty is missing"
        );
        assert_eq!(
            Config::from_var(Some(OsString::from("/q"))).ok().map(|c| c.base),
            Some(PathBuf::from("/q"))
        );
    }
}
