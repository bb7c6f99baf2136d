//! Prolog interpreters that can consult the datastore.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::config::Platform;
use crate::stage::Stage;

/// Requested a Prolog interpreter we know nothing about.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{0} is an undefined prolog interpreter")]
pub struct UnknownInterpreter(pub String);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Interpreter {
    /// SICStus Prolog.
    Sicstus,
    /// SWI-Prolog.
    Swi,
}

impl Interpreter {
    pub const ALL: [Interpreter; 2] = [Interpreter::Sicstus, Interpreter::Swi];

    /// The selection name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sicstus => "sic",
            Self::Swi => "swi",
        }
    }

    /// SWI-Prolog's console executable is named differently on Windows.
    pub fn executable(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (Self::Sicstus, _) => "sicstus",
            (Self::Swi, Platform::Unix) => "swipl",
            (Self::Swi, Platform::Windows) => "plcon",
        }
    }

    /// The flag introducing an initial goal.
    pub fn goal_flag(self) -> &'static str {
        match self {
            Self::Sicstus => "--goal",
            Self::Swi => "-g",
        }
    }

    /// Start the interpreter with a goal that consults `files`.
    pub fn consult<P: AsRef<Path>>(self, platform: Platform, files: &[P]) -> Stage {
        Stage::new(self.executable(platform))
            .arg(self.goal_flag())
            .arg(consult_goal(files))
    }
}

impl FromStr for Interpreter {
    type Err = UnknownInterpreter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| UnknownInterpreter(String::from(s)))
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A file name as a quoted Prolog atom. Backslashes become forward
/// slashes, which every supported interpreter accepts.
fn file_atom(path: &Path) -> String {
    let name = path.to_string_lossy().replace('\\', "/").replace('\'', "''");
    format!("'{name}'")
}

/// `['a.pl','b.pl'].`
pub fn consult_goal<P: AsRef<Path>>(files: &[P]) -> String {
    let atoms: Vec<String> = files.iter().map(|f| file_atom(f.as_ref())).collect();
    format!("[{}].", atoms.join(","))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        assert_eq!("sic".parse::<Interpreter>(), Ok(Interpreter::Sicstus));
        assert_eq!("swi".parse::<Interpreter>(), Ok(Interpreter::Swi));
        assert_eq!(
            "gprolog".parse::<Interpreter>().map_err(|e| e.to_string()),
            Err(String::from("gprolog is an undefined prolog interpreter"))
        );
    }

    #[test]
    fn goal() {
        assert_eq!(
            consult_goal(&["/q/qsystem_data.pl", "/q/general_queries.pl"]),
            "['/q/qsystem_data.pl','/q/general_queries.pl']."
        );
        assert_eq!(
            consult_goal(&[r"C:\qsystem\o'brien.pl"]),
            "['C:/qsystem/o''brien.pl'].",
            "separators and quotes"
        );
    }

    #[test]
    fn invocations() {
        let files = ["d.pl", "q.pl"];
        let goal = String::from("['d.pl','q.pl'].");
        assert_eq!(
            Interpreter::Sicstus.consult(Platform::Unix, &files),
            Stage {
                program: String::from("sicstus"),
                args: vec![String::from("--goal"), goal.clone()],
            }
        );
        assert_eq!(
            Interpreter::Sicstus.consult(Platform::Windows, &files).program,
            "sicstus"
        );
        assert_eq!(
            Interpreter::Swi.consult(Platform::Unix, &files),
            Stage {
                program: String::from("swipl"),
                args: vec![String::from("-g"), goal.clone()],
            }
        );
        assert_eq!(
            Interpreter::Swi.consult(Platform::Windows, &files),
            Stage {
                program: String::from("plcon"),
                args: vec![String::from("-g"), goal],
            }
        );
    }
}
