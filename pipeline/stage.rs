//! Process pipelines: stages connected stdout to stdin, the last
//! optionally writing to a file, all running at once.

use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::QueryError;

/// One process invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stage {
    pub program: String,
    pub args: Vec<String>,
}

impl Stage {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Run with inherited standard streams and wait for it to finish.
    pub fn run(&self) -> Result<ExitStatus, QueryError> {
        self.command()
            .status()
            .map_err(|source| QueryError::Launch {
                program: self.program.clone(),
                source,
            })
    }
}

/// Quote a word for display the way a POSIX shell would need it.
fn shell_word(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+%@".contains(c));
    if plain {
        String::from(word)
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_word(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_word(arg))?;
        }
        Ok(())
    }
}

/// Stages whose standard output feeds the next stage's standard input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
    /// File overwritten with the last stage's output.
    pub output: Option<PathBuf>,
}

impl Pipeline {
    pub fn new(stages: impl IntoIterator<Item = Stage>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
            output: None,
        }
    }

    pub fn then(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Launch every stage and wait for all of them. What the stages
    /// do with their input is their own business: a stage that runs
    /// but fails shows up only in its exit status.
    pub fn run(&self) -> Result<Vec<(String, ExitStatus)>, QueryError> {
        let mut output = match &self.output {
            Some(path) => Some(File::create(path).map_err(|source| QueryError::Datastore {
                path: path.clone(),
                source,
            })?),
            None => None,
        };

        let mut children: Vec<(String, Child)> = Vec::with_capacity(self.stages.len());
        let mut upstream = None;
        for (i, stage) in self.stages.iter().enumerate() {
            let mut command = stage.command();
            if let Some(stdout) = upstream.take() {
                command.stdin(Stdio::from(stdout));
            }
            if i + 1 < self.stages.len() {
                command.stdout(Stdio::piped());
            } else if let Some(file) = output.take() {
                command.stdout(Stdio::from(file));
            }
            match command.spawn() {
                Ok(mut child) => {
                    upstream = child.stdout.take();
                    children.push((stage.program.clone(), child));
                }
                Err(source) => {
                    drop(upstream);
                    for (_, mut child) in children {
                        let _ = child.wait();
                    }
                    return Err(QueryError::Launch {
                        program: stage.program.clone(),
                        source,
                    });
                }
            }
        }

        children
            .into_iter()
            .map(|(program, mut child)| match child.wait() {
                Ok(status) => Ok((program, status)),
                Err(source) => Err(QueryError::Launch { program, source }),
            })
            .collect()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{stage}")?;
        }
        if let Some(path) = &self.output {
            write!(f, " > {}", shell_word(&path.to_string_lossy()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let pipeline = Pipeline::new([
            Stage::new("lparse").arg("--true-negation").arg("blocks world.lp"),
            Stage::new("smodels"),
        ])
        .then(Stage::new("qs-extract").arg("--solver=smodels"))
        .to_file("/tmp/qsystem_data.pl");
        assert_eq!(
            pipeline.to_string(),
            "lparse --true-negation 'blocks world.lp' | smodels \
             | qs-extract --solver=smodels > /tmp/qsystem_data.pl"
        );
        assert_eq!(Pipeline::default().to_string(), "", "empty");
    }

    #[test]
    fn shell_words() {
        assert_eq!(shell_word("a.lp"), "a.lp");
        assert_eq!(shell_word(""), "''");
        assert_eq!(shell_word("['a','b']."), r"'['\''a'\'','\''b'\''].'");
    }

    #[test]
    fn launch_failure() {
        let pipeline = Pipeline::new([Stage::new("qsystem-no-such-program")]);
        assert!(matches!(
            pipeline.run(),
            Err(QueryError::Launch { program, .. }) if program == "qsystem-no-such-program"
        ));
    }

    #[test]
    fn unwritable_output() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let pipeline = Pipeline::new([Stage::new("qsystem-no-such-program")])
            .to_file(dir.path().join("missing").join("data.pl"));
        assert!(
            matches!(pipeline.run(), Err(QueryError::Datastore { .. })),
            "output is opened before anything is launched"
        );
    }

    #[cfg(unix)]
    #[test]
    fn connected() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents that should disappear\n").expect("write");
        let statuses = Pipeline::new([
            Stage::new("printf").arg("a b c"),
            Stage::new("tr").arg(" ").arg("\n"),
        ])
        .to_file(&path)
        .run()
        .expect("printf | tr");
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|(_, status)| status.success()));
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "a\nb\nc",
            "output overwritten"
        );
    }
}
