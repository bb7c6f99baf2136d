//! A trivial tracing facility: each stage of the query system
//! may be told to report what it is doing on standard error.

use std::str::FromStr;

use bitmask_enum::bitmask;

#[bitmask]
pub enum Trace {
    Extract,
    Normalize,
    Pipeline,
}

impl FromStr for Trace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::all_flags()),
            "extract" => Ok(Self::Extract),
            "normalize" => Ok(Self::Normalize),
            "pipeline" => Ok(Self::Pipeline),
            _ => Err(format!("unknown trace level `{s}`")),
        }
    }
}

/// Collapse any number of requested trace levels into one set.
pub fn levels(requested: &[Trace]) -> Trace {
    requested.iter().fold(Trace::none(), |acc, &t| acc | t)
}

#[macro_export]
macro_rules! trace {
    ($trace:expr, $level:ident, $fmt:literal $(,)? $($arg:expr),* $(,)?) => {
        if $trace.intersects($crate::Trace::$level) {
            eprintln!($fmt, $($arg),*);
        }
    }
}
