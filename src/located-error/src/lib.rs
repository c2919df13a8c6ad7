use std::{fmt::Display, panic::Location};

use anyhow::{Context, Result};

/// Public prelude for located-error.
///
/// Re-exports `anyhow` and `thiserror` so downstream crates need only
/// depend on this one for the common error-handling trio.
pub mod prelude {
    extern crate anyhow;
    pub use anyhow::{anyhow, bail, Context, Result};

    extern crate thiserror;
    pub use thiserror::Error;

    pub use super::{loc, LocatedError, LocatedOption};
}

macro_rules! loc_caller {
    ($caller:expr) => {
        format!("[{}:{}:{}]", $caller.file(), $caller.line(), $caller.column())
    };
}

#[macro_export]
macro_rules! loc {
    ($e: expr) => {
        Err(anyhow::anyhow!(format!("[{}:{}:{}] {}", file!(), line!(), column!(), $e)))
    };
}

/// Extends [`Result<T, E>`] with the call-site (file, line, column) of the
/// annotation, folded into the `anyhow::Error` context chain.
///
/// # Example
/// ```should_panic
/// use anyhow::Result;
/// use located_error::LocatedError;
///
/// fn compute(path: &str) -> Result<()> {
///     let _file = std::fs::File::open(path)
///         .with_loc(|| format!("Failed to open file {path}"))?;
///     Ok(())
/// }
///
/// fn main() -> Result<()> {
///     compute("/invalid-file/").loc("While running main function.")?;
///     Ok(())
/// }
/// ```
pub trait LocatedError<T, E> {
    /// Wrap the error value with additional context + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Wrap the error value with context evaluated lazily, only on the error path.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> LocatedError<T, E> for Result<T, E>
where
    E: Display + Send + Sync + 'static,
    Result<T, E>: Context<T, E>,
{
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(_) => {
                let loc = loc_caller!(Location::caller());
                self.context(format!("{loc} {context}"))
            }
        }
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(_) => {
                let caller = std::panic::Location::caller();
                let loc = format!("[{}:{}:{}]", caller.file(), caller.line(), caller.column());
                self.with_context(|| format!("{loc} {}", f()))
            }
        }
    }
}

/// Extends [`Option<T>`] with the same call-site context as [`LocatedError`].
pub trait LocatedOption<T> {
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> LocatedOption<T> for Option<T> {
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Some(ok) => Ok(ok),
            None => {
                let loc = loc_caller!(Location::caller());
                Err(anyhow::anyhow!("{loc} {context}"))
            }
        }
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        match self {
            Some(ok) => Ok(ok),
            None => {
                let caller = std::panic::Location::caller();
                let loc = format!("[{}:{}:{}]", caller.file(), caller.line(), caller.column());
                Err(anyhow::anyhow!("{loc} {}", f()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum BubbleError {
        #[error(transparent)]
        Bloup(#[from] anyhow::Error),
        #[error("Blop")]
        Blop,
    }

    fn error_source(file: &str) -> Result<(), BubbleError> {
        let _ = File::open(file).loc(format!("failed to open file: '{file}'"))?;
        Ok(())
    }

    fn error_bubble_0() -> Result<()> {
        error_source("bloup/").with_loc(|| "Whoops!")
    }

    fn error_bubble_1() -> Result<()> {
        error_bubble_0().with_loc(|| BubbleError::Blop)
    }

    #[test]
    fn print_with_loc_error() -> Result<()> {
        if let Err(err) = error_bubble_1() {
            eprintln!("ERROR: {err:?}");
            assert!(err.chain().count() >= 2);
        } else {
            panic!("expected error");
        }
        Ok(())
    }

    fn none_bubble() -> Option<()> {
        None
    }

    #[test]
    fn missing_option_carries_location() {
        let x = none_bubble().loc(BubbleError::Blop);
        assert!(x.is_err());
        assert!(format!("{x:?}").contains("Blop"));
    }
}
