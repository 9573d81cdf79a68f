//! Building new values by cloning a sample.
//!
//! The factory never names a concrete constructor; anything `Clone` can
//! serve as the prototype, and every clone is an independent owned value.

use std::fmt;

/// Hands out independent copies of whatever sample it is given.
#[derive(Default)]
pub struct CloneFactory;

impl CloneFactory {
    pub fn new() -> Self {
        Self
    }

    /// A fresh, fully independent copy of `sample`.
    pub fn clone_of<T: Clone>(&self, sample: &T) -> T {
        sample.clone()
    }
}

/// The classic prototype specimen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheep {
    pub name: String,
}

impl Sheep {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Sheep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello I'm a sheep called {}", self.name)
    }
}
