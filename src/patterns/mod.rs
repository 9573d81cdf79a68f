//! Self-contained studies of classic design patterns.
//!
//! Each module is a small, tested vignette built around one pattern, kept
//! deliberately independent of the cash machine. The runnable tour lives
//! in the `demos/` directory.

pub mod adapter;
pub mod chain;
pub mod command;
pub mod factory;
pub mod flyweight;
pub mod prototype;
pub mod visitor;
