/*!
## Rust Machine Module

This Rust module executes tokenized statements against the variable
environment and drives stored programs through the run loop.

*/

mod console;
mod exec;
mod listing;
mod operation;
mod program;
mod runtime;
mod val;
mod var;

pub use console::Console;
pub use exec::execute;
pub use exec::Exec;
pub use exec::Signal;
pub use listing::Listing;
pub use operation::Operation;
pub use program::Program;
pub use runtime::run;
pub use runtime::run_from;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
