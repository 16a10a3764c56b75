//! Writes small integer-pair test-case files into `<root>/testcase/` for a
//! judge harness.

pub mod console;
pub mod emit;
pub mod housekeeping;
pub mod plan;
pub mod run;
pub mod session;

pub use plan::{Plan, Variant};
pub use run::{RunOptions, run_plan};
pub use session::Session;
