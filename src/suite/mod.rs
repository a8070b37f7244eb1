mod context;
mod expectations;
mod runner;
pub mod steps;

pub use context::{StoryFixture, SuiteContext};
pub use expectations::StepError;
pub use runner::{Step, StepOutcome, StepReport, SuiteReport, run_suite};
