mod catalogue;
mod runner;

pub use catalogue::{
    Expectation, HEALTH_PREVIEW_CHARS, Scenario, ScenarioId, core_suite, extended_suite, plan,
};
pub use runner::{PASS_LINE, RunReport, Runner};
