mod dashboard;
mod employee;
mod onboarding;
mod pto;
mod workflow;

pub use dashboard::*;
pub use employee::*;
pub use onboarding::*;
pub use pto::*;
pub use workflow::*;
