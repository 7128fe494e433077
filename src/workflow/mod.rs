pub mod enrollment_flow;
pub mod wizard;

pub use enrollment_flow::EnrollmentFlow;
pub use wizard::{Wizard, WizardState};
