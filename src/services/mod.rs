pub mod attachment;
pub mod guardian_resolver;
pub mod submission_service;
pub mod submission_validator;

pub use attachment::load_attachment;
pub use guardian_resolver::{pick_guardian, GuardianChoice, GuardianPick, GuardianResolver, PickReason};
pub use submission_service::SubmissionService;
pub use submission_validator::validate;
