pub mod guardian;
pub mod student;
pub mod submission;

pub use guardian::{GuardianContact, ResolvedStudent};
pub use student::{GuardianSubRecord, LookupKey, PrimaryStudentRecord, ReEnrollmentRecord};
pub use submission::{Attachment, EnrollmentKind, SubmissionRecord};
