pub mod admin;
pub mod submission;

pub use admin::Admin;
pub use submission::Submission;
