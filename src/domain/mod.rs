//! Domain logic - pure parsing and version rules independent of git plumbing

pub mod commit;
pub mod describe;
pub mod version;

pub use commit::CommitRecord;
pub use describe::DescribeResult;
pub use version::VersionBump;
