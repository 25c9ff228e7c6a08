//! Document source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists. The document list is
//! always explicit; sources never discover files on their own.

pub mod fs;
