//! Format-specific structure checks.
//!
//! - `markdown`: Skeleton header and Full Audit separator rules

pub mod markdown;
