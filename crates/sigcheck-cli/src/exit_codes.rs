//! Exit codes for the `sigcheck` binary.
//! These codes are part of the public contract: scripts branch on them.

pub const SUCCESS: i32 = 0;
pub const NO_RESULT: i32 = 1; // Input rejected or no fingerprint/digest produced
pub const INTERNAL_ERROR: i32 = 2; // Input file unreadable or bad arguments
pub const INTEGRITY_FAILURE: i32 = 4; // Digest or fingerprint did not match
