//! Configuration constants for colonization contracts

/// Votes a proposal must accumulate before resources may be allocated to it.
pub const RESOURCE_ALLOCATION_VOTE_THRESHOLD: u32 = 10;
