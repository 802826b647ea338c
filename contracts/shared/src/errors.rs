//! Common error types for colonization contracts
//!
//! Both registries surface the same two error kinds.

use soroban_sdk::contracterror;

/// Error type shared by the proposal and claim registries
///
/// The numeric codes follow HTTP-style conventions: `404` for a missing
/// entity, `403` for any refused action.
/// `Forbidden` covers both authorization failures (caller is not the owner)
/// and state-guard failures (proposal no longer active, vote threshold
/// unmet); callers distinguish them by context.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    /// Referenced entity ID does not exist in the registry
    NotFound = 404,

    /// Caller is not allowed to perform this action, or the entity is not
    /// in a state that permits it
    Forbidden = 403,
}
