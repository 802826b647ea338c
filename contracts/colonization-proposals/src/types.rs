use soroban_sdk::{contracttype, Address, String, Vec};

/// Storage keys for the proposal registry
#[contracttype]
pub enum DataKey {
    Proposal(u64),
    ProposalCount,
}

/// Lifecycle status of a colonization proposal
///
/// # Transitions
/// - `Active` → `ResourcesAllocated` (one-way, requires the vote threshold)
/// - `ResourcesAllocated` → Terminal (no further transitions)
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Proposal is open for voting
    Active = 0,

    /// Resources have been allocated to the proposal
    ResourcesAllocated = 1,
}

/// A single resource the proposal asks to have allocated
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRequirement {
    /// Resource name (e.g. "water")
    pub resource: String,
    /// Requested amount
    pub amount: i128,
}

/// A request to allocate resources toward colonizing a named exoplanet
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    /// Account that submitted the proposal
    pub proposer: Address,
    /// Identifier of the target planet (e.g. "kepler-22b")
    pub exoplanet_id: String,
    pub description: String,
    /// Ordered list of requested resources
    pub resource_requirements: Vec<ResourceRequirement>,
    /// Accumulated vote count, only ever increases
    pub votes: u32,
    pub status: ProposalStatus,
}
