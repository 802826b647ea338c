use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the claim registry
#[contracttype]
pub enum DataKey {
    Claim(u64),
    ClaimCount,
}

/// Position of a claimed parcel on the planet surface grid
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coordinates {
    pub x: i128,
    pub y: i128,
}

/// An ownership record over a parcel or resource on an exoplanet
///
/// `owner` is the only mutable field; it is reassigned by transfer and may
/// only be changed by the current owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub id: u64,
    /// Current owner, set to the minting account at creation
    pub owner: Address,
    /// Identifier of the planet the claim is on (e.g. "kepler-22b")
    pub exoplanet_id: String,
    /// Category of the claim (e.g. "land")
    pub claim_type: String,
    pub coordinates: Coordinates,
    pub area: i128,
}
