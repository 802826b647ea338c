#![no_std]

mod contract;
mod storage;
mod types;

pub use contract::{ClaimRegistryContract, ClaimRegistryContractClient};
pub use types::{Claim, Coordinates};
