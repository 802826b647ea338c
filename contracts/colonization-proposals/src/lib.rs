#![no_std]

mod contract;
mod storage;
mod types;

pub use contract::{ProposalRegistryContract, ProposalRegistryContractClient};
pub use types::{Proposal, ProposalStatus, ResourceRequirement};
