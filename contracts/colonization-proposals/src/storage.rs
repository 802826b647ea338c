use soroban_sdk::Env;

use shared::errors::ContractError;

use crate::types::{DataKey, Proposal};

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, id: u64) -> Result<Proposal, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(ContractError::NotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}
