use soroban_sdk::Env;

use shared::errors::ContractError;

use crate::types::{Claim, DataKey};

pub fn get_claim_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ClaimCount)
        .unwrap_or(0)
}

pub fn set_claim_count(env: &Env, count: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ClaimCount, &count);
}

pub fn get_claim(env: &Env, id: u64) -> Result<Claim, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Claim(id))
        .ok_or(ContractError::NotFound)
}

pub fn set_claim(env: &Env, claim: &Claim) {
    env.storage()
        .persistent()
        .set(&DataKey::Claim(claim.id), claim);
}
