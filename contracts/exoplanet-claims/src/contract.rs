use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

use shared::errors::ContractError;

use crate::storage;
use crate::types::{Claim, Coordinates};

#[contract]
pub struct ClaimRegistryContract;

#[contractimpl]
impl ClaimRegistryContract {
    // -------------------------------
    // Minting
    // -------------------------------

    /// Mint a new claim owned by `owner` and return its ID.
    ///
    /// IDs are assigned sequentially starting at 1 and are never reused.
    pub fn mint_claim(
        env: Env,
        owner: Address,
        exoplanet_id: String,
        claim_type: String,
        coordinates: Coordinates,
        area: i128,
    ) -> Result<u64, ContractError> {
        owner.require_auth();

        let id = storage::get_claim_count(&env) + 1;

        let claim = Claim {
            id,
            owner: owner.clone(),
            exoplanet_id,
            claim_type,
            coordinates,
            area,
        };

        storage::set_claim(&env, &claim);
        storage::set_claim_count(&env, id);

        env.events().publish((symbol_short!("mint"), id), owner);

        Ok(id)
    }

    // -------------------------------
    // Transfer
    // -------------------------------

    /// Reassign a claim to `recipient`. Only the current owner may transfer;
    /// self-transfer is permitted.
    pub fn transfer_claim(
        env: Env,
        caller: Address,
        claim_id: u64,
        recipient: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut claim = storage::get_claim(&env, claim_id)?;

        if claim.owner != caller {
            return Err(ContractError::Forbidden);
        }

        claim.owner = recipient.clone();
        storage::set_claim(&env, &claim);

        env.events()
            .publish((symbol_short!("transfer"), claim_id), (caller, recipient));

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn get_claim(env: Env, claim_id: u64) -> Result<Claim, ContractError> {
        storage::get_claim(&env, claim_id)
    }

    pub fn claim_count(env: Env) -> u64 {
        storage::get_claim_count(&env)
    }
}
