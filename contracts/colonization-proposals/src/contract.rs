use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

use shared::constants::RESOURCE_ALLOCATION_VOTE_THRESHOLD;
use shared::errors::ContractError;

use crate::storage;
use crate::types::{Proposal, ProposalStatus, ResourceRequirement};

#[contract]
pub struct ProposalRegistryContract;

#[contractimpl]
impl ProposalRegistryContract {
    // -------------------------------
    // Proposal Submission
    // -------------------------------

    /// Submit a new colonization proposal and return its ID.
    ///
    /// IDs are assigned sequentially starting at 1 and are never reused.
    /// The proposal starts with zero votes in `Active` status.
    pub fn submit_proposal(
        env: Env,
        proposer: Address,
        exoplanet_id: String,
        description: String,
        resource_requirements: Vec<ResourceRequirement>,
    ) -> Result<u64, ContractError> {
        proposer.require_auth();

        let id = storage::get_proposal_count(&env) + 1;

        let proposal = Proposal {
            id,
            proposer: proposer.clone(),
            exoplanet_id,
            description,
            resource_requirements,
            votes: 0,
            status: ProposalStatus::Active,
        };

        storage::set_proposal(&env, &proposal);
        storage::set_proposal_count(&env, id);

        env.events()
            .publish((symbol_short!("submit"), id), proposer);

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------

    /// Cast a vote for an active proposal.
    ///
    /// Votes are not deduplicated per voter; the same account may vote any
    /// number of times while the proposal stays active.
    pub fn vote(env: Env, voter: Address, proposal_id: u64) -> Result<(), ContractError> {
        voter.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if proposal.status != ProposalStatus::Active {
            return Err(ContractError::Forbidden);
        }

        proposal.votes += 1;
        storage::set_proposal(&env, &proposal);

        env.events()
            .publish((symbol_short!("vote"), proposal_id), proposal.votes);

        Ok(())
    }

    // -------------------------------
    // Resource Allocation
    // -------------------------------

    /// Allocate resources to a proposal that has reached the vote threshold.
    ///
    /// One-way, one-time transition: once allocated, the proposal leaves the
    /// `Active` status and every further mutation is refused.
    pub fn allocate_resources(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if proposal.status != ProposalStatus::Active {
            return Err(ContractError::Forbidden);
        }
        if proposal.votes < RESOURCE_ALLOCATION_VOTE_THRESHOLD {
            return Err(ContractError::Forbidden);
        }

        proposal.status = ProposalStatus::ResourcesAllocated;
        storage::set_proposal(&env, &proposal);

        env.events()
            .publish((symbol_short!("allocate"), proposal_id), caller);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        storage::get_proposal(&env, proposal_id)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }
}
