#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct MilestoneEscrowProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MilestoneEscrowProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MilestoneEscrowProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MilestoneEscrowProxyMethods { wrapped_tx: tx }
    }
}

pub struct MilestoneEscrowProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

// ── Deploy ──

impl<Env, From, Gas> MilestoneEscrowProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        reviewer: Arg0,
        enforce_vote_outcome: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&reviewer)
            .argument(&enforce_vote_outcome)
            .original_result()
    }
}

// ── Endpoints and views ──

impl<Env, From, To, Gas> MilestoneEscrowProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn submit_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<u32>,
    >(
        self,
        title: Arg0,
        description: Arg1,
        total_amount: Arg2,
        milestone_count: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitProposal")
            .argument(&title)
            .argument(&description)
            .argument(&total_amount)
            .argument(&milestone_count)
            .original_result()
    }

    pub fn deposit_escrow(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositEscrow")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<crate::types::Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, crate::types::Proposal<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_escrow_balance(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEscrowBalance")
            .original_result()
    }

    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, crate::types::ContractConfig> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }

    pub fn add_reviewer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        reviewer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addReviewer")
            .argument(&reviewer)
            .original_result()
    }

    pub fn remove_reviewer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        reviewer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeReviewer")
            .argument(&reviewer)
            .original_result()
    }

    pub fn set_enforce_vote_outcome<Arg0: ProxyArg<bool>>(
        self,
        enabled: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEnforceVoteOutcome")
            .argument(&enabled)
            .original_result()
    }

    pub fn get_reviewers(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReviewers")
            .original_result()
    }

    pub fn is_reviewer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isReviewer")
            .argument(&account)
            .original_result()
    }

    pub fn is_vote_outcome_enforced(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVoteOutcomeEnforced")
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        proposal_id: Arg0,
        vote_for: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("vote")
            .argument(&proposal_id)
            .argument(&vote_for)
            .original_result()
    }

    pub fn get_vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<crate::types::Vote<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_voters<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoters")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_result<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<crate::types::ProposalResult>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalResult")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn add_milestone<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        milestone_id: Arg1,
        amount: Arg2,
        description: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMilestone")
            .argument(&proposal_id)
            .argument(&milestone_id)
            .argument(&amount)
            .argument(&description)
            .original_result()
    }

    pub fn submit_milestone_proof<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        milestone_id: Arg1,
        proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitMilestoneProof")
            .argument(&proposal_id)
            .argument(&milestone_id)
            .argument(&proof)
            .original_result()
    }

    pub fn approve_milestone<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        proposal_id: Arg0,
        milestone_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approveMilestone")
            .argument(&proposal_id)
            .argument(&milestone_id)
            .original_result()
    }

    pub fn get_milestone<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        proposal_id: Arg0,
        milestone_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<crate::types::Milestone<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMilestone")
            .argument(&proposal_id)
            .argument(&milestone_id)
            .original_result()
    }

    pub fn get_milestones<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, crate::types::Milestone<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMilestones")
            .argument(&proposal_id)
            .original_result()
    }
}
