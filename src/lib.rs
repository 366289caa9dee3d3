#![no_std]

multiversx_sc::imports!();

pub mod acceptor_proxy;
pub mod stake_pool_proxy;
pub mod types;

use types::PoolStatus;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait StakePool {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        acceptor_address: ManagedAddress,
        threshold: BigUint,
        staking_window_seconds: u64,
    ) {
        require!(
            staking_window_seconds > 0,
            "Staking window must be greater than zero"
        );
        require!(threshold > 0u64, "Threshold must be greater than zero");

        self.acceptor_address().set(&acceptor_address);
        self.threshold().set(&threshold);

        let deadline = self.blockchain().get_block_timestamp() + staking_window_seconds;
        self.deadline().set(deadline);

        self.total_staked().set(BigUint::zero());
        self.status().set(PoolStatus::Accepting);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stake
    // Accumulates the caller's contribution until the deadline.
    // ========================================================

    #[endpoint(stake)]
    #[payable("EGLD")]
    fn stake(&self) {
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Amount must be greater than zero");

        let now = self.blockchain().get_block_timestamp();
        require!(now < self.deadline().get(), "Deadline has passed");
        require!(
            self.status().get() == PoolStatus::Accepting,
            "Pool already settled"
        );

        let caller = self.blockchain().get_caller();
        self.stakes(&caller).update(|staked| *staked += &payment);
        self.total_staked().update(|total| *total += &payment);
        self.stakers().insert(caller.clone());

        self.stake_event(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: settle
    // Callable by anyone once the deadline has passed. Resolves
    // the pool into exactly one terminal branch:
    //   - total >= threshold: forward everything to the acceptor
    //   - total <  threshold: open individual refunds
    // ========================================================

    #[endpoint(settle)]
    fn settle(&self) {
        require!(
            self.status().get() == PoolStatus::Accepting,
            "Pool already settled"
        );

        let now = self.blockchain().get_block_timestamp();
        let deadline = self.deadline().get();
        if now < deadline {
            sc_panic!("Deadline not reached, {} seconds remain", &(deadline - now));
        }

        let total = self.total_staked().get();
        if total >= self.threshold().get() {
            let acceptor = self.acceptor_address().get();
            require!(
                !self.acceptor_completed(&acceptor),
                "Acceptor already completed"
            );

            // Terminal state and balance are committed before the external
            // call; a failed call reverts the whole transaction, leaving the
            // pool Accepting and settle retryable.
            self.status().set(PoolStatus::Forwarded);
            self.total_staked().set(BigUint::zero());

            self.tx()
                .to(&acceptor)
                .typed(acceptor_proxy::AcceptorProxy)
                .complete()
                .egld(&total)
                .sync_call();

            self.forwarded_event(&acceptor, &total);
        } else {
            self.status().set(PoolStatus::RefundOpen);
            self.refunds_opened_event(&total);
        }
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Refund path. Each participant reclaims their recorded
    // stake exactly once after the pool opened for refunds.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        require!(
            self.status().get() == PoolStatus::RefundOpen,
            "Not open for withdrawals"
        );

        let caller = self.blockchain().get_caller();
        // Ledger entry is cleared before any value leaves the contract.
        let amount = self.stakes(&caller).take();
        require!(amount > 0u64, "Nothing to withdraw");

        self.total_staked().update(|total| *total -= &amount);
        self.stakers().swap_remove(&caller);

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // INTERNAL: acceptor completion query
    // ========================================================

    fn acceptor_completed(&self, acceptor: &ManagedAddress) -> bool {
        self.tx()
            .to(acceptor)
            .typed(acceptor_proxy::AcceptorProxy)
            .is_completed()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getTimeLeft)]
    fn get_time_left(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        self.deadline().get().saturating_sub(now)
    }

    #[view(getStake)]
    fn get_stake(&self, participant: &ManagedAddress) -> BigUint {
        self.stakes(participant).get()
    }

    #[view(getTotalStaked)]
    fn get_total_staked(&self) -> BigUint {
        self.total_staked().get()
    }

    #[view(getDeadline)]
    fn get_deadline(&self) -> u64 {
        self.deadline().get()
    }

    #[view(getThreshold)]
    fn get_threshold(&self) -> BigUint {
        self.threshold().get()
    }

    #[view(getStatus)]
    fn get_status(&self) -> PoolStatus {
        self.status().get()
    }

    #[view(getAcceptorAddress)]
    fn get_acceptor_address(&self) -> ManagedAddress {
        self.acceptor_address().get()
    }

    #[view(getStakers)]
    fn get_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.stakers().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, staker) in self.stakers().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(staker);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue5<BigUint, BigUint, u64, u64, u64> {
        let total = self.total_staked().get();
        let threshold = self.threshold().get();
        let deadline = self.deadline().get();
        let time_left = self.get_time_left();
        let staker_count = self.stakers().len() as u64;
        (total, threshold, deadline, time_left, staker_count).into()
    }

    #[view(isAcceptorCompleted)]
    fn is_acceptor_completed(&self) -> bool {
        self.acceptor_completed(&self.acceptor_address().get())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("refundsOpened")]
    fn refunds_opened_event(&self, total_staked: &BigUint);

    #[event("forwarded")]
    fn forwarded_event(
        &self,
        #[indexed] acceptor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("acceptorAddress")]
    fn acceptor_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("threshold")]
    fn threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("deadline")]
    fn deadline(&self) -> SingleValueMapper<u64>;

    // ── Pool state ──

    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<PoolStatus>;

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakes")]
    fn stakes(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
