#![no_std]

multiversx_sc::imports!();

pub mod example_acceptor_proxy;

// ============================================================
// Example Acceptor
//
// Reference beneficiary for the stake pool: a one-shot sink
// that records the forwarded amount. The `setRejecting` toggle
// lets scenario tests force the trigger to fail.
// ============================================================

#[multiversx_sc::contract]
pub trait ExampleAcceptor {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: complete
    // Completion trigger consumed by the pool. One-shot.
    // ========================================================

    #[endpoint(complete)]
    #[payable("EGLD")]
    fn complete(&self) {
        require!(!self.rejecting().get(), "Acceptor is rejecting payments");
        require!(!self.completed().get(), "Already completed");

        let payment = self.call_value().egld_value().clone_value();
        self.completed().set(true);
        self.received_amount().set(&payment);

        self.completed_event(&self.blockchain().get_caller(), &payment);
    }

    #[only_owner]
    #[endpoint(setRejecting)]
    fn set_rejecting(&self, rejecting: bool) {
        self.rejecting().set(rejecting);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("completed")]
    fn completed_event(
        &self,
        #[indexed] from: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(isCompleted)]
    #[storage_mapper("completed")]
    fn completed(&self) -> SingleValueMapper<bool>;

    #[view(getReceivedAmount)]
    #[storage_mapper("receivedAmount")]
    fn received_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("rejecting")]
    fn rejecting(&self) -> SingleValueMapper<bool>;
}
