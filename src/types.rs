multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum PoolStatus {
    /// Stakes accumulate until the deadline. Settlement pending.
    Accepting,
    /// Threshold missed at settlement. Participants reclaim their
    /// stakes individually. Terminal.
    RefundOpen,
    /// Pooled balance forwarded to the acceptor. Terminal.
    Forwarded,
}
