//! Gas ceilings for transactions built by providers

/// Gas limit attached to ERC-20 approve transactions
pub const DEFAULT_APPROVAL_GAS_LIMIT: u64 = 300_000;

/// Gas limit attached to swap transactions.
///
/// Aggregator estimates are disabled (approvals are not yet mined when the
/// quote is built), so a fixed ceiling is used instead.
pub const DEFAULT_SWAP_GAS_LIMIT: u64 = 1_000_000;
