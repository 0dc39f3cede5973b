/// Default output path, relative to the base directory.
pub const DEFAULT_OUTPUT: &str = "contracts.xml";

/// Built-in contract set. Order is significant: it determines the
/// `index` attribute and emission order in the bundled document.
pub const DEFAULT_CONTRACTS: [&str; 8] = [
    "Account.sol",
    "Arbitration.sol",
    "Escrow.sol",
    "Offer.sol",
    "Rating.sol",
    "Reputation.sol",
    "Trade.sol",
    "ContractRegistry.sol",
];

pub fn default_contracts() -> Vec<String> {
    DEFAULT_CONTRACTS.iter().map(|s| s.to_string()).collect()
}
