use serde::{Deserialize, Serialize};

/// An ERC-20 style token as reported by the activity API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Contract address (checksummed or lower-case, compared case-insensitively)
    pub address: String,

    /// Ticker symbol (e.g., "ETH", "USDC")
    pub symbol: String,

    /// Number of decimals the token uses on-chain
    #[serde(default)]
    pub decimals: u8,
}

impl Token {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Case-insensitive address comparison.
    #[must_use]
    pub fn same_address(&self, other: &str) -> bool {
        self.address.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
