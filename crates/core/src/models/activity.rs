use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::token::Token;

/// What happened to a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    /// The strategy's buy order was filled (bought base with quote)
    Buy,
    /// The strategy's sell order was filled (sold base for quote)
    Sell,
    Create,
    Edit,
    Delete,
    Pause,
    Deposit,
    Withdraw,
    Transfer,
}

impl ActivityAction {
    /// Every action, in the order they are offered in activity filters.
    pub const ALL: [ActivityAction; 9] = [
        ActivityAction::Buy,
        ActivityAction::Sell,
        ActivityAction::Create,
        ActivityAction::Edit,
        ActivityAction::Delete,
        ActivityAction::Pause,
        ActivityAction::Deposit,
        ActivityAction::Withdraw,
        ActivityAction::Transfer,
    ];

    /// Trades feed the price line; everything else is an "operation".
    #[must_use]
    pub fn is_trade(self) -> bool {
        matches!(self, ActivityAction::Buy | ActivityAction::Sell)
    }

    /// Past-tense label shown next to an activity.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityAction::Buy => "Bought",
            ActivityAction::Sell => "Sold",
            ActivityAction::Create => "Created",
            ActivityAction::Edit => "Edited Price",
            ActivityAction::Delete => "Deleted",
            ActivityAction::Pause => "Paused",
            ActivityAction::Deposit => "Deposited",
            ActivityAction::Withdraw => "Withdrew",
            ActivityAction::Transfer => "Transferred",
        }
    }

    /// Wire name, as used in API query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityAction::Buy => "buy",
            ActivityAction::Sell => "sell",
            ActivityAction::Create => "create",
            ActivityAction::Edit => "edit",
            ActivityAction::Delete => "delete",
            ActivityAction::Pause => "pause",
            ActivityAction::Deposit => "deposit",
            ActivityAction::Withdraw => "withdraw",
            ActivityAction::Transfer => "transfer",
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One side (buy or sell) of a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Remaining budget (quote token for the buy side, base token for the sell side)
    pub budget: BigDecimal,

    /// Lowest price of the order range
    pub min: BigDecimal,

    /// Highest price of the order range
    pub max: BigDecimal,
}

/// Snapshot of the strategy an activity refers to, after the activity applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStrategy {
    /// On-chain strategy id (a large integer, kept as a string)
    pub id: String,

    /// Wallet address owning the strategy
    pub owner: String,

    pub base: Token,
    pub quote: Token,
    pub buy: Order,
    pub sell: Order,
}

/// Signed change applied to one side of a strategy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderChange {
    #[serde(default)]
    pub budget: Option<BigDecimal>,

    #[serde(default)]
    pub min: Option<BigDecimal>,

    #[serde(default)]
    pub max: Option<BigDecimal>,
}

/// Everything an activity changed. Absent for activities the indexer
/// could not diff (e.g. the very first record of a strategy).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityChanges {
    #[serde(default)]
    pub buy: Option<OrderChange>,

    #[serde(default)]
    pub sell: Option<OrderChange>,

    /// New owner, only set on transfers
    #[serde(default)]
    pub owner: Option<String>,
}

/// A recorded strategy event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// When the transaction was mined (Unix seconds on the wire)
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    pub action: ActivityAction,

    pub strategy: ActivityStrategy,

    #[serde(default)]
    pub changes: Option<ActivityChanges>,

    #[serde(default, rename = "txHash")]
    pub tx_hash: String,

    #[serde(default, rename = "blockNumber")]
    pub block_number: u64,
}

impl Activity {
    /// Signed budget delta of the buy side, if recorded.
    #[must_use]
    pub fn buy_budget_change(&self) -> Option<&BigDecimal> {
        self.changes
            .as_ref()
            .and_then(|c| c.buy.as_ref())
            .and_then(|b| b.budget.as_ref())
    }

    /// Signed budget delta of the sell side, if recorded.
    #[must_use]
    pub fn sell_budget_change(&self) -> Option<&BigDecimal> {
        self.changes
            .as_ref()
            .and_then(|c| c.sell.as_ref())
            .and_then(|s| s.budget.as_ref())
    }

    #[must_use]
    pub fn is_trade(&self) -> bool {
        self.action.is_trade()
    }
}
