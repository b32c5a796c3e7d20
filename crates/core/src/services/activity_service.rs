use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Signed, Zero};
use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::errors::CoreError;
use crate::models::activity::{Activity, ActivityAction};
use crate::models::token::Token;

/// Criteria for narrowing an activity list.
///
/// Empty `actions` means every action. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub actions: Vec<ActivityAction>,
    /// Keep only strategies owned by this address
    pub owner: Option<String>,
    /// Drop strategies owned by this address
    pub exclude_owner: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ActivityFilter {
    /// Only buys and sells.
    #[must_use]
    pub fn trades() -> Self {
        Self {
            actions: vec![ActivityAction::Buy, ActivityAction::Sell],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        if !self.actions.is_empty() && !self.actions.contains(&activity.action) {
            return false;
        }
        let owner = &activity.strategy.owner;
        if let Some(wanted) = &self.owner {
            if !owner.eq_ignore_ascii_case(wanted) {
                return false;
            }
        }
        if let Some(excluded) = &self.exclude_owner {
            if owner.eq_ignore_ascii_case(excluded) {
                return false;
            }
        }
        if self.start.is_some_and(|start| activity.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| activity.date > end) {
            return false;
        }
        true
    }
}

/// Formatting and list operations behind the activity table and tooltips.
pub struct ActivityService;

impl ActivityService {
    pub fn new() -> Self {
        Self
    }

    /// Activities matching `filter`, newest first.
    /// Ties keep block order (latest block first).
    #[must_use]
    pub fn filter<'a>(&self, activities: &'a [Activity], filter: &ActivityFilter) -> Vec<&'a Activity> {
        let mut matched: Vec<&Activity> = activities.iter().filter(|a| filter.matches(a)).collect();
        matched.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.block_number.cmp(&a.block_number))
        });
        matched
    }

    /// One-sentence description of what an activity did.
    #[must_use]
    pub fn describe(&self, activity: &Activity) -> String {
        let strategy = &activity.strategy;
        let (base, quote) = (&strategy.base, &strategy.quote);
        let buy = activity.buy_budget_change();
        let sell = activity.sell_budget_change();

        match activity.action {
            ActivityAction::Create => format!(
                "Created a {}/{} strategy with {} and {}.",
                base.symbol,
                quote.symbol,
                token_amount(&strategy.buy.budget, quote),
                token_amount(&strategy.sell.budget, base),
            ),
            ActivityAction::Edit => format!(
                "Edited the prices of the {}/{} strategy.",
                base.symbol, quote.symbol
            ),
            ActivityAction::Delete => format!(
                "Deleted the {}/{} strategy and withdrew all remaining funds.",
                base.symbol, quote.symbol
            ),
            ActivityAction::Pause => format!(
                "Paused the {}/{} strategy.",
                base.symbol, quote.symbol
            ),
            ActivityAction::Deposit => {
                format!("Deposited {}.", budget_pair(buy, quote, sell, base))
            }
            ActivityAction::Withdraw => {
                format!("Withdrew {}.", budget_pair(buy, quote, sell, base))
            }
            ActivityAction::Transfer => {
                let to = activity
                    .changes
                    .as_ref()
                    .and_then(|c| c.owner.as_deref())
                    .unwrap_or(&strategy.owner);
                format!("Transferred the strategy to {}.", short_address(to))
            }
            ActivityAction::Buy | ActivityAction::Sell => match (buy, sell) {
                (Some(buy), Some(sell)) => format!(
                    "{} {} for {}.",
                    activity.action.display_name(),
                    token_amount(&sell.abs(), base),
                    token_amount(&buy.abs(), quote),
                ),
                _ => format!(
                    "{} on the {}/{} strategy.",
                    activity.action.display_name(),
                    base.symbol,
                    quote.symbol
                ),
            },
        }
    }

    /// Stable key for rendering lists of activities.
    #[must_use]
    pub fn activity_key(&self, activity: &Activity, index: usize) -> String {
        format!("{}-{}-{}", activity.tx_hash, activity.action.as_str(), index)
    }
}

impl Default for ActivityService {
    fn default() -> Self {
        Self::new()
    }
}

/// `"1.5 ETH"`.
#[must_use]
pub fn token_amount(amount: &BigDecimal, token: &Token) -> String {
    format!("{} {}", amount, token.symbol)
}

/// Signed budget delta: `+` for gains, `-` for losses, `...` when unknown.
#[must_use]
pub fn budget_change_text(delta: Option<&BigDecimal>, token: &Token) -> String {
    match delta {
        None => "...".to_string(),
        Some(d) if d.is_negative() => token_amount(d, token),
        Some(d) => format!("+{}", token_amount(d, token)),
    }
}

/// `0x1234...abcd` for addresses, unchanged for short strings.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Display form of a strategy id: the lowest 128 bits of the decimal id.
///
/// On-chain ids carry the pair index in the upper bits; the lower half is
/// what users see.
pub fn strategy_display_id(id: &str) -> Result<String, CoreError> {
    let value = BigInt::from_str(id.trim())
        .map_err(|e| CoreError::ValidationError(format!("Invalid strategy id {id}: {e}")))?;
    let mask = (BigInt::from(1u8) << 128usize) - BigInt::from(1u8);
    Ok((value & mask).to_string())
}

/// "10 USDC and 1 ETH", leaving out absent or zero sides.
fn budget_pair(
    buy: Option<&BigDecimal>,
    quote: &Token,
    sell: Option<&BigDecimal>,
    base: &Token,
) -> String {
    let parts: Vec<String> = [(buy, quote), (sell, base)]
        .into_iter()
        .filter_map(|(delta, token)| {
            delta
                .filter(|d| !d.is_zero())
                .map(|d| token_amount(&d.abs(), token))
        })
        .collect();
    if parts.is_empty() {
        "no funds".to_string()
    } else {
        parts.join(" and ")
    }
}
