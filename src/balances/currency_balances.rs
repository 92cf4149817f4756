//! Balance aggregation for one logical asset
//!
//! A user can hold the same asset in several places: directly as the native
//! or global token, as the chain-local hToken, and inside a virtual account
//! proxy. `CurrencyBalances` composes those slots into the totals the UI and
//! the calldata builders need.

use ethers_core::types::U256;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::amount::{CurrencyAmount, FractionalAmount};
use crate::error::SdkResult;
use crate::log_debug;
use crate::token::Token;

/// Balances held by the user's virtual account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualBalances {
    pub native: Option<CurrencyAmount>,
    pub global: Option<CurrencyAmount>,
}

/// Raw balance slots for one asset. Absent slots count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSet {
    pub native: Option<CurrencyAmount>,
    pub global: Option<CurrencyAmount>,
    pub h_token: Option<CurrencyAmount>,
    pub virtual_account: VirtualBalances,
}

/// Integer balances as read from chain, before tagging with an asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBalances {
    pub native: Option<U256>,
    pub global: Option<U256>,
    pub h_token: Option<U256>,
    pub virtual_native: Option<U256>,
    pub virtual_global: Option<U256>,
}

impl BalanceSet {
    /// Tag raw smallest-unit balances with `asset`
    pub fn from_raw(asset: &Token, raw: RawBalances) -> Self {
        let tag = |value: Option<U256>| value.map(|v| CurrencyAmount::from_u256(asset.clone(), v));
        Self {
            native: tag(raw.native),
            global: tag(raw.global),
            h_token: tag(raw.h_token),
            virtual_account: VirtualBalances {
                native: tag(raw.virtual_native),
                global: tag(raw.virtual_global),
            },
        }
    }

    fn slots(&self) -> [(&'static str, Option<&CurrencyAmount>); 5] {
        [
            ("native", self.native.as_ref()),
            ("global", self.global.as_ref()),
            ("h_token", self.h_token.as_ref()),
            ("virtual_native", self.virtual_account.native.as_ref()),
            ("virtual_global", self.virtual_account.global.as_ref()),
        ]
    }
}

/// The memoized aggregate queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceQuery {
    /// Every slot
    Total,
    /// Spendable on a branch chain: everything except the global token
    Remote,
    /// Spendable on the root chain: everything except the hToken
    Root,
}

impl fmt::Display for BalanceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceQuery::Total => write!(f, "total"),
            BalanceQuery::Remote => write!(f, "remote"),
            BalanceQuery::Root => write!(f, "root"),
        }
    }
}

/// A directly held balance, its virtual-account counterpart and their sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedBalance {
    pub balance: CurrencyAmount,
    pub virtual_balance: CurrencyAmount,
    pub total: CurrencyAmount,
}

/// Called once for every summation actually performed
pub type SumObserver = Arc<dyn Fn(BalanceQuery) + Send + Sync>;

/// Aggregated view over a `BalanceSet`.
///
/// The slots never change after construction, so each aggregate is computed
/// at most once per instance and cached in its own cell.
pub struct CurrencyBalances {
    asset: Token,
    balances: BalanceSet,
    total: OnceLock<CurrencyAmount>,
    remote: OnceLock<CurrencyAmount>,
    root: OnceLock<CurrencyAmount>,
    observer: Option<SumObserver>,
}

impl CurrencyBalances {
    /// Fails with `AssetMismatch` if any present slot is denominated in a
    /// different asset than `asset`.
    pub fn new(asset: Token, balances: BalanceSet) -> SdkResult<Self> {
        for (slot, amount) in balances.slots() {
            if let Some(amount) = amount {
                amount.ensure_same_currency(&asset).map_err(|e| e.with_details(format!("slot: {}", slot)))?;
            }
        }

        Ok(Self {
            asset,
            balances,
            total: OnceLock::new(),
            remote: OnceLock::new(),
            root: OnceLock::new(),
            observer: None,
        })
    }

    pub fn from_raw(asset: Token, raw: RawBalances) -> SdkResult<Self> {
        let balances = BalanceSet::from_raw(&asset, raw);
        Self::new(asset, balances)
    }

    /// Attach a hook that observes every summation
    pub fn with_sum_observer(mut self, observer: SumObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn asset(&self) -> &Token {
        &self.asset
    }

    pub fn balances(&self) -> &BalanceSet {
        &self.balances
    }

    pub fn native(&self) -> Option<&CurrencyAmount> {
        self.balances.native.as_ref()
    }

    pub fn global(&self) -> Option<&CurrencyAmount> {
        self.balances.global.as_ref()
    }

    pub fn h_token(&self) -> Option<&CurrencyAmount> {
        self.balances.h_token.as_ref()
    }

    pub fn virtual_native(&self) -> Option<&CurrencyAmount> {
        self.balances.virtual_account.native.as_ref()
    }

    pub fn virtual_global(&self) -> Option<&CurrencyAmount> {
        self.balances.virtual_account.global.as_ref()
    }

    /// native + global + hToken + virtual native + virtual global
    pub fn total_balance(&self) -> &CurrencyAmount {
        self.memoized(&self.total, BalanceQuery::Total)
    }

    /// native + hToken + virtual native + virtual global
    pub fn remote_balance(&self) -> &CurrencyAmount {
        self.memoized(&self.remote, BalanceQuery::Remote)
    }

    /// native + global + virtual native + virtual global
    pub fn root_balance(&self) -> &CurrencyAmount {
        self.memoized(&self.root, BalanceQuery::Root)
    }

    pub fn balance(&self, is_root: bool) -> &CurrencyAmount {
        if is_root {
            self.root_balance()
        } else {
            self.remote_balance()
        }
    }

    pub fn combined_native(&self) -> CombinedBalance {
        self.combine(self.native(), self.virtual_native())
    }

    pub fn combined_global(&self) -> CombinedBalance {
        self.combine(self.global(), self.virtual_global())
    }

    /// All slots and aggregates, for reporting
    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary {
            asset: self.asset.clone(),
            native: self.or_zero(self.native()),
            global: self.or_zero(self.global()),
            h_token: self.or_zero(self.h_token()),
            virtual_native: self.or_zero(self.virtual_native()),
            virtual_global: self.or_zero(self.virtual_global()),
            total: self.total_balance().clone(),
            root: self.root_balance().clone(),
            remote: self.remote_balance().clone(),
        }
    }

    // Compute outside the cell, then store; a concurrent first call may
    // compute redundantly but only one value is ever kept.
    fn memoized<'a>(&'a self, cell: &'a OnceLock<CurrencyAmount>, query: BalanceQuery) -> &'a CurrencyAmount {
        if let Some(cached) = cell.get() {
            return cached;
        }
        let computed = self.sum(query);
        cell.get_or_init(|| computed)
    }

    fn sum(&self, query: BalanceQuery) -> CurrencyAmount {
        let b = &self.balances;
        let terms: Vec<Option<&CurrencyAmount>> = match query {
            BalanceQuery::Total => vec![
                b.native.as_ref(),
                b.global.as_ref(),
                b.h_token.as_ref(),
                b.virtual_account.native.as_ref(),
                b.virtual_account.global.as_ref(),
            ],
            BalanceQuery::Remote => vec![
                b.native.as_ref(),
                b.h_token.as_ref(),
                b.virtual_account.native.as_ref(),
                b.virtual_account.global.as_ref(),
            ],
            BalanceQuery::Root => vec![
                b.native.as_ref(),
                b.global.as_ref(),
                b.virtual_account.native.as_ref(),
                b.virtual_account.global.as_ref(),
            ],
        };

        // Slots were checked against the asset in `new`
        let raw = terms
            .into_iter()
            .flatten()
            .fold(FractionalAmount::zero(), |acc, amount| acc.add(amount.raw()));
        let result = CurrencyAmount::from_fraction(self.asset.clone(), raw);

        if let Some(observer) = &self.observer {
            observer(query);
        }
        log_debug!(
            "balances",
            "computed aggregate balance",
            query = query,
            asset = self.asset,
            units = result.quotient(),
        );

        result
    }

    fn combine(&self, direct: Option<&CurrencyAmount>, in_virtual: Option<&CurrencyAmount>) -> CombinedBalance {
        let balance = self.or_zero(direct);
        let virtual_balance = self.or_zero(in_virtual);
        let total = CurrencyAmount::from_fraction(
            self.asset.clone(),
            balance.raw().add(virtual_balance.raw()),
        );
        CombinedBalance {
            balance,
            virtual_balance,
            total,
        }
    }

    fn or_zero(&self, amount: Option<&CurrencyAmount>) -> CurrencyAmount {
        amount
            .cloned()
            .unwrap_or_else(|| CurrencyAmount::zero(self.asset.clone()))
    }
}

impl fmt::Debug for CurrencyBalances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyBalances")
            .field("asset", &self.asset)
            .field("balances", &self.balances)
            .field("total", &self.total.get())
            .field("remote", &self.remote.get())
            .field("root", &self.root.get())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Serializable snapshot of a `CurrencyBalances`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub asset: Token,
    pub native: CurrencyAmount,
    pub global: CurrencyAmount,
    pub h_token: CurrencyAmount,
    pub virtual_native: CurrencyAmount,
    pub virtual_global: CurrencyAmount,
    pub total: CurrencyAmount,
    pub root: CurrencyAmount,
    pub remote: CurrencyAmount,
}
