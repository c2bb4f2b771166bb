//! Purchase ranking over a fixed snapshot of upgrade items.
//!
//! Items are scored once, when added, and kept in a max-heap keyed by
//! efficiency. The best purchase can be peeked any number of times; the
//! top-N query pops, so a second call continues with the next-best items.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{RankError, Result};
use crate::mechanics::efficiency;

/// One purchasable upgrade: added income per time unit, price, display name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub yield_rate: f64,
    pub cost: f64,
    pub name: String,
}

impl Item {
    pub fn new(yield_rate: f64, cost: f64, name: impl Into<String>) -> Self {
        Self { yield_rate, cost, name: name.into() }
    }

    fn check(&self) -> std::result::Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is blank");
        }
        if !efficiency::is_positive_finite(self.yield_rate) {
            return Err("yield rate must be positive and finite");
        }
        if !efficiency::is_positive_finite(self.cost) {
            return Err("cost must be positive and finite");
        }
        let (eff, back) = (
            efficiency::efficiency(self.yield_rate, self.cost),
            efficiency::payback(self.yield_rate, self.cost),
        );
        if !efficiency::is_positive_finite(eff) || !efficiency::is_positive_finite(back) {
            return Err("yield/cost ratio is not finite");
        }
        Ok(())
    }
}

/// Table rows in `(yield, cost, name)` form convert directly.
impl From<(f64, f64, &str)> for Item {
    fn from((yield_rate, cost, name): (f64, f64, &str)) -> Self {
        Self::new(yield_rate, cost, name)
    }
}

impl From<&(f64, f64, &str)> for Item {
    fn from(&(yield_rate, cost, name): &(f64, f64, &str)) -> Self {
        Self::new(yield_rate, cost, name)
    }
}

/// An item with its scores frozen at insertion time.
#[derive(Clone, Debug)]
pub struct ScoredItem {
    efficiency: f64,
    payback: f64,
    name: String,
}

impl ScoredItem {
    fn score(item: Item) -> Self {
        Self {
            efficiency: efficiency::efficiency(item.yield_rate, item.cost),
            payback: efficiency::payback(item.yield_rate, item.cost),
            name: item.name,
        }
    }

    pub fn efficiency(&self) -> f64 { self.efficiency }
    pub fn payback(&self) -> f64 { self.payback }
    pub fn name(&self) -> &str { &self.name }
}

// Greater = buy first: higher efficiency, then the lexicographically smaller name.
// Payback is fully determined by efficiency, so it never breaks a tie.
impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.efficiency
            .total_cmp(&other.efficiency)
            .then_with(|| other.name.cmp(&self.name))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

#[derive(Clone, Copy, Debug)]
pub struct RankerConfig {
    /// How many names `best_top` and `report` pop.
    pub top_n: usize,
}
impl Default for RankerConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Ranker {
    heap: BinaryHeap<ScoredItem>,
    cfg: RankerConfig,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: RankerConfig) -> Self {
        Self { heap: BinaryHeap::new(), cfg }
    }

    pub fn config(&self) -> RankerConfig {
        self.cfg
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Score and store a batch. Accumulates across calls.
    ///
    /// The whole batch is checked before anything is stored: the first item
    /// with a blank name, a non-positive/non-finite yield or cost, or a ratio
    /// that overflows to infinity or underflows to zero is reported and the
    /// ranker is left untouched.
    pub fn add_items<I, T>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let mut scored = Vec::new();
        for item in items {
            let item: Item = item.into();
            if let Err(reason) = item.check() {
                warn!(name = %item.name, reason, "rejected item batch");
                return Err(RankError::InvalidItem { name: item.name, reason });
            }
            scored.push(ScoredItem::score(item));
        }

        let added = scored.len();
        self.heap.extend(scored);
        debug!(added, size = self.heap.len(), "items added");
        Ok(())
    }

    /// Scores of the current best purchase, if any.
    pub fn peek(&self) -> Option<&ScoredItem> {
        self.heap.peek()
    }

    /// Name of the current best purchase. Does not remove it.
    pub fn best_next(&self) -> Result<&str> {
        self.heap
            .peek()
            .map(ScoredItem::name)
            .ok_or(RankError::EmptyCollection)
    }

    /// Pop up to `n` names, best first. Popped items are gone for good.
    pub fn best_n(&mut self, n: usize) -> Vec<String> {
        let take = n.min(self.heap.len());
        let mut out = Vec::with_capacity(take);
        for _ in 0..take {
            let Some(top) = self.heap.pop() else { break };
            trace!(name = %top.name, efficiency = top.efficiency, "popped");
            out.push(top.name);
        }
        out
    }

    /// `best_n` with the configured `top_n`.
    pub fn best_top(&mut self) -> Vec<String> {
        self.best_n(self.cfg.top_n)
    }

    /// Best purchase plus the configured top-N (which pops them).
    pub fn report(&mut self) -> Result<Report> {
        let best = self.best_next()?.to_owned();
        let top = self.best_top();
        Ok(Report { best, top })
    }
}

/// Printable answer to "what should I buy next".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub best: String,
    pub top: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The best item to buy - {}", self.best)?;
        writeln!(f, "{}", "-".repeat(15))?;
        writeln!(f, "The best {} items to buy:", self.top.len())?;
        for name in &self.top {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}
