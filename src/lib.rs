/*!
`buy_next` — ranks idle-game upgrades by how much income each unit of cost buys.

What it does
- Scores each purchasable item once: `efficiency = yield / cost`
  (and its inverse, `payback = cost / yield`).
- Keeps the scored items in a max-heap so the current best purchase is
  always one peek away.
- Answers two questions:
  * `best_next` — which single item to buy now (peek, repeatable).
  * `best_n`    — the next N items in buying order (pops them).

How to use (call surface only)
- Build a `Ranker` (`Ranker::new()` or `Ranker::with_config(..)`).
- Feed it a snapshot with `add_items`, either `Item`s or `(yield, cost, name)` rows.
- Ask `best_next()`, `best_n(n)` or `report()`.

Equal efficiencies fall back to the item name, smallest first.

What it does NOT do
- No economy over time: after a purchase, build a new snapshot and rank again.
- No loading of item tables; `catalogs` only ships optional built-in data.
*/

pub mod catalogs;
pub mod error;
pub mod mechanics;
pub mod ranker;

pub use error::{RankError, Result};
pub use ranker::{Item, Ranker, RankerConfig, Report, ScoredItem};
