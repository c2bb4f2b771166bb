// demos/best_buy.rs
// Run with:
//   cargo run --example best_buy --features catalog-clicker
//   RUST_LOG=buy_next=trace cargo run --example best_buy --features catalog-clicker

use buy_next::catalogs::clicker;
use buy_next::{Ranker, RankerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut ranker = Ranker::with_config(RankerConfig { top_n: 5 });
    let report = ranker
        .add_items(clicker::items())
        .and_then(|()| ranker.report());

    match report {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
