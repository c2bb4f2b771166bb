// tests/properties.rs
use std::collections::HashSet;

use bevy_prng::WyRand;
use buy_next::{Item, RankError, Ranker};
use rand_core::{RngCore, SeedableRng};

/// Uniform [0, 1) from the top 53 bits.
fn unit(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// A random shop. Every fourth item copies an earlier item's yield and cost
/// under a new name, so exact efficiency ties are always present.
fn random_shop(seed: u64, len: usize) -> Vec<Item> {
    let mut rng = WyRand::from_seed(seed.to_le_bytes());
    let mut items: Vec<Item> = Vec::with_capacity(len);
    for i in 0..len {
        let name = format!("item-{:03}", (rng.next_u64() % 1_000) * 1_000 + i as u64);
        if i % 4 == 3 {
            let src = (rng.next_u64() as usize) % items.len();
            let (y, c) = (items[src].yield_rate, items[src].cost);
            items.push(Item::new(y, c, name));
        } else {
            let y = 1.0 + 999.0 * unit(&mut rng);
            let c = 1.0 + 99_999.0 * unit(&mut rng);
            items.push(Item::new(y, c, name));
        }
    }
    items
}

/// Reference buying order: sort by ratio descending, then name ascending.
fn sorted_names(items: &[Item]) -> Vec<String> {
    let mut v: Vec<(f64, &str)> = items
        .iter()
        .map(|it| (it.yield_rate / it.cost, it.name.as_str()))
        .collect();
    v.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    v.into_iter().map(|(_, n)| n.to_owned()).collect()
}

const SEEDS: [u64; 6] = [1, 7, 42, 1_234, 99_991, 0xDEAD_BEEF];

/* ──────────────────────────────────────────────────────────────────────────
1) best_next is the maximum ratio, smallest name among ties
────────────────────────────────────────────────────────────────────────── */

#[test]
fn best_next_matches_reference_order() {
    for seed in SEEDS {
        for len in [1usize, 2, 5, 17, 64] {
            let shop = random_shop(seed, len);
            let mut r = Ranker::new();
            r.add_items(shop.clone()).unwrap();

            let expected = sorted_names(&shop);
            assert_eq!(r.best_next().unwrap(), expected[0], "seed {seed} len {len}");
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
2) best_n returns min(k, size) names, non-increasing, no duplicates
────────────────────────────────────────────────────────────────────────── */

#[test]
fn best_n_is_a_prefix_of_buying_order() {
    for seed in SEEDS {
        let shop = random_shop(seed, 40);
        let expected = sorted_names(&shop);
        let known: HashSet<&str> = shop.iter().map(|i| i.name.as_str()).collect();

        for k in [0usize, 1, 5, 39, 40, 41, 100] {
            let mut r = Ranker::new();
            r.add_items(shop.clone()).unwrap();

            let mut ratios = Vec::new();
            while ratios.len() < k.min(shop.len()) {
                ratios.push(r.peek().unwrap().efficiency());
                r.best_n(1);
            }

            let mut r = Ranker::new();
            r.add_items(shop.clone()).unwrap();
            let got = r.best_n(k);

            assert_eq!(got.len(), k.min(shop.len()));
            assert_eq!(got[..], expected[..got.len()]);
            assert!(ratios.windows(2).all(|w| w[0] >= w[1]));

            let unique: HashSet<&str> = got.iter().map(String::as_str).collect();
            assert_eq!(unique.len(), got.len());
            assert!(unique.is_subset(&known));
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
3) Popping shrinks by exactly min(k, size) and exposes the (k+1)-th item
────────────────────────────────────────────────────────────────────────── */

#[test]
fn popping_then_peeking_gives_next_in_line() {
    for seed in SEEDS {
        let shop = random_shop(seed, 12);
        let expected = sorted_names(&shop);

        for k in 0..=14usize {
            let mut r = Ranker::new();
            r.add_items(shop.clone()).unwrap();
            let before = r.len();

            r.best_n(k);
            assert_eq!(r.len(), before - k.min(before));

            match expected.get(k) {
                Some(next) => assert_eq!(r.best_next().unwrap(), next),
                None => assert_eq!(r.best_next(), Err(RankError::EmptyCollection)),
            }
        }
    }
}

#[test]
fn split_batches_rank_like_one() {
    for seed in SEEDS {
        let shop = random_shop(seed, 30);
        let (left, right) = shop.split_at(11);

        let mut whole = Ranker::new();
        whole.add_items(shop.clone()).unwrap();

        let mut parts = Ranker::new();
        parts.add_items(right.to_vec()).unwrap();
        parts.add_items(left.to_vec()).unwrap();

        assert_eq!(whole.best_n(30), parts.best_n(30));
    }
}
