/// Efficiency mechanics: how much income a purchase buys per unit spent.

/// Income gained per unit of cost: yield / cost.
#[inline]
pub fn efficiency(yield_rate: f64, cost: f64) -> f64 {
    yield_rate / cost
}

/// Time to recoup the price from the added income: cost / yield.
#[inline]
pub fn payback(yield_rate: f64, cost: f64) -> f64 {
    cost / yield_rate
}

/// Usable price or yield: finite and strictly above zero.
#[inline]
pub fn is_positive_finite(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
