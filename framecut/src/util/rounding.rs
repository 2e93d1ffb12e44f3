/// Rounds `value` to the given number of decimal places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Lengths of edges and bar remainders are kept at 0.1 mm resolution
pub fn round_length(meters: f64) -> f64 {
    round_to(meters, 4)
}

/// Monetary amounts are kept at cent resolution
pub fn round_money(amount: f64) -> f64 {
    round_to(amount, 2)
}

/// Averaged meters per frame are reported at mm resolution
pub fn round_meters(meters: f64) -> f64 {
    round_to(meters, 3)
}
