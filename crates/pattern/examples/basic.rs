//! Basic example demonstrating pattern detection
//!
//! Run with: cargo run --example basic -p rustful-pattern

use pattern::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== rustful-pattern Basic Examples ===\n");

    const DAY: i64 = 86_400_000;
    let values = [
        42.0, 45.0, 39.0, 0.0, 0.0, 0.0, 44.0, 51.0, 20.0, 20.1, 20.0, 20.2, 58.0, 47.0,
    ];
    let series: Vec<DataPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(i as i64 * DAY, v))
        .collect();

    println!("Daily values: {:?}\n", values);

    // 1. Low values
    let low_config = LowValueConfig::default();
    println!(
        "1. Low-value runs (threshold={}, consecutive_days={})",
        low_config.threshold, low_config.consecutive_days
    );
    for pattern in compute_low_value_patterns(&series, &low_config) {
        println!("   days {}..={}", pattern.start, pattern.end);
    }

    // 2. Stagnation
    let stagnation_config = StagnationConfig::new(3, 0.2, 0.5)?;
    println!(
        "\n2. Stagnation runs (consecutive_days={}, change_threshold={}, active={})",
        stagnation_config.consecutive_days,
        stagnation_config.change_threshold,
        stagnation_config.active_change_percentage
    );
    for pattern in compute_stagnation_patterns(&series, &stagnation_config) {
        println!("   days {}..={}", pattern.start, pattern.end);
    }

    // 3. Trend
    println!("\n3. Trend line (low-value runs excluded)");
    match compute_default_trend_line(&series) {
        Some(trend) => println!("   y = {:.3} * x + {:.3}", trend.slope, trend.intercept),
        None => println!("   not enough points"),
    }

    // 4. Statistics
    println!("\n4. Statistics");
    println!("   mean:    {:.2}", mean(&values));
    println!("   median:  {:.2}", median(&values));
    println!("   std dev: {:.2}", standard_deviation(&values));
    println!("   p90:     {:.2}", percentile(&values, 90.0)?);
    println!("   ma(5):   {:?}", moving_average(&values, 5).iter().map(|v| format!("{:.1}", v)).collect::<Vec<_>>());

    println!("\n=== Examples Complete ===");
    Ok(())
}
