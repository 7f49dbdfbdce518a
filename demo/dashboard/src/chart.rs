//! Chart data preparation.
//!
//! Turns a payoff curve and scenario risks into the plain `(f64, f64)` series, bounds
//! and bar values the ratatui widgets consume. Kept free of any terminal
//! types so it can be tested directly.

use risk_models::payoff::PayoffCurve;
use risk_models::scenarios::ScenarioRiskEntry;

/// Number of samples in the dashed strike marker
pub const STRIKE_MARKER_SAMPLES: usize = 24;

/// Headroom above the curve maximum on the value axis
const Y_HEADROOM: f64 = 1.1;

/// Bar values are drawn as integers; risk levels are scaled by this factor.
pub const BAR_SCALE: f64 = 100.0;

/// Top of the risk axis, a little above the highest fixed risk level
pub const RISK_AXIS_MAX: f64 = 0.5;

/// `(asset price, portfolio value)` pairs for the line dataset
pub fn curve_data(curve: &PayoffCurve) -> Vec<(f64, f64)> {
    curve.prices().zip(curve.values()).collect()
}

/// Price axis bounds: first and last sample
pub fn x_bounds(curve: &PayoffCurve) -> [f64; 2] {
    match (curve.points().first(), curve.points().last()) {
        (Some(first), Some(last)) => [first.asset_price, last.asset_price],
        _ => [0.0, 1.0],
    }
}

/// Value axis bounds: zero up to the curve maximum plus headroom.
///
/// A flat-zero curve gets `[0, 1]` so the axis is never degenerate.
pub fn y_bounds(curve: &PayoffCurve) -> [f64; 2] {
    let max = curve.max_value();
    if max > 0.0 {
        [0.0, max * Y_HEADROOM]
    } else {
        [0.0, 1.0]
    }
}

/// Points of the vertical strike marker from zero to the top of `y_bounds`
pub fn strike_marker(curve: &PayoffCurve) -> Vec<(f64, f64)> {
    let [_, top] = y_bounds(curve);
    let step = top / (STRIKE_MARKER_SAMPLES - 1) as f64;
    (0..STRIKE_MARKER_SAMPLES)
        .map(|i| (curve.strike(), i as f64 * step))
        .collect()
}

/// Single point where the "Strike Price Level" annotation sits
pub fn strike_level_point(curve: &PayoffCurve) -> (f64, f64) {
    (curve.strike(), curve.strike_marker_level())
}

/// Evenly spaced tick values across `bounds`, inclusive of both ends
pub fn ticks(bounds: [f64; 2], count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![bounds[0]],
        _ => {
            let step = (bounds[1] - bounds[0]) / (count - 1) as f64;
            (0..count).map(|i| bounds[0] + i as f64 * step).collect()
        }
    }
}

/// Scaled integer bar height for a risk level
pub fn bar_value(entry: &ScenarioRiskEntry) -> u64 {
    (entry.risk_level * BAR_SCALE).round().max(0.0) as u64
}

/// Scaled integer height of the risk axis
pub fn bar_axis_max() -> u64 {
    (RISK_AXIS_MAX * BAR_SCALE).round() as u64
}

/// Label printed on top of a bar
pub fn bar_text(entry: &ScenarioRiskEntry) -> String {
    format!("{:.2}", entry.risk_level)
}

/// Format large numbers with K/M suffix
pub fn format_k(n: f64) -> String {
    let abs_n = n.abs();
    if abs_n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs_n >= 1_000.0 {
        format!("{:.0}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Format a value with thousands separators and no decimals
pub fn format_thousands(n: f64) -> String {
    let digits = format!("{:.0}", n.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0.0 && digits != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use risk_core::types::MarketScenario;
    use risk_models::payoff::{OptionType, PayoffCurveGenerator};
    use risk_models::portfolio::PortfolioConfig;
    use risk_models::scenarios::ScenarioRiskTable;

    fn curve(option_type: OptionType) -> PayoffCurve {
        let config = PortfolioConfig::builder()
            .option_type(option_type)
            .build()
            .unwrap();
        PayoffCurveGenerator::default().generate(&config).unwrap()
    }

    #[test]
    fn test_curve_data_matches_points() {
        let curve = curve(OptionType::Call);
        let data = curve_data(&curve);
        assert_eq!(data.len(), 100);
        assert_eq!(data[0], (50.0, 0.0));
        assert_eq!(data[99].0, 150.0);
        assert_relative_eq!(data[99].1, curve.max_value());
    }

    #[test]
    fn test_bounds() {
        let curve = curve(OptionType::Put);
        assert_eq!(x_bounds(&curve), [50.0, 150.0]);

        let [lo, hi] = y_bounds(&curve);
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, curve.max_value() * 1.1);
    }

    #[test]
    fn test_strike_marker_spans_axis() {
        let curve = curve(OptionType::Call);
        let marker = strike_marker(&curve);
        assert_eq!(marker.len(), STRIKE_MARKER_SAMPLES);
        assert!(marker.iter().all(|&(x, _)| x == 100.0));
        assert_eq!(marker[0].1, 0.0);
        assert_relative_eq!(marker[STRIKE_MARKER_SAMPLES - 1].1, y_bounds(&curve)[1]);

        let (x, y) = strike_level_point(&curve);
        assert_eq!(x, 100.0);
        assert_relative_eq!(y, 0.9 * curve.max_value());
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks([0.0, 10.0], 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(ticks([2.0, 4.0], 1), vec![2.0]);
        assert!(ticks([0.0, 1.0], 0).is_empty());
    }

    #[test]
    fn test_bar_values() {
        let entries = ScenarioRiskTable::all();
        let values: Vec<u64> = entries.iter().map(bar_value).collect();
        assert_eq!(values, vec![20, 30, 10, 40]);
        assert!(values.iter().all(|&v| v < bar_axis_max()));

        let high = ScenarioRiskTable::lookup([MarketScenario::HighVolatility]);
        assert_eq!(bar_text(&high[0]), "0.40");
    }

    #[test]
    fn test_format_k() {
        assert_eq!(format_k(6_151_890.7), "6.2M");
        assert_eq!(format_k(25_000.0), "25K");
        assert_eq!(format_k(999.0), "999");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(100_000.0), "100,000");
        assert_eq!(format_thousands(6_151_890.72), "6,151,891");
        assert_eq!(format_thousands(-1_500.0), "-1,500");
        assert_eq!(format_thousands(12.0), "12");
    }
}
