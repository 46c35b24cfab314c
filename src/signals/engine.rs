//! Signal engine combining the detectors into one recommendation.

use crate::config::EngineConfig;
use crate::indicators::structure::{detect_imbalance, detect_liquidity_sweep};
use crate::indicators::trend::detect_sma_crossover;
use crate::models::signal::{AnalysisReport, LiquiditySweep, SignalAction};

pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run every detector over `prices` and reconcile their outcomes.
    ///
    /// The final action starts as the crossover result. A liquidity sweep
    /// opposing the crossover vetoes it; the imbalance contributes a
    /// reason but never changes the action. Reason order is part of the
    /// contract: crossover, imbalance, liquidity, then the veto note.
    ///
    /// Insufficient history is not a failure: detectors degrade to no
    /// signal and the report comes back with no action and no reasons.
    pub fn analyze(&self, prices: &[f64]) -> AnalysisReport {
        let crossover =
            detect_sma_crossover(prices, self.config.short_window, self.config.long_window);
        let liquidity = detect_liquidity_sweep(
            prices,
            self.config.sweep_lookback,
            self.config.sweep_up_margin,
            self.config.sweep_down_margin,
        );
        let imbalance = detect_imbalance(prices);

        let mut action = crossover;
        let mut reasons = Vec::new();

        if let Some(cross) = crossover {
            reasons.push(format!("SMA crossover suggests {}", cross));
        }

        if let Some(gap) = imbalance {
            reasons.push(format!(
                "Imbalance detected {} zone ({:.6}, {:.6})",
                gap.direction, gap.low, gap.high
            ));
        }

        if let Some(sweep) = liquidity {
            reasons.push(format!("Liquidity event: {}", sweep));
            let contradicts = matches!(
                (sweep, crossover),
                (LiquiditySweep::Up, Some(SignalAction::Sell))
                    | (LiquiditySweep::Down, Some(SignalAction::Buy))
            );
            if contradicts {
                action = None;
                reasons.push("Liquidity sweep contradicts SMA -> hold".to_string());
            }
        }

        AnalysisReport {
            crossover,
            liquidity,
            imbalance,
            action,
            reasons,
        }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
