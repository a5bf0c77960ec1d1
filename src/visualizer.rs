//! Terminal spectrum visualization
//!
//! Purely presentational: folds an analyser snapshot into a fixed number of
//! bars and renders them with block glyphs. Renders a flat baseline when
//! playback is idle or no analyser exists.

use crate::audio::{Analyser, BIN_COUNT};

/// Number of bars in a rendered frame
pub const BAR_COUNT: usize = 32;

/// Glyphs from silent to full-scale
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render one visualization frame
///
/// `None` (no analyser available) renders the same baseline as silence.
#[must_use]
pub fn render_frame(analyser: Option<&Analyser>) -> String {
    analyser.map_or_else(
        || bars_to_string(&[0.0; BAR_COUNT]),
        |a| bars_to_string(&fold_bins(&a.frequency_snapshot())),
    )
}

/// Average the spectrum bins down to [`BAR_COUNT`] bar levels in [0, 1]
fn fold_bins(bins: &[f32]) -> [f32; BAR_COUNT] {
    let mut bars = [0.0f32; BAR_COUNT];
    if bins.is_empty() {
        return bars;
    }

    let per_bar = BIN_COUNT.div_ceil(BAR_COUNT);
    for (i, bar) in bars.iter_mut().enumerate() {
        let start = i * per_bar;
        let chunk = &bins[start.min(bins.len())..(start + per_bar).min(bins.len())];
        if chunk.is_empty() {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = chunk.iter().sum::<f32>() / chunk.len() as f32;
        *bar = mean.clamp(0.0, 1.0);
    }
    bars
}

fn bars_to_string(bars: &[f32; BAR_COUNT]) -> String {
    bars.iter()
        .map(|&level| {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let idx = (level * (LEVELS.len() - 1) as f32).round() as usize;
            LEVELS[idx.min(LEVELS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::FFT_SIZE;

    #[test]
    fn missing_analyser_renders_a_baseline() {
        let frame = render_frame(None);
        assert_eq!(frame.chars().count(), BAR_COUNT);
        assert!(frame.chars().all(|c| c == ' '));
    }

    #[test]
    fn idle_analyser_renders_without_panicking() {
        let analyser = Analyser::new();
        let frame = render_frame(Some(&analyser));
        assert_eq!(frame.chars().count(), BAR_COUNT);
    }

    #[test]
    fn loud_signal_raises_some_bars() {
        let analyser = Analyser::new();
        #[allow(clippy::cast_precision_loss)]
        let tone: Vec<f32> = (0..FFT_SIZE)
            .map(|i| (2.0 * std::f32::consts::PI * 8.0 * i as f32 / FFT_SIZE as f32).sin())
            .collect();
        analyser.push_samples(&tone);

        let frame = render_frame(Some(&analyser));
        assert!(frame.chars().any(|c| c != ' '));
    }
}
