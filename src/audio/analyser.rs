//! Frequency-domain analysis of the playback signal
//!
//! The playback callback feeds the most recent samples into a fixed-size
//! window; the visualizer polls magnitude snapshots from it. The signal
//! itself is not altered.

use std::sync::{Arc, Mutex};

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Number of time-domain samples per analysis frame
pub const FFT_SIZE: usize = 256;

/// Number of frequency bins in a snapshot
pub const BIN_COUNT: usize = FFT_SIZE / 2;

/// Rolling analysis window over the playback signal
pub struct Analyser {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    recent: Mutex<Ring>,
}

/// Fixed-size ring of the most recent samples
struct Ring {
    samples: [f32; FFT_SIZE],
    pos: usize,
}

impl Analyser {
    /// Create an analyser with a planned forward FFT and Hann window
    #[must_use]
    pub fn new() -> Self {
        let fft = FftPlanner::new().plan_fft_forward(FFT_SIZE);

        #[allow(clippy::cast_precision_loss)]
        let window = (0..FFT_SIZE)
            .map(|i| {
                let x = i as f32 / (FFT_SIZE as f32 - 1.0);
                0.5 - 0.5 * (2.0 * std::f32::consts::PI * x).cos()
            })
            .collect();

        Self {
            fft,
            window,
            recent: Mutex::new(Ring {
                samples: [0.0; FFT_SIZE],
                pos: 0,
            }),
        }
    }

    /// Append samples from the playback callback
    pub fn push_samples(&self, samples: &[f32]) {
        if let Ok(mut ring) = self.recent.lock() {
            for &sample in samples {
                let pos = ring.pos;
                ring.samples[pos] = sample;
                ring.pos = (pos + 1) % FFT_SIZE;
            }
        }
    }

    /// Reset the window to silence
    pub fn clear(&self) {
        if let Ok(mut ring) = self.recent.lock() {
            ring.samples = [0.0; FFT_SIZE];
            ring.pos = 0;
        }
    }

    /// Magnitude spectrum of the current window: [`BIN_COUNT`] values,
    /// roughly normalized so a full-scale tone peaks near 1.0
    #[must_use]
    pub fn frequency_snapshot(&self) -> Vec<f32> {
        let ordered = {
            let Ok(ring) = self.recent.lock() else {
                return vec![0.0; BIN_COUNT];
            };

            // Unroll the ring into time order
            let mut ordered = [0.0f32; FFT_SIZE];
            for (i, slot) in ordered.iter_mut().enumerate() {
                *slot = ring.samples[(ring.pos + i) % FFT_SIZE];
            }
            ordered
        };

        let mut buffer: Vec<Complex<f32>> = ordered
            .iter()
            .zip(&self.window)
            .map(|(&sample, &w)| Complex::new(sample * w, 0.0))
            .collect();

        self.fft.process(&mut buffer);

        #[allow(clippy::cast_precision_loss)]
        let scale = 2.0 / FFT_SIZE as f32;
        buffer[..BIN_COUNT].iter().map(|c| c.norm() * scale).collect()
    }
}

impl Default for Analyser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_yields_a_zero_spectrum() {
        let analyser = Analyser::new();
        let snapshot = analyser.frequency_snapshot();
        assert_eq!(snapshot.len(), BIN_COUNT);
        assert!(snapshot.iter().all(|&m| m.abs() < 1e-6));
    }

    #[test]
    fn tone_energy_lands_in_the_matching_bin() {
        let analyser = Analyser::new();

        // Exactly 8 cycles across the window -> bin 8
        #[allow(clippy::cast_precision_loss)]
        let tone: Vec<f32> = (0..FFT_SIZE)
            .map(|i| (2.0 * std::f32::consts::PI * 8.0 * i as f32 / FFT_SIZE as f32).sin())
            .collect();
        analyser.push_samples(&tone);

        let snapshot = analyser.frequency_snapshot();
        let peak_bin = snapshot
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 8);
    }

    #[test]
    fn clear_resets_the_window() {
        let analyser = Analyser::new();
        analyser.push_samples(&[0.9; FFT_SIZE]);
        analyser.clear();
        assert!(analyser.frequency_snapshot().iter().all(|&m| m.abs() < 1e-6));
    }
}
