use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WAVEFORM_SAMPLES: usize = 200;
pub const NOISE_AMPLITUDE: f64 = 0.1;

/// Decorative ECG-like trace for the chart. It is not derived from the
/// uploaded image.
pub fn generate_waveform() -> Vec<f64> {
    generate_waveform_with(&mut StdRng::from_entropy())
}

pub fn generate_waveform_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    (0..WAVEFORM_SAMPLES)
        .map(|i| waveform_shape(i) + (rng.gen_range(0.0..1.0) - 0.5) * NOISE_AMPLITUDE)
        .collect()
}

/// Noise-free value of sample `index`: a P-wave sinusoid, a QRS spike gated
/// on the slow carrier, a T-wave sinusoid and a 0.5 baseline.
pub fn waveform_shape(index: usize) -> f64 {
    let x = index as f64 / WAVEFORM_SAMPLES as f64 * 4.0 * PI;

    let mut value = (x * 3.0).sin() * 0.3;
    if x.sin() > 0.8 {
        value += (x * 20.0).sin() * 2.0;
    }
    value += (x * 1.5).sin() * 0.5;

    value + 0.5
}
