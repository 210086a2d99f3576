use gpr20_data::data::decoder::encode_response;
use gpr20_data::{SampleMetadata, StoreRequest};

/// Reflection of a buried scatterer: a damped resonance whose phase rotates
/// with frequency according to its depth.
fn reflection(freq_hz: f64, depth_m: f64, strength: f64) -> (f64, f64) {
    const WAVE_SPEED: f64 = 1.0e8; // m/s in moist soil
    let phase = -4.0 * std::f64::consts::PI * freq_hz * depth_m / WAVE_SPEED;
    let amplitude = strength * (-depth_m).exp();
    (amplitude * phase.cos(), amplitude * phase.sin())
}

fn generate_trace(
    frequencies: &[f64],
    targets: &[(f64, f64)],
    noise_level: f64,
    rng: &mut NoiseSource,
) -> Vec<f64> {
    let mut interleaved = Vec::with_capacity(frequencies.len() * 2);
    for &f in frequencies {
        let (mut re, mut im) = (0.0, 0.0);
        for &(depth, strength) in targets {
            let (r, i) = reflection(f, depth, strength);
            re += r;
            im += i;
        }
        interleaved.push(re + rng.gauss(0.0, noise_level));
        interleaved.push(im + rng.gauss(0.0, noise_level));
    }
    interleaved
}

/// Deterministic noise source: splitmix64 feeding a polar-method normal
/// sampler. Reproducible output matters more than statistical quality here.
struct NoiseSource {
    state: u64,
    spare: Option<f64>,
}

impl NoiseSource {
    fn seeded(seed: u64) -> Self {
        NoiseSource { state: seed, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn symmetric_unit(&mut self) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        2.0 * unit - 1.0
    }

    /// Normal sample; values come in pairs and the second is cached.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return mean + std_dev * z;
        }
        loop {
            let (u, v) = (self.symmetric_unit(), self.symmetric_unit());
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * scale);
                return mean + std_dev * u * scale;
            }
        }
    }
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_requests.json".to_string());

    let mut rng = NoiseSource::seeded(42);

    // 201 points, 1 GHz → 3 GHz
    let frequencies: Vec<f64> = (0..201).map(|i| 1.0e9 + i as f64 * 1.0e7).collect();
    let raw_freq = encode_response("0", &frequencies).expect("header fits one digit");

    // Two buried targets near the middle of a 5 x 4 grid (0.25 m spacing).
    let targets_at = |x: f64, y: f64| -> Vec<(f64, f64)> {
        let mut t = vec![(0.05, 0.2)]; // ground bounce
        if (x - 0.5).abs() < 0.3 && (y - 0.5).abs() < 0.3 {
            t.push((0.4, 0.8));
        }
        if (x - 0.75).abs() < 0.2 {
            t.push((0.9, 0.5));
        }
        t
    };

    let mut requests = Vec::new();
    let mut sample_no = 0;
    for iy in 0..4 {
        for ix in 0..5 {
            let (x, y) = (ix as f64 * 0.25, iy as f64 * 0.25);
            let trace = generate_trace(&frequencies, &targets_at(x, y), 0.002, &mut rng);

            requests.push(StoreRequest {
                survey_dir: "synthetic_survey".to_string(),
                metadata: SampleMetadata {
                    x_coord: x,
                    y_coord: y,
                    z_coord: 0.0,
                    antennae_height: 0.05,
                    timestamp: format!("2024-05-01T10:{:02}:00", sample_no),
                    survey_id: "SYN-001".to_string(),
                    sample_id: format!("SYN-001-{sample_no:04}"),
                },
                vna_freq: raw_freq.clone(),
                vna_trace: encode_response("0", &trace).expect("header fits one digit"),
            });
            sample_no += 1;
        }
    }

    let file = std::fs::File::create(&output_path).expect("Failed to create output file");
    serde_json::to_writer_pretty(file, &requests).expect("Failed to write requests");

    println!(
        "Wrote {} requests ({} frequency points each) to {output_path}",
        requests.len(),
        frequencies.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_reproducible_for_a_seed() {
        let mut a = NoiseSource::seeded(7);
        let mut b = NoiseSource::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.gauss(0.0, 1.0), b.gauss(0.0, 1.0));
        }
    }

    #[test]
    fn noise_has_roughly_the_requested_spread() {
        let mut rng = NoiseSource::seeded(42);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.gauss(1.0, 0.5)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 1.0).abs() < 0.02, "mean {mean}");
        assert!((var.sqrt() - 0.5).abs() < 0.02, "std {}", var.sqrt());
    }

    #[test]
    fn synthetic_trace_interleaves_two_values_per_frequency() {
        let mut rng = NoiseSource::seeded(1);
        let trace = generate_trace(&[1.0e9, 2.0e9, 3.0e9], &[(0.4, 0.8)], 0.0, &mut rng);
        assert_eq!(trace.len(), 6);
        let (re, im) = reflection(2.0e9, 0.4, 0.8);
        assert_eq!((trace[2], trace[3]), (re, im));
    }
}
