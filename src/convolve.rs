use crate::filter::FirFilter;
use crate::signal::StereoSignal;

/// How filtered values are brought back into the 16-bit sample domain.
/// Both variants truncate toward zero; they differ only out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Keep the low 16 bits, wrapping out-of-range values. Matches the
    /// MATLAB-era tooling bit for bit; high-gain filters can corrupt
    /// loud passages under this policy.
    Wrap,
    /// Clamp out-of-range values to the 16-bit limits.
    Saturate,
}

/// Full discrete linear convolution of one channel with a filter.
/// Output length is `samples.len() + taps.len() - 1`.
pub fn convolve_full(samples: &[i16], taps: &[f64]) -> Vec<f64> {
    if samples.is_empty() || taps.is_empty() {
        return Vec::new();
    }

    let mut acc = vec![0.0f64; samples.len() + taps.len() - 1];
    for (i, &sample) in samples.iter().enumerate() {
        if sample == 0 {
            continue;
        }
        let scale = f64::from(sample);
        // Each input sample injects a scaled copy of the impulse
        // response starting at its own offset.
        for (j, &tap) in taps.iter().enumerate() {
            acc[i + j] += scale * tap;
        }
    }
    acc
}

#[inline]
pub fn to_pcm(value: f64, overflow: Overflow) -> i16 {
    match overflow {
        // f64 -> i64 truncates toward zero; i64 -> i16 keeps the low
        // 16 bits, which is exactly fixed-width integer truncation.
        Overflow::Wrap => (value as i64) as i16,
        // Rust's float-to-i16 cast truncates toward zero and saturates.
        Overflow::Saturate => value as i16,
    }
}

/// Convolve one channel, convert every value back to 16-bit, and keep
/// only the first `samples.len()` entries. Discarding the convolution
/// tail preserves the recording's duration and frame alignment at the
/// cost of the filter energy past the final frame.
pub fn filter_channel(samples: &[i16], filter: &FirFilter, overflow: Overflow) -> Vec<i16> {
    let mut out: Vec<i16> = convolve_full(samples, filter.taps())
        .into_iter()
        .map(|v| to_pcm(v, overflow))
        .collect();
    out.truncate(samples.len());
    out
}

/// Filter both channels. Left and right share no state, so each runs on
/// its own rayon worker.
pub fn filter_stereo(
    signal: &StereoSignal,
    left: &FirFilter,
    right: &FirFilter,
    overflow: Overflow,
) -> (Vec<i16>, Vec<i16>) {
    rayon::join(
        || filter_channel(&signal.left, left, overflow),
        || filter_channel(&signal.right, right, overflow),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_impulse() -> FirFilter {
        FirFilter::from_taps(vec![1.0])
    }

    #[test]
    fn unit_impulse_reproduces_the_input() {
        let samples = vec![10, -10, 20, -20, 30];
        let out = filter_channel(&samples, &unit_impulse(), Overflow::Wrap);
        assert_eq!(out, samples);
    }

    #[test]
    fn full_convolution_has_length_n_plus_m_minus_1() {
        let samples = vec![100, 200, -300, 400];
        let taps = [0.5, 0.5];
        let full = convolve_full(&samples, &taps);
        assert_eq!(full.len(), 5);
        assert_eq!(full, vec![50.0, 150.0, -50.0, 50.0, 200.0]);
    }

    #[test]
    fn output_is_truncated_to_the_input_length() {
        // Two-tap moving average: conv length 5, kept length 4.
        let samples = vec![100, 200, -300, 400];
        let filt = FirFilter::from_taps(vec![0.5, 0.5]);
        let out = filter_channel(&samples, &filt, Overflow::Wrap);
        assert_eq!(out, vec![50, 150, -50, 50]);

        let passthrough = filter_channel(&samples, &unit_impulse(), Overflow::Wrap);
        assert_eq!(passthrough, samples);
    }

    #[test]
    fn frame_count_is_preserved_for_any_filter_length() {
        let samples: Vec<i16> = (0..37).map(|i| (i * 31 - 500) as i16).collect();
        for taps in [1, 2, 5, 36, 37, 101] {
            let filt = FirFilter::from_taps(vec![0.1; taps]);
            let out = filter_channel(&samples, &filt, Overflow::Wrap);
            assert_eq!(out.len(), samples.len(), "taps = {}", taps);
        }
    }

    #[test]
    fn conversion_truncates_toward_zero() {
        assert_eq!(to_pcm(1.9, Overflow::Wrap), 1);
        assert_eq!(to_pcm(-1.9, Overflow::Wrap), -1);
        assert_eq!(to_pcm(1.9, Overflow::Saturate), 1);
        assert_eq!(to_pcm(-1.9, Overflow::Saturate), -1);
    }

    #[test]
    fn wrap_keeps_low_16_bits_and_saturate_clamps() {
        // 40000 is above i16::MAX; the legacy policy wraps it negative.
        assert_eq!(to_pcm(40_000.0, Overflow::Wrap), 40_000i32 as i16);
        assert_eq!(to_pcm(40_000.0, Overflow::Wrap), -25_536);
        assert_eq!(to_pcm(40_000.0, Overflow::Saturate), i16::MAX);
        assert_eq!(to_pcm(-40_000.0, Overflow::Saturate), i16::MIN);
    }

    #[test]
    fn convolution_is_deterministic() {
        let samples: Vec<i16> = (0..64).map(|i| ((i * 7919) % 2003 - 1000) as i16).collect();
        let taps: Vec<f64> = (0..16).map(|i| (i as f64 * 0.37).sin()).collect();
        let a = convolve_full(&samples, &taps);
        let b = convolve_full(&samples, &taps);
        assert_eq!(a, b);
    }

    #[test]
    fn stereo_channels_are_filtered_independently() {
        let stereo = StereoSignal {
            sample_rate: 44_100,
            left: vec![100, 200, -300, 400],
            right: vec![7, -7, 14, -14],
        };
        let left_filt = FirFilter::from_taps(vec![0.5, 0.5]);
        let right_filt = unit_impulse();

        let (left, right) = filter_stereo(&stereo, &left_filt, &right_filt, Overflow::Wrap);
        assert_eq!(left, filter_channel(&stereo.left, &left_filt, Overflow::Wrap));
        assert_eq!(right, stereo.right);
    }
}
