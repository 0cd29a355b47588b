use crate::core::data::complex::Complex;
use crate::core::kernel::lane_group::LaneGroup;

/// A lane escapes once `|z|²` is strictly greater than this.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Selects the additive constant of the recurrence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Recurrence {
    /// Each sample is its own constant.
    Mandelbrot,
    /// Every sample shares the given constant.
    Julia(Complex),
}

/// Escape counts for a lane group, iterating from `z₀ = sample`.
///
/// A lane that first exceeds the escape radius on step `i` reports `i`; a lane
/// that survives all `limit` steps reports `limit`. The loop stops as soon as
/// every lane has escaped. Escaped lanes keep computing, but their counts are
/// frozen by the increment mask.
#[must_use]
pub fn escape_counts<const N: usize>(
    samples: &LaneGroup<N>,
    recurrence: Recurrence,
    limit: u32,
) -> [u32; N] {
    let constant = match recurrence {
        Recurrence::Mandelbrot => *samples,
        Recurrence::Julia(c) => LaneGroup::splat(c),
    };

    let mut real = samples.real;
    let mut imag = samples.imag;
    let mut result = [0u32; N];
    let mut increment = [1u32; N];

    for _ in 0..limit {
        let mut incomplete = 0u32;

        for lane in 0..N {
            let next_real = real[lane] * real[lane] - imag[lane] * imag[lane] + constant.real[lane];
            let next_imag = 2.0 * real[lane] * imag[lane] + constant.imag[lane];
            real[lane] = next_real;
            imag[lane] = next_imag;

            let squared_magnitude = next_real * next_real + next_imag * next_imag;
            let not_escaped = u32::from(squared_magnitude <= ESCAPE_RADIUS_SQUARED);

            increment[lane] &= not_escaped;
            result[lane] += increment[lane];
            incomplete |= increment[lane];
        }

        if incomplete == 0 {
            break;
        }
    }

    result
}

/// Single-sample reference for [`escape_counts`].
#[must_use]
pub fn escape_time_scalar(sample: Complex, recurrence: Recurrence, limit: u32) -> u32 {
    let c = match recurrence {
        Recurrence::Mandelbrot => sample,
        Recurrence::Julia(c) => c,
    };

    let mut z = sample;
    for iteration in 0..limit {
        z = z.square() + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    const JULIA: Recurrence = Recurrence::Julia(Complex {
        real: -0.445833333333331,
        imag: -0.5937499999999968,
    });

    fn sample_grid() -> Vec<Complex> {
        let mut samples = Vec::new();
        for y in 0..23 {
            for x in 0..31 {
                samples.push(Complex::new(
                    -2.6 + x as f64 * 0.11,
                    -1.4 + y as f64 * 0.127,
                ));
            }
        }
        samples
    }

    fn counts_with_width<const N: usize>(
        samples: &[Complex],
        recurrence: Recurrence,
        limit: u32,
    ) -> Vec<u32> {
        samples
            .chunks(N)
            .flat_map(|chunk| {
                let group = LaneGroup::<N>::from_slice(chunk, Complex::ZERO);
                let counts = escape_counts(&group, recurrence, limit);
                counts.into_iter().take(chunk.len()).collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn zero_limit_returns_zero_for_every_lane() {
        let group = LaneGroup::<4>::from_fn(|lane| Complex::new(lane as f64, 0.5));

        assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, 0), [0; 4]);
        assert_eq!(escape_counts(&group, JULIA, 0), [0; 4]);
    }

    #[test]
    fn origin_never_escapes() {
        let group = LaneGroup::<2>::splat(Complex::ZERO);

        for limit in [1, 7, 128, 1000] {
            assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, limit), [limit; 2]);
            assert_eq!(escape_time_scalar(Complex::ZERO, Recurrence::Mandelbrot, limit), limit);
        }
    }

    #[test]
    fn samples_outside_radius_two_match_scalar_reference() {
        let samples = [
            Complex::new(2.1, 0.0),
            Complex::new(-2.5, 0.3),
            Complex::new(1.5, 1.5),
            Complex::new(0.0, -2.01),
        ];
        let group = LaneGroup::<4>::from_slice(&samples, Complex::ZERO);

        for limit in [1, 2, 50] {
            let counts = escape_counts(&group, Recurrence::Mandelbrot, limit);
            for (lane, sample) in samples.iter().enumerate() {
                assert_eq!(
                    counts[lane],
                    escape_time_scalar(*sample, Recurrence::Mandelbrot, limit)
                );
            }
        }
    }

    #[test]
    fn escape_on_step_i_reports_i() {
        // 0.4 escapes on the sixth step.
        let group = LaneGroup::<1>::splat(Complex::new(0.4, 0.0));

        assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, 100), [5]);
        assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, 5), [5]);
        assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, 3), [3]);
    }

    #[test]
    fn magnitude_exactly_on_radius_is_not_escaped() {
        // 0² + 2 lands exactly on |z|² = 4, then 2² + 2 escapes.
        let on_boundary = Recurrence::Julia(Complex::new(2.0, 0.0));
        let past_boundary = Recurrence::Julia(Complex::new(2.0000001, 0.0));
        let group = LaneGroup::<1>::splat(Complex::ZERO);

        assert_eq!(escape_counts(&group, on_boundary, 10), [1]);
        assert_eq!(escape_counts(&group, past_boundary, 10), [0]);
    }

    #[test]
    fn escaped_lanes_are_frozen_while_others_continue() {
        let samples = [Complex::new(3.0, 0.0), Complex::ZERO];
        let group = LaneGroup::<2>::from_slice(&samples, Complex::ZERO);

        assert_eq!(escape_counts(&group, Recurrence::Mandelbrot, 64), [0, 64]);
    }

    #[test]
    fn lane_widths_agree_with_sequential_path() {
        let samples = sample_grid();

        for recurrence in [Recurrence::Mandelbrot, JULIA] {
            let sequential = counts_with_width::<1>(&samples, recurrence, 200);

            assert_eq!(counts_with_width::<2>(&samples, recurrence, 200), sequential);
            assert_eq!(counts_with_width::<4>(&samples, recurrence, 200), sequential);
            assert_eq!(counts_with_width::<8>(&samples, recurrence, 200), sequential);

            let scalar: Vec<u32> = samples
                .iter()
                .map(|&sample| escape_time_scalar(sample, recurrence, 200))
                .collect();
            assert_eq!(scalar, sequential);
        }
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let c = Complex::new(-0.5, 0.5);
        let group = LaneGroup::<4>::splat(c);

        let first = escape_counts(&group, Recurrence::Mandelbrot, 50);
        let second = escape_counts(&group, Recurrence::Mandelbrot, 50);

        assert_eq!(first, second);
        assert!(first.iter().all(|&count| count <= 50));
        assert_eq!(first[0], escape_time_scalar(c, Recurrence::Mandelbrot, 50));
    }
}
