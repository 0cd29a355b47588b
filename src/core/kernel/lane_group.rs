use crate::core::data::complex::Complex;

/// `N` complex samples stored as separate real and imaginary lanes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LaneGroup<const N: usize> {
    pub real: [f64; N],
    pub imag: [f64; N],
}

impl<const N: usize> LaneGroup<N> {
    #[must_use]
    pub fn splat(value: Complex) -> Self {
        Self {
            real: [value.real; N],
            imag: [value.imag; N],
        }
    }

    #[must_use]
    pub fn from_fn(mut sample: impl FnMut(usize) -> Complex) -> Self {
        let mut group = Self::splat(Complex::ZERO);
        for lane in 0..N {
            let value = sample(lane);
            group.real[lane] = value.real;
            group.imag[lane] = value.imag;
        }
        group
    }

    /// Builds a group from a slice, padding missing lanes with `fill`.
    #[must_use]
    pub fn from_slice(samples: &[Complex], fill: Complex) -> Self {
        Self::from_fn(|lane| samples.get(lane).copied().unwrap_or(fill))
    }

    #[must_use]
    pub fn lane(&self, lane: usize) -> Complex {
        Complex {
            real: self.real[lane],
            imag: self.imag[lane],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        N
    }
}
