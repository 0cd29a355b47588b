/// Number of samples evaluated together by one kernel call.
///
/// `One` is the sequential path; wider groups give the compiler room to
/// vectorise the per-lane loop. Results are identical for every width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneWidth {
    One,
    Two,
    #[default]
    Four,
    Eight,
}

impl LaneWidth {
    pub const ALL: &'static [Self] = &[Self::One, Self::Two, Self::Four, Self::Eight];

    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::One => "1 lane (sequential)",
            Self::Two => "2 lanes",
            Self::Four => "4 lanes",
            Self::Eight => "8 lanes",
        }
    }
}
