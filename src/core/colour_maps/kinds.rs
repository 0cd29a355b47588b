#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    HsvCycle,
    BlueWhiteGradient,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::HsvCycle, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HsvCycle => "HSV cycle",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Cycles to the next palette, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
