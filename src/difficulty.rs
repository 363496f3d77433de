use core::{convert::Infallible, fmt, str::FromStr};

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Take a win, else block, else random.
    Medium,
    /// Full minimax search.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a free-text label. Matching ignores ASCII case and anything
    /// unrecognised becomes [`Difficulty::Easy`].
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("hard") {
            Difficulty::Hard
        } else if label.eq_ignore_ascii_case("medium") {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from_label(s))
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Difficulty::from_label(label)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
