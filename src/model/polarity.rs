use std::fmt;

/// Hydrophobic/polar classification of a residue, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Hydrophobic,
    Polar,
}

impl Polarity {
    /// Accepts 'H'/'P' in either case; anything else is not a label.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Self::Hydrophobic),
            'P' => Some(Self::Polar),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Hydrophobic => 'H',
            Self::Polar => 'P',
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
