//! Literals, atoms paired with a polarity.

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
///
/// Literals are ordered by atom, and then by polarity, so a literal and its negation are adjacent in a sorted sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    atom: Atom,
    polarity: bool,
}

impl Literal {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    pub fn atom(&self) -> Atom {
        self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal with the same atom and opposite polarity.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// Whether `other` is the negation of the literal.
    pub fn is_complement(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complements() {
        let p = Literal::new(Atom::Variable(0), true);
        let q = Literal::new(Atom::Variable(1), true);

        assert!(p.is_complement(&-p));
        assert!(!p.is_complement(&p));
        assert!(!p.is_complement(&-q));
        assert_eq!(-(-p), p);
        assert!(-p < p);
        assert!(p < -q);
    }
}
