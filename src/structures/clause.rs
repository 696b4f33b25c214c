/*!
Clauses, canonically ordered sets of literals.

A clause is stored as a sorted sequence of literals without duplicates.
So, two clauses are equal exactly when they contain the same literals, regardless of the order in which the literals were given.

A clause without literals is the empty clause, which is unsatisfiable.

# Resolution

The [resolvent](Clause::resolve) of two clauses over a pivot literal is the union of the literals of the clauses, less the pivot and its negation.

```rust
# use otter_mcsat::structures::{atom::Atom, clause::Clause, literal::Literal};
let p = Literal::new(Atom::Variable(0), true);
let q = Literal::new(Atom::Variable(1), true);
let r = Literal::new(Atom::Variable(2), true);

let c1 = Clause::new([p, q]);
let c2 = Clause::new([-p, r, q]);

assert_eq!(c1.resolve(&c2, p), Clause::new([q, r]));
```
*/

use crate::structures::literal::Literal;

/// A canonically ordered set of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// The literals of the clause, in canonical order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Whether the clause contains some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].is_complement(&pair[1]))
    }

    /// The resolvent of the clause and `other` on `pivot`.
    ///
    /// Both `pivot` and the negation of `pivot` are excluded, so it does not matter which clause contains which.
    pub fn resolve(&self, other: &Clause, pivot: Literal) -> Clause {
        let negation = pivot.negate();
        Clause::new(
            self.literals
                .iter()
                .chain(other.literals.iter())
                .copied()
                .filter(|literal| *literal != pivot && *literal != negation),
        )
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            match index {
                0 => write!(f, "{literal}")?,
                _ => write!(f, " {literal}")?,
            }
        }
        write!(f, "}}")
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Clause::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::atom::Atom;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn literal(index: u32, polarity: bool) -> Literal {
        Literal::new(Atom::Variable(index), polarity)
    }

    #[test]
    fn canonical() {
        let a = Clause::new([literal(2, true), literal(0, false), literal(2, true)]);
        let b = Clause::new([literal(0, false), literal(2, true)]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(&literal(0, false)));
        assert!(!a.contains(&literal(0, true)));
    }

    #[test]
    fn tautology() {
        assert!(Clause::new([literal(1, true), literal(1, false)]).is_tautology());
        assert!(!Clause::new([literal(1, true), literal(2, false)]).is_tautology());
    }

    #[test]
    fn resolve_to_empty() {
        let p = literal(0, true);
        let resolvent = Clause::from(p).resolve(&Clause::from(-p), p);
        assert!(resolvent.is_empty());
    }

    #[test]
    fn resolution_soundness() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..500 {
            let pivot = literal(rng.gen_range(0..6), rng.gen_bool(0.5));

            let mut random_clause = |with: Literal| {
                let mut literals = (0..rng.gen_range(0..5))
                    .map(|_| literal(rng.gen_range(0..6), rng.gen_bool(0.5)))
                    .collect::<Vec<_>>();
                literals.push(with);
                Clause::new(literals)
            };

            let c1 = random_clause(pivot);
            let c2 = random_clause(-pivot);
            let resolvent = c1.resolve(&c2, pivot);

            assert!(!resolvent.contains(&pivot));
            assert!(!resolvent.contains(&-pivot));

            let mut deduplicated = resolvent.literals().to_vec();
            deduplicated.dedup();
            assert_eq!(deduplicated.len(), resolvent.len());

            for literal in c1.iter().chain(c2.iter()) {
                if *literal != pivot && *literal != -pivot {
                    assert!(resolvent.contains(literal));
                }
            }
        }
    }
}
