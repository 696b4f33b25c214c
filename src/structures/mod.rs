/*!
The structures of a formula.

- [Values](value) are either Boolean or rational.
- [Atoms](atom) are either variables, or theory atoms whose value follows from the values of some variables.
- [Literals](literal) pair an atom with a polarity.
- [Clauses](clause) are canonically ordered sets of literals.
*/

pub mod atom;
pub mod clause;
pub mod literal;
pub mod value;
