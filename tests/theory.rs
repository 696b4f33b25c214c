use std::{cell::RefCell, rc::Rc};

use otter_mcsat::{
    config::Config,
    context::{Context, Dispatcher},
    db::{trail::Reason, variable::VariableDB, VariableKey},
    dispatch::{
        library::{delta, delta::Delta, report::Report, stat::Stat},
        Dispatch,
    },
    procedures::backtrack::BacktrackKind,
    structures::{
        atom::{Atom, Sort, TheoryAtom},
        literal::Literal,
        value::Value,
    },
    types::err::Conflict,
};

/// Either `variable < bound` or `variable >= bound`.
#[derive(Clone, Copy)]
struct Bound {
    variable: VariableKey,
    bound: f64,
    below: bool,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.below {
            true => write!(f, "x{} < {}", self.variable, self.bound),
            false => write!(f, "x{} >= {}", self.variable, self.bound),
        }
    }
}

impl TheoryAtom for Bound {
    fn variables(&self) -> Vec<VariableKey> {
        vec![self.variable]
    }

    fn evaluate(&self, variable_db: &VariableDB) -> Option<bool> {
        let value = variable_db.value_of(self.variable)?.as_rat()?;
        match self.below {
            true => Some(value < self.bound),
            false => Some(value >= self.bound),
        }
    }

    fn negate(&self) -> Rc<dyn TheoryAtom> {
        Rc::new(Bound {
            below: !self.below,
            ..*self
        })
    }

    fn propagate(
        &self,
        this: Atom,
        unassigned: VariableKey,
        context: &mut Context,
    ) -> Result<(), Conflict> {
        if let Some(truth) = context.value_of(this) {
            let value = match self.below == truth {
                true => self.bound - 1.0,
                false => self.bound,
            };
            context.semantic_assign(unassigned, Value::Rat(value));
        }
        Ok(())
    }
}

/// `variable >= bound`, without a propagation hook.
#[derive(Clone, Copy)]
struct AtLeast {
    variable: VariableKey,
    bound: f64,
}

impl std::fmt::Display for AtLeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{} >= {}", self.variable, self.bound)
    }
}

impl TheoryAtom for AtLeast {
    fn variables(&self) -> Vec<VariableKey> {
        vec![self.variable]
    }

    fn evaluate(&self, variable_db: &VariableDB) -> Option<bool> {
        let value = variable_db.value_of(self.variable)?.as_rat()?;
        Some(value >= self.bound)
    }

    fn negate(&self) -> Rc<dyn TheoryAtom> {
        Rc::new(Bound {
            variable: self.variable,
            bound: self.bound,
            below: true,
        })
    }
}

fn bound(ctx: &mut Context, variable: VariableKey, bound: f64) -> Literal {
    let atom = ctx
        .theory_atom(Rc::new(Bound {
            variable,
            bound,
            below: true,
        }))
        .unwrap();
    Literal::new(atom, true)
}

fn rational(ctx: &Context, variable: VariableKey) -> Option<f64> {
    ctx.variable_db.value_of(variable).and_then(|value| value.as_rat())
}

mod theory {
    use super::*;

    #[test]
    fn propagation_from_a_unit() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = bound(&mut ctx, x, 5.0);

        assert!(ctx.add_clause(a).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(rational(&ctx, x), Some(4.0));
        assert_eq!(ctx.value_of(a.atom()), Some(true));
        assert_eq!(ctx.counters.semantic_propagations, 1);
        assert_eq!(ctx.counters.decisions, 0);
    }

    #[test]
    fn evaluation_after_a_decision() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = bound(&mut ctx, x, 5.0);

        ctx.decide(Atom::Variable(x), Value::Rat(7.0));
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.value_of(a.atom()), Some(false));
        assert_eq!(ctx.trail.level_of(a.atom()), Some(1));
        assert_eq!(ctx.trail.reason_of(a.atom()), Some(Reason::SemanticEvaluation));
        assert_eq!(ctx.counters.semantic_evaluations, 1);
    }

    #[test]
    fn negation() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = bound(&mut ctx, x, 5.0);
        let not_a = ctx.negate_theory_atom(a.atom()).unwrap();

        let Atom::Theory(key) = not_a else {
            panic!("Expected a theory atom");
        };
        assert_eq!(ctx.theory(key).unwrap().to_string(), "x0 >= 5");

        assert!(ctx.add_clause(Literal::new(not_a, true)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(rational(&ctx, x), Some(5.0));
        assert_eq!(ctx.value_of(not_a), Some(true));
        assert_eq!(ctx.value_of(a.atom()), Some(false));
    }

    #[test]
    fn learning_from_an_evaluation() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let y = ctx.bool_variable("y").unwrap();
        let a = bound(&mut ctx, x, 5.0);

        assert!(ctx.add_clause(vec![-a, y]).is_ok());
        assert!(ctx.add_clause(vec![-a, -y]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(a.atom()), Some(false));
        assert_eq!(ctx.trail.level_of(a.atom()), Some(0));
        assert_eq!(rational(&ctx, x), Some(5.0));
        assert_eq!(ctx.counters.learned_clauses, 1);
    }

    #[test]
    fn semantic_split() {
        let kinds = Rc::new(RefCell::new(Vec::default()));
        let dispatch_kinds = kinds.clone();
        let dispatcher: Box<Dispatcher> = Box::new(move |dispatch: Dispatch| {
            if let Dispatch::Delta(Delta::Trail(delta::Trail::Backtrack { kind, .. })) = dispatch {
                dispatch_kinds.borrow_mut().push(kind);
            }
        });

        let mut ctx = Context::from_config(Config::default(), Some(dispatcher));
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = bound(&mut ctx, x, 5.0);
        let b = bound(&mut ctx, x, 3.0);

        assert!(ctx.add_clause(vec![-a, -b]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(kinds.borrow().as_slice(), &[BacktrackKind::SemanticSplit]);

        assert_eq!(ctx.value_of(a.atom()), Some(false));
        assert_eq!(ctx.trail.reason_of(a.atom()), Some(Reason::Decided));
        assert_eq!(ctx.value_of(b.atom()), Some(false));
        assert_eq!(rational(&ctx, x), Some(5.0));
        assert_eq!(ctx.counters.learned_clauses, 0);
    }

    #[test]
    fn stats_on_finish() {
        let stats = Rc::new(RefCell::new(Vec::default()));
        let dispatch_stats = stats.clone();
        let dispatcher: Box<Dispatcher> = Box::new(move |dispatch: Dispatch| {
            if let Dispatch::Stat(stat) = dispatch {
                dispatch_stats.borrow_mut().push(stat);
            }
        });

        let mut ctx = Context::from_config(Config::default(), Some(dispatcher));
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let y = ctx.bool_variable("y").unwrap();
        let a = bound(&mut ctx, x, 5.0);

        assert!(ctx.add_clause(vec![a, y]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.semantic_evaluations, 1);

        let stats = stats.borrow();
        assert!(stats.iter().any(|stat| matches!(stat, Stat::Variables(2))));
        assert!(stats.iter().any(|stat| matches!(stat, Stat::OriginalClauses(1))));
        assert!(stats
            .iter()
            .any(|stat| matches!(stat, Stat::SemanticEvaluations(1))));
        assert!(stats.iter().any(|stat| matches!(stat, Stat::Decisions(2))));
    }

    #[test]
    fn boolean_conflict() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let y = ctx.bool_variable("y").unwrap();
        let a = bound(&mut ctx, x, 5.0);

        assert!(ctx.add_clause(vec![a, y]).is_ok());
        assert!(ctx.add_clause(-y).is_ok());
        assert!(ctx.add_clause(-a).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.decisions, 0);
    }

    #[test]
    fn disagreement_without_a_hook() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = ctx
            .theory_atom(Rc::new(AtLeast { variable: x, bound: 5.0 }))
            .unwrap();

        assert!(ctx.add_clause(Literal::new(a, true)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.report(), Report::Unknown);

        assert_eq!(ctx.value_of(a), Some(true));
        assert_eq!(rational(&ctx, x), Some(0.0));
        assert_eq!(ctx.inconsistent_theory_atom(), Some(0));
        assert_eq!(ctx.counters.semantic_evaluations, 0);
    }

    #[test]
    fn agreement_without_a_hook() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();
        let a = ctx
            .theory_atom(Rc::new(AtLeast { variable: x, bound: 0.0 }))
            .unwrap();

        assert!(ctx.add_clause(Literal::new(a, true)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(a), Some(true));
        assert_eq!(rational(&ctx, x), Some(0.0));
        assert_eq!(ctx.inconsistent_theory_atom(), None);
    }

    #[test]
    fn rational_literals() {
        let mut ctx = Context::from_config(Config::default(), None);
        let x = ctx.variable("x", Sort::Rat).unwrap();

        assert!(ctx.add_clause(Literal::new(Atom::Variable(x), true)).is_err());
        assert!(ctx.add_clause(Literal::new(Atom::Theory(0), true)).is_err());
        assert_eq!(ctx.counters.original_clauses, 0);
    }
}
