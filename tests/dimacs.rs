mod dimacs {
    use otter_mcsat::{
        config::Config,
        context::Context,
        dispatch::library::report::Report,
        structures::atom::Atom,
        types::err::{ErrorKind, ParseError},
    };

    /// Three pigeons, two holes.
    const PIGEONHOLE: &[u8] = b"
c pigeon i in hole j as 2(i - 1) + j
p cnf 6 9
1 2 0
3 4 0
5 6 0
-1 -3 0
-1 -5 0
-3 -5 0
-2 -4 0
-2 -6 0
-4 -6 0
";

    #[test]
    fn pigeonhole() {
        let mut the_context = Context::from_config(Config::default(), None);
        let atom_map = the_context.read_dimacs(PIGEONHOLE).unwrap();

        assert_eq!(atom_map.len(), 6);
        assert_eq!(the_context.counters.original_clauses, 9);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn pigeonhole_without_learning() {
        let config = Config {
            learning: false,
            ..Config::default()
        };
        let mut the_context = Context::from_config(config, None);
        assert!(the_context.read_dimacs(PIGEONHOLE).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn model() {
        let mut the_context = Context::from_config(Config::default(), None);
        let dimacs = b"
p cnf 3 3
1 2 0
-1 0
-2 3 0
";
        let atom_map = the_context.read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let value = |variable: isize| the_context.value_of(atom_map[&variable]);
        assert_eq!(value(1), Some(false));
        assert_eq!(value(2), Some(true));
        assert_eq!(value(3), Some(true));
    }

    #[test]
    fn trailing_percent() {
        let mut the_context = Context::from_config(Config::default(), None);
        let dimacs = b"
p cnf 2 5
1 2 0
-1 0
%
0
";
        assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
        assert_eq!(the_context.counters.original_clauses, 2);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn variables_beyond_the_header() {
        let mut the_context = Context::from_config(Config::default(), None);
        let dimacs = b"
p cnf 1 1
1 -4 0
";
        let atom_map = the_context.read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(the_context.variable_db.count(), 2);
        assert_eq!(atom_map.get(&4), Some(&Atom::Variable(1)));
        assert_eq!(the_context.variable_db.key_of("var4"), Some(1));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default(), None);
        assert!(the_context.read_dimacs(b"c nothing here\n".as_slice()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn bad_problem() {
        let mut the_context = Context::from_config(Config::default(), None);
        assert_eq!(
            the_context.read_dimacs(b"p dnf 2 1\n1 0\n".as_slice()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }
}
