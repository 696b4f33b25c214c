use crate::{
    context::Context,
    dispatch::{library::report::Parser, Dispatch},
    misc::log::targets,
    structures::{
        atom::{Atom, Sort},
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

use std::{collections::HashMap, io::BufRead};

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// Variables are named `var<n>`, and are added when the problem specification is read, or on first use otherwise.
    /// Reading stops once the count of clauses in the problem specification has been read, or on a line beginning with `%`.
    ///
    /// Returns a map from DIMACS variables to the atoms of the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use otter_mcsat::context::Context;
    /// # use otter_mcsat::config::Config;
    /// # use otter_mcsat::dispatch::library::report::Report;
    /// let mut the_context = Context::from_config(Config::default(), None);
    ///
    /// let dimacs = b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2
    ///             0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert_eq!(the_context.counters.original_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    #[allow(clippy::manual_flatten, unused_labels)]
    pub fn read_dimacs(
        &mut self,
        mut reader: impl BufRead,
    ) -> Result<HashMap<isize, Atom>, ErrorKind> {
        let mut atom_map = HashMap::<isize, Atom>::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<Literal> = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;
        let mut expected_clauses: Option<usize> = None;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    if problem_details.nth(1) != Some("cnf") {
                        return Err(err::ParseError::ProblemSpecification.into());
                    }

                    let variable_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification.into()),
                    };

                    let clause_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification.into()),
                    };

                    buffer.clear();

                    if let Some(dispatcher) = &self.dispatcher {
                        let expectation = Parser::Expected(variable_count, clause_count);
                        dispatcher(Dispatch::Parser(expectation));
                    }

                    for index in 1..=variable_count as isize {
                        let variable = self.variable(&format!("var{index}"), Sort::Bool)?;
                        atom_map.insert(index, Atom::Variable(variable));
                    }
                    expected_clauses = Some(clause_count);
                    break;
                }

                // A formula without a problem specification
                _ => break,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            if expected_clauses.is_some_and(|expected| clause_counter >= expected) {
                break 'formula_loop;
            }

            // The first line of the formula may remain from the preamble
            if buffer.is_empty() {
                match reader.read_line(&mut buffer) {
                    Ok(0) => break,
                    Ok(_) => line_counter += 1,
                    Err(_) => return Err(err::ParseError::Line(line_counter).into()),
                }
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}
                _ => {
                    for item in buffer.split_whitespace() {
                        let parsed_int = match item.parse::<isize>() {
                            Ok(int) => int,
                            Err(_) => {
                                log::error!(target: targets::PARSE, "Failed to parse {item} on line {line_counter}");
                                return Err(err::ParseError::Literal(line_counter).into());
                            }
                        };

                        if parsed_int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            self.add_clause(the_clause)?;
                            clause_counter += 1;

                            if expected_clauses.is_some_and(|expected| clause_counter >= expected) {
                                break;
                            }
                            continue;
                        }

                        let Some(variable_int) = parsed_int.checked_abs() else {
                            log::error!(target: targets::PARSE, "No variable for {item} on line {line_counter}");
                            return Err(err::ParseError::Literal(line_counter).into());
                        };

                        let atom = match atom_map.get(&variable_int) {
                            Some(atom) => *atom,
                            None => {
                                let name = format!("var{variable_int}");
                                let variable = self.variable(&name, Sort::Bool)?;
                                atom_map.insert(variable_int, Atom::Variable(variable));
                                Atom::Variable(variable)
                            }
                        };
                        clause_buffer.push(Literal::new(atom, parsed_int.is_positive()));
                    }
                }
            }

            buffer.clear();
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Literals without a terminating 0 were ignored");
        }

        log::info!(target: targets::PARSE, "Read {clause_counter} clauses from {line_counter} lines");

        if let Some(dispatcher) = &self.dispatcher {
            let counts = Parser::Counts(self.variable_db.count(), clause_counter);
            dispatcher(Dispatch::Parser(counts));
        }
        Ok(atom_map)
    }
}
