/*!
A database of variables.

The database stores, for each variable:
- A unique name.
- A [Sort], which fixes the priority of the variable when deciding.
- The current value of the variable, if any.

Variables are indexed by a [VariableKey], in the order the variables were added.

In addition, the database stores:
- A [priority queue](crate::generic::priority_queue) of the variables without a value, for decisions.
- [Watches] on the variables of each theory atom, for semantic propagation.

On the watches, a variable with a value is [FALSIFIED] and a variable without a value is [UNDETERMINED].
So, the watch set of a theory atom is unit exactly when one variable of the atom remains without a value, and violated exactly when every variable of the atom has a value.
*/

use std::collections::HashMap;

use crate::{
    db::{
        watches::{Watches, FALSIFIED, UNDETERMINED},
        TheoryKey, VariableKey,
    },
    generic::priority_queue::LazyPriorityQueue,
    misc::log::targets,
    structures::{atom::Sort, value::Value},
    types::err::{self},
};

/// A variable, as stored in the variable database.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    sort: Sort,
    value: Option<Value>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn value(&self) -> Option<Value> {
        self.value
    }
}

#[derive(Default)]
pub struct VariableDB {
    variables: Vec<Variable>,
    names: HashMap<String, VariableKey>,
    watches: Watches<VariableKey, TheoryKey>,
    queue: LazyPriorityQueue,
}

impl VariableDB {
    /// Adds a variable without a value, and queues the variable for decision.
    pub fn add(&mut self, name: &str, sort: Sort) -> Result<VariableKey, err::VariableDBError> {
        if self.names.contains_key(name) {
            log::error!(target: targets::VARIABLE_DB, "Duplicate variable: {name}");
            return Err(err::VariableDBError::DuplicateVariable(name.to_string()));
        }

        let key = self.variables.len() as VariableKey;
        self.variables.push(Variable {
            name: name.to_string(),
            sort,
            value: None,
        });
        self.names.insert(name.to_string(), key);
        self.queue.push(key as usize, sort.priority());

        log::trace!(target: targets::VARIABLE_DB, "Added {name} as {key}");
        Ok(key)
    }

    /// Sets the value of a variable, and removes the variable from the decision queue.
    ///
    /// # Panics
    /// If no variable has the key.
    pub fn assign(&mut self, key: VariableKey, value: Value) {
        self.variables[key as usize].value = Some(value);
        self.queue.remove(key as usize);
        self.watches.set(key, FALSIFIED);
    }

    /// Clears the value of a variable, and returns the variable to the decision queue.
    ///
    /// # Panics
    /// If no variable has the key.
    pub fn deassign(&mut self, key: VariableKey) {
        let variable = &mut self.variables[key as usize];
        variable.value = None;
        self.queue.push(key as usize, variable.sort.priority());
        self.watches.set(key, UNDETERMINED);
    }

    /// Removes and returns the variable without a value of highest priority, if one exists.
    pub fn pop(&mut self) -> Option<VariableKey> {
        self.queue.pop().map(|index| index as VariableKey)
    }

    /// Whether some variable is without a value.
    pub fn can_decide(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn value_of(&self, key: VariableKey) -> Option<Value> {
        self.variables.get(key as usize).and_then(|variable| variable.value)
    }

    pub fn get(&self, key: VariableKey) -> Result<&Variable, err::VariableDBError> {
        self.variables
            .get(key as usize)
            .ok_or(err::VariableDBError::UnknownVariable)
    }

    /// The key of the variable with the given name, if one exists.
    pub fn key_of(&self, name: &str) -> Option<VariableKey> {
        self.names.get(name).copied()
    }

    pub fn count(&self) -> usize {
        self.variables.len()
    }

    /// Each variable together with its key, in the order of addition.
    pub fn iter(&self) -> impl Iterator<Item = (VariableKey, &Variable)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(index, variable)| (index as VariableKey, variable))
    }

    /// Watches `variables` on behalf of a theory atom.
    pub fn watch(&mut self, owner: TheoryKey, variables: impl IntoIterator<Item = VariableKey>) {
        self.watches.add_watch(owner, variables);
    }

    /// Each (theory atom, variable) pair such that the variable is the only variable of the atom without a value.
    pub fn semantic_units(&self) -> impl Iterator<Item = (TheoryKey, VariableKey)> + '_ {
        self.watches.units()
    }

    /// Each theory atom such that every variable of the atom has a value.
    pub fn fully_assigned(&self) -> impl Iterator<Item = TheoryKey> + '_ {
        self.watches.violated()
    }

    /// The watches on variables.
    pub fn watches(&self) -> &Watches<VariableKey, TheoryKey> {
        &self.watches
    }
}
