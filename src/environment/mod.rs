use std::{collections::BTreeMap, fmt::Display};

use crate::ast::Variable;

/// The global variable store of one interpreter run.
///
/// Names are stored uppercased, exactly as the lexer produced them, and
/// iterate in ascending order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
	variables: BTreeMap<String, i64>,
}

impl Environment {
	pub fn new() -> Self { Self::default() }

	/// Bind `variable` to `value`, creating or overwriting the entry.
	pub fn assign(&mut self, variable: &Variable, value: i64) { self.variables.insert(variable.name.clone(), value); }

	pub fn lookup(&self, variable: &Variable) -> Option<i64> { self.variables.get(&variable.name).copied() }

	/// Look a name up the way a program would, ignoring case.
	pub fn get(&self, name: &str) -> Option<i64> { self.variables.get(&name.to_uppercase()).copied() }

	pub fn len(&self) -> usize { self.variables.len() }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
		self.variables.iter().map(|(name, value)| (name.as_str(), *value))
	}
}

impl Display for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let entries = self.iter().map(|(name, value)| format!("{name}: {value}")).collect::<Vec<String>>();
		write!(f, "{{{}}}", entries.join(", "))
	}
}

impl From<Environment> for BTreeMap<String, i64> {
	fn from(environment: Environment) -> Self { environment.variables }
}
