//! Tree-walking interpreter.
//!
//! The interpreter lets the parser finish the whole program first, then walks
//! the abstract syntax tree depth-first. Expressions evaluate to integers,
//! statements only change the global `Environment`.
//!
//! # Node Types
//!
//! - **Number**: its literal value
//! - **Variable**: a lookup in the environment, undefined names are an error
//! - **Unary**: `+` (identity), `-` (negation)
//! - **Binary**: `+`, `-`, `*`, `/` (floor division), left operand first
//! - **Assign**: evaluates the value and stores it under the target name
//! - **Compound**: runs its statements in order
//! - **NoOp**: nothing
//!
//! A failing statement stops the run where it is. Assignments made before it
//! stay in the environment.

mod arithmetic;

use crate::{
	SpiError,
	ast::{Expression, Statement},
	environment::Environment,
	error::interpreter::InterpreterError,
	parser::Parser,
};

/// Interpreter owning the global store of one run.
#[derive(Default, Debug)]
pub struct Interpreter {
	environment: Environment,
}

impl Interpreter {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Parse the program to completion, then execute it in an empty environment.
	pub fn interpret(&mut self, parser: Parser<'_>) -> Result<(), SpiError> {
		self.environment = Environment::new();
		let program = parser.parse()?;
		self.execute(&program)?;
		Ok(())
	}

	/// Execute a statement against the environment.
	pub fn execute(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Compound(statements) => {
				for statement in statements {
					self.execute(statement)?;
				}
			}
			Statement::Assign { target, value } => {
				let value = self.evaluate(value)?;
				log::debug!("line {}: {} := {value}", target.line, target.name);
				self.environment.assign(target, value);
			}
			Statement::NoOp => {}
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expression: &Expression) -> Result<i64, InterpreterError> {
		match expression {
			Expression::Number(n) => Ok(*n),
			Expression::Variable(variable) => self.environment.lookup(variable).ok_or_else(|| {
				InterpreterError::UndefinedVariable { name: variable.name.clone(), line: variable.line }
			}),
			Expression::Unary { operator, operand, line } => {
				let operand = self.evaluate(operand)?;
				arithmetic::unary(*operator, operand, *line)
			}
			Expression::Binary { left, operator, right, line } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				arithmetic::binary(*operator, left, right, *line)
			}
		}
	}

	pub fn environment(&self) -> &Environment { &self.environment }

	pub fn into_environment(self) -> Environment { self.environment }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::Lexer;

	fn run(input: &str) -> (Interpreter, Result<(), SpiError>) {
		let mut interpreter = Interpreter::new();
		let result =
			Parser::new(Lexer::new(input)).map_err(SpiError::from).and_then(|parser| interpreter.interpret(parser));
		(interpreter, result)
	}

	/// Evaluate `expression` as the value of a single assignment.
	fn eval(expression: &str) -> Result<i64, SpiError> {
		let (interpreter, result) = run(&format!("BEGIN result := {expression} END."));
		result?;
		Ok(interpreter.environment().get("result").expect("result is assigned"))
	}

	#[test]
	fn left_to_right() {
		assert_eq!(eval("7 - 3 + 2 - 1").unwrap(), 5);
		assert_eq!(eval("100 / 10 / 5").unwrap(), 2);
	}

	#[test]
	fn precedence() {
		assert_eq!(eval("7 + 3 * 2").unwrap(), 13);
		assert_eq!(eval("(7 + 3) * 2").unwrap(), 20);
		assert_eq!(eval("7 + 3 * (10 / (12 / (3 + 1) - 1))").unwrap(), 22);
	}

	#[test]
	fn floor_division() {
		assert_eq!(eval("7 / 2").unwrap(), 3);
		assert_eq!(eval("-7 / 2").unwrap(), -4);
		assert_eq!(eval("7 / -2").unwrap(), -4);
	}

	#[test]
	fn unary_chains() {
		assert_eq!(eval("- -5").unwrap(), 5);
		assert_eq!(eval("+ -3").unwrap(), -3);
		assert_eq!(eval("5 - - - + - 3").unwrap(), 8);
		assert_eq!(eval("-(2 * 3)").unwrap(), -6);
	}

	#[test]
	fn assignments_build_the_store() {
		let (interpreter, result) = run("BEGIN a := 5; b := a + 1 END.");
		assert!(result.is_ok());
		assert_eq!(interpreter.environment().to_string(), "{A: 5, B: 6}");
	}

	#[test]
	fn reassignment_reads_old_value() {
		let (interpreter, result) = run("BEGIN a := 1; A := a + 1; a := a * 10 END.");
		assert!(result.is_ok());
		assert_eq!(interpreter.environment().get("a"), Some(20));
		assert_eq!(interpreter.environment().len(), 1);
	}

	#[test]
	fn undefined_variable() {
		let (_, result) = run("BEGIN a := b END.");
		match result {
			Err(SpiError::RuntimeError(InterpreterError::UndefinedVariable { name, line })) => {
				assert_eq!(name, "B");
				assert_eq!(line, 1);
			}
			other => panic!("expected an undefined variable error, got {other:?}"),
		}
	}

	#[test]
	fn failure_keeps_earlier_assignments() {
		let (interpreter, result) = run("BEGIN a := 1; BEGIN b := 2; c := 1 / 0 END; d := 4 END.");
		assert!(matches!(result, Err(SpiError::RuntimeError(InterpreterError::DivisionByZero { .. }))));
		assert_eq!(interpreter.environment().to_string(), "{A: 1, B: 2}");
	}

	#[test]
	fn parse_errors_run_nothing() {
		let (interpreter, result) = run("BEGIN a := 1; b := 2 END");
		assert!(matches!(result, Err(SpiError::SyntaxError(_))));
		assert!(interpreter.environment().is_empty());
	}

	#[test]
	fn overflow() {
		let overflow = eval("9223372036854775807 + 1");
		assert!(matches!(overflow, Err(SpiError::RuntimeError(InterpreterError::Overflow { .. }))));
		assert_eq!(eval("-9223372036854775807 - 1").unwrap(), i64::MIN);
		assert!(eval("(-9223372036854775807 - 1) / -1").is_err());
	}

	#[test]
	fn runs_do_not_share_state() {
		let (first, _) = run("BEGIN a := 1 END.");
		let (second, result) = run("BEGIN b := a END.");
		assert_eq!(first.environment().get("a"), Some(1));
		assert!(result.is_err());
		assert!(second.environment().is_empty());
	}

	#[test]
	fn reused_interpreter_starts_empty() {
		let mut interpreter = Interpreter::new();
		interpreter.interpret(Parser::new(Lexer::new("BEGIN a := 1 END.")).unwrap()).unwrap();
		assert_eq!(interpreter.environment().to_string(), "{A: 1}");

		let result = interpreter.interpret(Parser::new(Lexer::new("BEGIN b := a END.")).unwrap());
		match result {
			Err(SpiError::RuntimeError(InterpreterError::UndefinedVariable { name, .. })) => assert_eq!(name, "A"),
			other => panic!("expected an undefined variable error, got {other:?}"),
		}
		assert!(interpreter.environment().is_empty());

		interpreter.interpret(Parser::new(Lexer::new("BEGIN c := 3 END.")).unwrap()).unwrap();
		assert_eq!(interpreter.environment().to_string(), "{C: 3}");
	}

	#[test]
	fn execute_without_parser() {
		use crate::ast::{BinaryOperator, Variable};

		let x = Variable::new("X", 1);
		let program = Statement::Compound(vec![
			Statement::assign(x.clone(), Box::new(Expression::Number(4))),
			Statement::NoOp,
			Statement::assign(
				Variable::new("Y", 1),
				Expression::binary(
					Box::new(Expression::Variable(x)),
					BinaryOperator::Multiply,
					Box::new(Expression::Number(3)),
					1,
				),
			),
		]);
		let mut interpreter = Interpreter::new();
		interpreter.execute(&program).unwrap();
		assert_eq!(interpreter.into_environment().to_string(), "{X: 4, Y: 12}");
	}
}
