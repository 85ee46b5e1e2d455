#[derive(thiserror::Error, Debug, PartialEq)]
/// Errors that can occur during interpretation
pub enum InterpreterError {
	/// A variable was read before any assignment to it
	#[error("line {line}: Undefined variable '{name}'")]
	UndefinedVariable { name: String, line: usize },
	/// Integer division with a zero divisor
	#[error("line {line}: Division by zero")]
	DivisionByZero { line: usize },
	/// The result does not fit in the integer type
	#[error("line {line}: Integer overflow in {operation}")]
	Overflow { operation: String, line: usize },
}
