/// Numeric conversion helpers.
///
/// This module provides the float-to-integer conversion used by the modulo
/// operator, which works on the integer parts of its operands.
pub mod num;
