//! SQL AST types, helpers, and conversion to SQL strings.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
