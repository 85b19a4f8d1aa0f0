//! Describe the queries we want to run against the database.

use super::ast::Select;
use super::convert::select_to_sql;
use super::string::SQL;

/// A plan for executing one named query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// The name of the query, used for logging and metrics.
    pub name: String,
    pub query: Select,
}

impl ExecutionPlan {
    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> SQL {
        select_to_sql(&self.query)
    }
}

/// A simple execution plan with only a name and a query.
pub fn simple_exec_plan(name: impl Into<String>, query: Select) -> ExecutionPlan {
    ExecutionPlan {
        name: name.into(),
        query,
    }
}
