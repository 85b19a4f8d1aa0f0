//! Constructors for the AST shapes the translation builds.

use super::ast::*;

// Empty clauses //

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

// Aliasing //

pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

pub fn make_table_alias(name: String) -> TableAlias {
    TableAlias { name }
}

/// A column of the given table.
pub fn make_column(table: TableReference, name: ColumnName) -> Expression {
    Expression::ColumnReference(ColumnReference::TableColumn { table, name })
}

// Expressions //

/// `COUNT(*)`
pub fn count_star() -> Expression {
    Expression::Count(CountType::Star)
}

/// `SUM(<expression>)`
pub fn sum(expression: Expression) -> Expression {
    Expression::Aggregate {
        function: AggregateFunction::Sum,
        argument: Box::new(expression),
    }
}

/// `AVG(<expression>)`
pub fn avg(expression: Expression) -> Expression {
    Expression::Aggregate {
        function: AggregateFunction::Avg,
        argument: Box::new(expression),
    }
}

/// `CAST(<expression> AS <type>)`
pub fn cast(expression: Expression, r#type: &str) -> Expression {
    Expression::Cast {
        expression: Box::new(expression),
        r#type: ScalarType(r#type.to_string()),
    }
}

// SELECTs //

/// A SELECT of the given columns with no FROM, grouping or ordering yet.
pub fn simple_select(select_list: Vec<(ColumnAlias, Expression)>) -> Select {
    Select {
        select_list: SelectList(select_list),
        from: None,
        group_by: empty_group_by(),
        order_by: empty_order_by(),
    }
}
