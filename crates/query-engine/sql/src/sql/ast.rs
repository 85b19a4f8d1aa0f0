//! The subset of SQL the dashboard queries are made of: one SELECT over one table, with
//! aggregates, grouping and ordering.

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: Option<From>,
    pub group_by: GroupBy,
    pub order_by: OrderBy,
}

/// The output columns, each an expression under an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectList(pub Vec<(ColumnAlias, Expression)>);

/// The table a SELECT reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    Table {
        reference: TableReference,
        alias: TableAlias,
    },
}

/// GROUP BY; rendered only when non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub elements: Vec<Expression>,
}

/// ORDER BY; rendered only when non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    ColumnReference(ColumnReference),
    /// An aggregate over the rows of a group.
    Aggregate {
        function: AggregateFunction,
        argument: Box<Expression>,
    },
    Count(CountType),
    /// Convert a value to a storage class. NULL stays NULL.
    Cast {
        expression: Box<Expression>,
        r#type: ScalarType,
    },
}

/// Aggregates that skip NULL arguments, and return NULL when every argument is NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Sum,
    Avg,
}

/// What COUNT counts: every row, or the rows where a column is not NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountType {
    Star,
    Simple(ColumnReference),
}

/// A type name, written out as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// How a column names its table: by the table's own name or by an alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableReference {
    DBTable { table: TableName },
    AliasedTable(TableAlias),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// A column qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnReference {
    TableColumn {
        table: TableReference,
        name: ColumnName,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableAlias {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAlias {
    pub name: String,
}
