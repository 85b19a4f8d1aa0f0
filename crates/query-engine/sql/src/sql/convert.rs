//! Render the SQL AST as a SQL string.

use super::ast::*;
use super::string::SQL;

/// Render a whole SELECT statement.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Render each item, separated by commas.
fn comma_separated<T>(sql: &mut SQL, items: &[T], render: impl Fn(&T, &mut SQL)) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            sql.append_syntax(", ");
        }
        render(item, sql);
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");
        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            sql.append_syntax(" ");
            from.to_sql(sql);
        }

        self.group_by.to_sql(sql);
        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        comma_separated(sql, &self.0, |(alias, expression), sql| {
            expression.to_sql(sql);
            sql.append_syntax(" AS ");
            alias.to_sql(sql);
        });
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            From::Table { reference, alias } => {
                sql.append_syntax("FROM ");
                reference.to_sql(sql);
                sql.append_syntax(" AS ");
                alias.to_sql(sql);
            }
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" GROUP BY ");
            comma_separated(sql, &self.elements, Expression::to_sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            comma_separated(sql, &self.elements, OrderByElement::to_sql);
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        sql.append_syntax(match self.direction {
            OrderByDirection::Asc => " ASC",
            OrderByDirection::Desc => " DESC",
        });
    }
}

impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Expression::ColumnReference(column_reference) => column_reference.to_sql(sql),
            Expression::Aggregate { function, argument } => {
                sql.append_syntax(function.name());
                sql.append_syntax("(");
                argument.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Count(count_type) => {
                sql.append_syntax("COUNT(");
                match count_type {
                    CountType::Star => sql.append_syntax("*"),
                    CountType::Simple(column) => column.to_sql(sql),
                }
                sql.append_syntax(")");
            }
            Expression::Cast { expression, r#type } => {
                sql.append_syntax("CAST(");
                expression.to_sql(sql);
                sql.append_syntax(" AS ");
                sql.append_syntax(&r#type.0);
                sql.append_syntax(")");
            }
        }
    }
}

impl AggregateFunction {
    pub fn name(self) -> &'static str {
        match self {
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Avg => "AVG",
        }
    }
}

// names

impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            TableReference::DBTable { table } => sql.append_identifier(&table.0),
            TableReference::AliasedTable(alias) => alias.to_sql(sql),
        }
    }
}

impl TableAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            ColumnReference::TableColumn { table, name } => {
                table.to_sql(sql);
                sql.append_syntax(".");
                sql.append_identifier(&name.0);
            }
        }
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}
