//! Helpers for building column expressions checked against the table metadata.

use query_engine_metadata::metadata::{TableInfo, TornadoColumn};
use query_engine_sql::sql::{self, ast::*};

use super::error::Error;

/// The table a query reads from, with the alias it is given in the generated SQL.
pub struct TableContext<'a> {
    info: &'a TableInfo,
    alias: TableAlias,
}

impl<'a> TableContext<'a> {
    pub fn new(info: &'a TableInfo) -> TableContext<'a> {
        TableContext {
            info,
            alias: sql::helpers::make_table_alias(info.table_name.clone()),
        }
    }

    /// The FROM clause for this table.
    pub fn from(&self) -> From {
        From::Table {
            reference: TableReference::DBTable {
                table: TableName(self.info.table_name.clone()),
            },
            alias: self.alias.clone(),
        }
    }

    /// A reference to the column, or an error if the table does not have it.
    pub fn column(&self, column: TornadoColumn) -> Result<Expression, Error> {
        let info = self
            .info
            .column(column.name())
            .ok_or_else(|| Error::ColumnNotFound {
                table: self.info.table_name.clone(),
                column: column.name().to_string(),
            })?;
        Ok(sql::helpers::make_column(
            TableReference::AliasedTable(self.alias.clone()),
            ColumnName(info.name.clone()),
        ))
    }

    /// The column as it should appear in the output, cast to the type we expect.
    ///
    /// Bulk loaders may declare integer columns as REAL, grouping keys included.
    pub fn output(&self, column: TornadoColumn) -> Result<Expression, Error> {
        Ok(sql::helpers::cast(
            self.column(column)?,
            &self.type_name(column),
        ))
    }

    /// `SUM(column)`, cast to the column's type.
    pub fn sum(&self, column: TornadoColumn) -> Result<Expression, Error> {
        Ok(sql::helpers::cast(
            sql::helpers::sum(self.column(column)?),
            &self.type_name(column),
        ))
    }

    /// `AVG(column)`. Always REAL.
    pub fn avg(&self, column: TornadoColumn) -> Result<Expression, Error> {
        Ok(sql::helpers::avg(self.column(column)?))
    }

    fn type_name(&self, column: TornadoColumn) -> String {
        self.info
            .column(column.name())
            .map_or(column.scalar_type(), |info| info.r#type)
            .to_string()
    }
}

/// Pair an expression with the column alias it is output as.
pub fn aliased(name: &str, expression: Expression) -> (ColumnAlias, Expression) {
    (sql::helpers::make_column_alias(name.to_string()), expression)
}
