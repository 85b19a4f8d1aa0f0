use query_engine_sql::sql::ast::*;
use query_engine_sql::sql::convert::select_to_sql;
use query_engine_sql::sql::helpers;

fn bamba() -> (From, TableReference) {
    let alias = helpers::make_table_alias("bamba".to_string());
    (
        From::Table {
            reference: TableReference::DBTable {
                table: TableName("bamba".to_string()),
            },
            alias: alias.clone(),
        },
        TableReference::AliasedTable(alias),
    )
}

#[test]
fn it_converts_simple_select() {
    let (from, table) = bamba();
    let mut select = helpers::simple_select(vec![(
        helpers::make_column_alias("x".to_string()),
        helpers::make_column(table, ColumnName("x".to_string())),
    )]);
    select.from = Some(from);

    insta::assert_snapshot!(
        select_to_sql(&select).sql,
        @r#"SELECT "bamba"."x" AS "x" FROM "bamba" AS "bamba""#
    );
}

#[test]
fn it_converts_grouped_aggregates_with_ordering() {
    let (from, table) = bamba();
    let x = helpers::make_column(table.clone(), ColumnName("x".to_string()));
    let y = helpers::make_column(table, ColumnName("y".to_string()));
    let mut select = helpers::simple_select(vec![
        (helpers::make_column_alias("x".to_string()), x.clone()),
        (helpers::make_column_alias("total".to_string()), helpers::sum(y.clone())),
        (helpers::make_column_alias("mean".to_string()), helpers::avg(y.clone())),
        (
            helpers::make_column_alias("whole".to_string()),
            helpers::cast(y, "INTEGER"),
        ),
        (helpers::make_column_alias("n".to_string()), helpers::count_star()),
    ]);
    select.from = Some(from);
    select.group_by = GroupBy {
        elements: vec![x.clone()],
    };
    select.order_by = OrderBy {
        elements: vec![OrderByElement {
            target: x,
            direction: OrderByDirection::Desc,
        }],
    };

    insta::assert_snapshot!(
        select_to_sql(&select).sql,
        @r#"SELECT "bamba"."x" AS "x", SUM("bamba"."y") AS "total", AVG("bamba"."y") AS "mean", CAST("bamba"."y" AS INTEGER) AS "whole", COUNT(*) AS "n" FROM "bamba" AS "bamba" GROUP BY "bamba"."x" ORDER BY "bamba"."x" DESC"#
    );
}

#[test]
fn it_escapes_quotes_in_identifiers() {
    let table = TableReference::DBTable {
        table: TableName("odd\"name".to_string()),
    };
    let select = helpers::simple_select(vec![(
        helpers::make_column_alias("a\"b".to_string()),
        Expression::Count(CountType::Simple(ColumnReference::TableColumn {
            table,
            name: ColumnName("c".to_string()),
        })),
    )]);

    assert_eq!(
        select_to_sql(&select).sql,
        r#"SELECT COUNT("odd""name"."c") AS "a""b""#
    );
}
