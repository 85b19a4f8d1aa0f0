//! Metadata information regarding the `tornado` table.

use std::collections::BTreeMap;
use std::fmt;

use enum_iterator::Sequence;

/// The name of the single table every query reads from.
pub const TORNADO_TABLE: &str = "tornado";

/// The scalar types we expect to find in the database.
///
/// SQLite only knows type affinities, so these are the affinities of the declared column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence)]
pub enum ScalarType {
    Integer,
    Real,
    Text,
}

impl ScalarType {
    /// Work out the type affinity of a declared column type, following the rules in
    /// <https://www.sqlite.org/datatype3.html#determination_of_column_affinity>.
    ///
    /// Returns `None` for NUMERIC and BLOB affinities, which we never declare.
    pub fn from_declared_type(declared: &str) -> Option<ScalarType> {
        let declared = declared.to_ascii_uppercase();
        if declared.contains("INT") {
            Some(ScalarType::Integer)
        } else if ["CHAR", "CLOB", "TEXT"]
            .iter()
            .any(|name| declared.contains(name))
        {
            Some(ScalarType::Text)
        } else if ["REAL", "FLOA", "DOUB"]
            .iter()
            .any(|name| declared.contains(name))
        {
            Some(ScalarType::Real)
        } else {
            None
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Integer => write!(f, "INTEGER"),
            ScalarType::Real => write!(f, "REAL"),
            ScalarType::Text => write!(f, "TEXT"),
        }
    }
}

/// The columns of the `tornado` table that the dashboard relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum TornadoColumn {
    Year,
    Month,
    State,
    Fatalities,
    Injuries,
    TornadoMagnitude,
    TornadoLength,
    TornadoWidth,
    StartLatitude,
    StartLongitude,
}

impl TornadoColumn {
    /// The column name as it appears in the database.
    pub fn name(self) -> &'static str {
        match self {
            TornadoColumn::Year => "year",
            TornadoColumn::Month => "month",
            TornadoColumn::State => "state",
            TornadoColumn::Fatalities => "fatalities",
            TornadoColumn::Injuries => "injuries",
            TornadoColumn::TornadoMagnitude => "tornado_magnitude",
            TornadoColumn::TornadoLength => "tornado_length",
            TornadoColumn::TornadoWidth => "tornado_width",
            TornadoColumn::StartLatitude => "start_latitude",
            TornadoColumn::StartLongitude => "start_longitude",
        }
    }

    pub fn scalar_type(self) -> ScalarType {
        match self {
            TornadoColumn::Year
            | TornadoColumn::Month
            | TornadoColumn::Fatalities
            | TornadoColumn::Injuries
            | TornadoColumn::TornadoMagnitude => ScalarType::Integer,
            TornadoColumn::State => ScalarType::Text,
            TornadoColumn::TornadoLength
            | TornadoColumn::TornadoWidth
            | TornadoColumn::StartLatitude
            | TornadoColumn::StartLongitude => ScalarType::Real,
        }
    }

    pub fn from_name(name: &str) -> Option<TornadoColumn> {
        enum_iterator::all::<TornadoColumn>().find(|column| column.name() == name)
    }
}

impl fmt::Display for TornadoColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Information about a database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table_name: String,
    pub columns: BTreeMap<String, ColumnInfo>,
}

/// Information about a database column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub r#type: ScalarType,
}

impl TableInfo {
    /// The `tornado` table as the queries expect it to look.
    pub fn tornado() -> TableInfo {
        let columns = enum_iterator::all::<TornadoColumn>()
            .map(|column| {
                (
                    column.name().to_string(),
                    ColumnInfo {
                        name: column.name().to_string(),
                        r#type: column.scalar_type(),
                    },
                )
            })
            .collect();
        TableInfo {
            table_name: TORNADO_TABLE.to_string(),
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }
}
