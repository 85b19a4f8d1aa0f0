//! Temporary SQLite databases holding a `tornado` table.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

const CREATE_TORNADO_TABLE: &str = r"
CREATE TABLE tornado (
    year INTEGER NOT NULL,
    month INTEGER NOT NULL,
    state TEXT NOT NULL,
    fatalities INTEGER,
    injuries INTEGER,
    tornado_magnitude INTEGER,
    tornado_length REAL,
    tornado_width REAL,
    start_latitude REAL,
    start_longitude REAL
)";

const INSERT_TORNADO: &str = r"
INSERT INTO tornado (
    year, month, state, fatalities, injuries, tornado_magnitude,
    tornado_length, tornado_width, start_latitude, start_longitude
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// One row of the `tornado` table. Everything but the year, month and state starts out null.
#[derive(Debug, Clone, PartialEq)]
pub struct TornadoEvent {
    pub year: i64,
    pub month: i64,
    pub state: String,
    pub fatalities: Option<i64>,
    pub injuries: Option<i64>,
    pub tornado_magnitude: Option<i64>,
    pub tornado_length: Option<f64>,
    pub tornado_width: Option<f64>,
    pub start_latitude: Option<f64>,
    pub start_longitude: Option<f64>,
}

impl TornadoEvent {
    pub fn new(year: i64, month: i64, state: &str) -> Self {
        Self {
            year,
            month,
            state: state.to_string(),
            fatalities: None,
            injuries: None,
            tornado_magnitude: None,
            tornado_length: None,
            tornado_width: None,
            start_latitude: None,
            start_longitude: None,
        }
    }

    #[must_use]
    pub fn casualties(mut self, fatalities: i64, injuries: i64) -> Self {
        self.fatalities = Some(fatalities);
        self.injuries = Some(injuries);
        self
    }

    #[must_use]
    pub fn magnitude(mut self, magnitude: i64) -> Self {
        self.tornado_magnitude = Some(magnitude);
        self
    }

    #[must_use]
    pub fn size(mut self, length: f64, width: f64) -> Self {
        self.tornado_length = Some(length);
        self.tornado_width = Some(width);
        self
    }

    #[must_use]
    pub fn start(mut self, latitude: f64, longitude: f64) -> Self {
        self.start_latitude = Some(latitude);
        self.start_longitude = Some(longitude);
        self
    }
}

/// A database file in a temporary directory, removed when this is dropped.
pub struct TornadoDatabase {
    _dir: TempDir,
    path: PathBuf,
}

impl TornadoDatabase {
    /// A database whose `tornado` table holds exactly `events`.
    pub async fn with_events(events: &[TornadoEvent]) -> anyhow::Result<Self> {
        Self::create(CREATE_TORNADO_TABLE, events).await
    }

    /// A database whose `tornado` table is created by `create_table` and left empty.
    pub async fn with_table(create_table: &str) -> anyhow::Result<Self> {
        Self::create(create_table, &[]).await
    }

    async fn create(create_table: &str, events: &[TornadoEvent]) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tornado.sqlite");

        // a rollback journal, so that read-only connections need no extra files
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let mut connection = SqliteConnection::connect_with(&options).await?;

        sqlx::query(create_table).execute(&mut connection).await?;
        for event in events {
            sqlx::query(INSERT_TORNADO)
                .bind(event.year)
                .bind(event.month)
                .bind(&event.state)
                .bind(event.fatalities)
                .bind(event.injuries)
                .bind(event.tornado_magnitude)
                .bind(event.tornado_length)
                .bind(event.tornado_width)
                .bind(event.start_latitude)
                .bind(event.start_longitude)
                .execute(&mut connection)
                .await?;
        }
        connection.close().await?;

        Ok(Self { _dir: dir, path })
    }

    /// A database with an empty `tornado` table.
    pub async fn empty() -> anyhow::Result<Self> {
        Self::with_events(&[]).await
    }

    pub fn connection_uri(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }
}

/// A connection string pointing at a file that does not exist, in a directory that does not
/// exist either.
pub fn unreachable_connection_uri() -> String {
    "sqlite:///nonexistent/tornado-dashboard/tornado.sqlite".to_string()
}
