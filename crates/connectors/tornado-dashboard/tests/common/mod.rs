//! Common functions used across test cases.

use axum_test_helper::TestClient;

use tests_common::database::{unreachable_connection_uri, TornadoDatabase, TornadoEvent};

/// A handful of events across three states and three years, with one unknown magnitude and one
/// unknown fatality count.
pub fn sample_events() -> Vec<TornadoEvent> {
    vec![
        TornadoEvent::new(2011, 4, "AL")
            .casualties(5, 10)
            .magnitude(4)
            .size(10.0, 100.0)
            .start(33.0, -87.0),
        TornadoEvent::new(2011, 4, "AL")
            .casualties(3, 2)
            .magnitude(3)
            .size(5.0, 50.0)
            .start(33.5, -86.5),
        TornadoEvent::new(2011, 5, "MS")
            .casualties(0, 1)
            .size(1.0, 20.0)
            .start(32.0, -90.0),
        TornadoEvent::new(2010, 5, "TX")
            .casualties(1, 0)
            .magnitude(3)
            .size(3.0, 30.0)
            .start(31.0, -97.0),
        TornadoEvent {
            injuries: Some(4),
            ..TornadoEvent::new(2012, 3, "TX")
                .magnitude(1)
                .size(2.0, 25.0)
                .start(30.5, -96.0)
        },
    ]
}

/// A test client for a router reading from `database`. The database must outlive the client.
pub async fn client_for(database: &TornadoDatabase) -> TestClient {
    client_for_uri(&database.connection_uri()).await
}

/// A test client for a router whose database cannot be opened.
pub async fn unreachable_client() -> TestClient {
    client_for_uri(&unreachable_connection_uri()).await
}

async fn client_for_uri(connection_uri: &str) -> TestClient {
    let pages = tests_common::router::pages_in(env!("CARGO_MANIFEST_DIR"));
    TestClient::new(tests_common::router::create_router(connection_uri, pages).await)
}
