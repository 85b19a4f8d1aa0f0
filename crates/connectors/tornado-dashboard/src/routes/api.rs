//! One `GET` endpoint per dashboard query, each answering with a JSON array of row objects.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use query_engine_translation::translation::query::QueryName;

use crate::error::ServerError;
use crate::state::AppState;

pub(super) fn router() -> Router<AppState> {
    enum_iterator::all::<QueryName>().fold(Router::new(), |router, query_name| {
        router.route(
            &format!("/{}", query_name.endpoint()),
            get(move |State(state): State<AppState>| async move {
                get_query(&state, query_name).await
            }),
        )
    })
}

async fn get_query(state: &AppState, query_name: QueryName) -> Result<Response, ServerError> {
    let queries = &state.queries;
    let response = match query_name {
        QueryName::SummaryByYearState => {
            Json(queries.summary_by_year_state().await?).into_response()
        }
        QueryName::YearlyTrend => Json(queries.yearly_trend().await?).into_response(),
        QueryName::StateYearCounts => Json(queries.state_year_counts().await?).into_response(),
        QueryName::MagnitudeTimeHistogram => {
            Json(queries.magnitude_time_histogram().await?).into_response()
        }
        QueryName::MagnitudeTimeSeries => {
            Json(queries.magnitude_time_series().await?).into_response()
        }
        QueryName::MagnitudeSizeStats => {
            Json(queries.magnitude_size_stats().await?).into_response()
        }
        QueryName::MagnitudeFatalityAvg => {
            Json(queries.magnitude_fatality_avg().await?).into_response()
        }
        QueryName::EventGeolocation => Json(queries.event_geolocation().await?).into_response(),
    };
    Ok(response)
}
