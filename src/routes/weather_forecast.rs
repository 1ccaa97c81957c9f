use axum::{Json, Router, extract::State, routing::get};

use crate::app::AppState;
use crate::diagnostics::report_extreme_temperatures;
use crate::models::weather_forecast::WeatherForecastBody;

pub fn routes(path: &str, state: AppState) -> Router {
    Router::new()
        .route(path, get(get_weather_forecast))
        .with_state(state)
}

/// Forecasts for the five days following today.
#[utoipa::path(
    get,
    path = "/weatherforecast",
    operation_id = "GetWeatherForecast",
    tag = "forecast",
    responses(
        (status = 200, description = "Synthetic forecasts for the next five days", body = Vec<WeatherForecastBody>)
    )
)]
pub async fn get_weather_forecast(
    State(state): State<AppState>,
) -> Json<Vec<WeatherForecastBody>> {
    let forecasts = state.random_source.generate_forecasts((state.today)());
    report_extreme_temperatures(&forecasts, state.sink.as_ref());
    Json(forecasts.into_iter().map(WeatherForecastBody::from).collect())
}
