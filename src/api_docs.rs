use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::app::DEFAULT_ROUTE;
use crate::models::weather_forecast::WeatherForecastBody;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Forecast API",
        version = "v1",
        description = "Synthetic five day weather forecasts"
    ),
    paths(crate::routes::weather_forecast::get_weather_forecast),
    components(schemas(WeatherForecastBody)),
    tags(
        (name = "forecast", description = "Generated weather forecasts")
    )
)]
pub struct ApiDoc;

/// The API description with the forecast path moved to `route`.
pub fn openapi_for_route(route: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if route != DEFAULT_ROUTE {
        if let Some(item) = doc.paths.paths.remove(DEFAULT_ROUTE) {
            doc.paths.paths.insert(route.to_string(), item);
        }
    }
    doc
}

pub fn routes(route: &str) -> Router {
    let doc = openapi_for_route(route);
    Router::new().route(OPENAPI_PATH, get(move || async move { Json(doc) }))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_document_describes_forecast_route() {
        let doc = serde_json::to_value(openapi_for_route(DEFAULT_ROUTE)).unwrap();
        let operation = &doc["paths"]["/weatherforecast"]["get"];
        assert_eq!(operation["operationId"], "GetWeatherForecast");
        assert_eq!(operation["tags"][0], "forecast");
        assert!(operation["responses"]["200"].is_object());

        let schema = &doc["components"]["schemas"]["WeatherForecastBody"]["properties"];
        for field in ["date", "temperatureC", "temperatureF", "summary"] {
            assert!(schema[field].is_object(), "missing {field}");
        }
    }

    #[test]
    fn test_document_follows_configured_route() {
        let doc = openapi_for_route("/api/forecast");
        assert!(doc.paths.paths.contains_key("/api/forecast"));
        assert!(!doc.paths.paths.contains_key(DEFAULT_ROUTE));
    }
}
