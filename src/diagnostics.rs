use crate::models::weather_forecast::WeatherForecast;

pub const EXTREME_TEMPERATURE_C: i32 = 50;

/// Where the forecast handler reports what it observes. Reports never
/// influence the response.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}

pub fn report_extreme_temperatures(forecasts: &[WeatherForecast], sink: &dyn DiagnosticSink) {
    let extreme: Vec<&WeatherForecast> = forecasts
        .iter()
        .filter(|f| f.temperature_c > EXTREME_TEMPERATURE_C)
        .collect();
    if extreme.is_empty() {
        return;
    }

    sink.warn("Extreme temperatures detected in the forecast.");
    for forecast in extreme {
        sink.info(&format!(
            "Extreme temperature on {}: {}C",
            forecast.date, forecast.temperature_c
        ));
    }
}
