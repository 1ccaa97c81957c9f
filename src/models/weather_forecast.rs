use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: String,
}

impl WeatherForecast {
    pub fn temperature_f(&self) -> i32 {
        celsius_to_fahrenheit(self.temperature_c)
    }
}

pub fn celsius_to_fahrenheit(temperature_c: i32) -> i32 {
    32 + (f64::from(temperature_c) / 0.5556).floor() as i32
}

/// Wire representation of a forecast. Only ever built from a
/// [`WeatherForecast`], so `temperature_f` always matches `temperature_c`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastBody {
    #[schema(value_type = String, format = Date, example = "2026-10-17")]
    pub date: NaiveDate,
    #[schema(example = 21)]
    pub temperature_c: i32,
    #[schema(example = 69)]
    pub temperature_f: i32,
    #[schema(example = "Mild (Weekend)")]
    pub summary: String,
}

impl From<WeatherForecast> for WeatherForecastBody {
    fn from(forecast: WeatherForecast) -> Self {
        WeatherForecastBody {
            temperature_f: forecast.temperature_f(),
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            summary: forecast.summary,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(20), 67);
        assert_eq!(celsius_to_fahrenheit(54), 129);
        assert_eq!(
            celsius_to_fahrenheit(-5),
            23,
            "-5 / 0.5556 is -8.99..., which floors to -9"
        );
        assert_eq!(celsius_to_fahrenheit(-20), -4);
    }

    #[test]
    fn test_body_carries_derived_fahrenheit() {
        let forecast = WeatherForecast {
            date: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
            temperature_c: 45,
            summary: "Hot".to_string(),
        };
        let body = WeatherForecastBody::from(forecast);
        assert_eq!(body.temperature_f, 32 + 80);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["date"], "2026-07-03");
        assert_eq!(json["temperatureC"], 45);
        assert_eq!(json["temperatureF"], 112);
        assert_eq!(json["summary"], "Hot");
    }
}
