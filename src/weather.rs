use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::weather_forecast::WeatherForecast;

pub const FORECAST_DAYS: u64 = 5;
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Produces one forecast per day for the `FORECAST_DAYS` days following
/// `today`, in order.
pub fn generate_forecasts<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Vec<WeatherForecast> {
    (1..=FORECAST_DAYS)
        .map(|offset| {
            let date = today + Days::new(offset);
            let temperature_c = rng.random_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            let base_summary = SUMMARIES[rng.random_range(0..SUMMARIES.len())];
            WeatherForecast {
                date,
                temperature_c,
                summary: summarize(date, temperature_c, base_summary),
            }
        })
        .collect()
}

/// Where a request draws its random values from. `Thread` uses the
/// per-thread generator; `Seeded` shares one generator between all requests
/// so a server started with a seed replays the same sequence of draws.
#[derive(Clone)]
pub enum RandomSource {
    Thread,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> RandomSource {
        RandomSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    pub fn generate_forecasts(&self, today: NaiveDate) -> Vec<WeatherForecast> {
        match self {
            RandomSource::Thread => generate_forecasts(&mut rand::rng(), today),
            RandomSource::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                generate_forecasts(&mut *rng, today)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureTier {
    Freezing,
    Chilly,
    Moderate,
    Hot,
}

impl TemperatureTier {
    pub fn classify(temperature_c: i32) -> TemperatureTier {
        if temperature_c < 0 {
            TemperatureTier::Freezing
        } else if temperature_c < 10 {
            TemperatureTier::Chilly
        } else if temperature_c > 30 {
            TemperatureTier::Hot
        } else {
            TemperatureTier::Moderate
        }
    }

    /// The label replacing the drawn base summary, if the tier overrides it.
    pub fn label(self) -> Option<&'static str> {
        match self {
            TemperatureTier::Freezing => Some("Freezing"),
            TemperatureTier::Chilly => Some("Chilly"),
            TemperatureTier::Hot => Some("Hot"),
            TemperatureTier::Moderate => None,
        }
    }
}

struct Conditions {
    date: NaiveDate,
    temperature_c: i32,
    tier: TemperatureTier,
}

struct Annotation {
    suffix: &'static str,
    applies: fn(&Conditions, &str) -> bool,
}

// Evaluated top to bottom against the summary built so far. Every matching
// rule appends, none replaces, so labels compound.
const ANNOTATIONS: [Annotation; 7] = [
    Annotation {
        suffix: " - Winter",
        applies: |c, _| {
            c.tier == TemperatureTier::Freezing && matches!(c.date.month(), 12 | 1)
        },
    },
    Annotation {
        suffix: " - Start of the Week",
        applies: |c, _| c.tier == TemperatureTier::Chilly && c.date.weekday() == Weekday::Mon,
    },
    Annotation {
        suffix: " - Extreme Heat",
        applies: |c, _| c.tier == TemperatureTier::Hot && c.temperature_c > 40,
    },
    Annotation {
        suffix: " - Weekend Incoming",
        applies: |c, _| {
            c.tier == TemperatureTier::Hot
                && c.temperature_c > 40
                && c.date.weekday() == Weekday::Fri
        },
    },
    Annotation {
        suffix: " (Weekend)",
        applies: |c, _| matches!(c.date.weekday(), Weekday::Sat | Weekday::Sun),
    },
    // Implied by "Extreme Heat" today, but checked on its own.
    Annotation {
        suffix: " - Stay Hydrated",
        applies: |c, summary| c.temperature_c > 40 && summary.contains("Hot"),
    },
    Annotation {
        suffix: " - Severe Cold",
        applies: |c, _| c.temperature_c < -10 && c.date.month() == 1,
    },
];

/// Builds the summary for one day: the tier label (or `base_summary` for
/// moderate temperatures) followed by every annotation that applies.
pub fn summarize(date: NaiveDate, temperature_c: i32, base_summary: &str) -> String {
    let tier = TemperatureTier::classify(temperature_c);
    let conditions = Conditions {
        date,
        temperature_c,
        tier,
    };

    let mut summary = tier.label().unwrap_or(base_summary).to_string();
    for annotation in ANNOTATIONS.iter() {
        if (annotation.applies)(&conditions, &summary) {
            summary.push_str(annotation.suffix);
        }
    }
    summary
}
