//! Rule-based clothing advice.
//!
//! Two independent axes: a temperature band picks the base outfit, then at
//! most one modifier (wind before humidity) is appended. Total over all
//! inputs; never returns an empty string.

use crate::model::DaySummary;

/// Temperature band for the base outfit, in °F.
///
/// Bands are evaluated coldest-first and the boundary values 32 and 50
/// belong to the lower band: `< 32`, `[32, 50]`, `(50, 70]`, `> 70`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Freezing,
    Chilly,
    Mild,
    Warm,
}

impl Band {
    pub fn for_temp_f(temp_f: f64) -> Self {
        if temp_f < 32.0 {
            Band::Freezing
        } else if temp_f <= 50.0 {
            Band::Chilly
        } else if temp_f <= 70.0 {
            Band::Mild
        } else {
            Band::Warm
        }
    }

    pub fn outfit(&self) -> &'static str {
        match self {
            Band::Freezing => "❄️ Heavy coat, gloves, and boots recommended.",
            Band::Chilly => "🧥 Light jacket and scarf. Maybe a hat!",
            Band::Mild => "🧶 Hoodie or sweater. Great layering weather.",
            Band::Warm => "🩳 Breathable clothing like shorts and a t-shirt.",
        }
    }
}

/// Clothing suggestion for a single weather point.
///
/// Wind takes precedence: above 10 mph the windbreaker clause is appended
/// and humidity is not considered.
pub fn clothing_suggestion(temp_f: f64, wind_mph: f64, humidity_pct: u8) -> String {
    let mut suggestion = String::from(Band::for_temp_f(temp_f).outfit());

    if wind_mph > 10.0 {
        suggestion.push_str(" 💨 Windbreaker recommended.");
    } else if humidity_pct > 80 {
        suggestion.push_str(" 💦 Light fabrics due to humidity.");
    }

    suggestion
}

/// Clothing suggestion for a whole day, driven by the day aggregate:
/// midpoint of high/low, peak wind, average humidity.
pub fn daily_suggestion(summary: &DaySummary) -> String {
    clothing_suggestion(
        (summary.max_temp_f + summary.min_temp_f) / 2.0,
        summary.max_wind_mph,
        summary.avg_humidity_pct,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND_PHRASES: [&str; 4] = [
        "❄️ Heavy coat, gloves, and boots recommended.",
        "🧥 Light jacket and scarf. Maybe a hat!",
        "🧶 Hoodie or sweater. Great layering weather.",
        "🩳 Breathable clothing like shorts and a t-shirt.",
    ];

    #[test]
    fn deep_freeze_gets_heavy_coat() {
        assert_eq!(
            clothing_suggestion(20.0, 0.0, 0),
            "❄️ Heavy coat, gloves, and boots recommended."
        );
    }

    #[test]
    fn boundary_32_belongs_to_the_light_jacket_band() {
        assert_eq!(Band::for_temp_f(32.0), Band::Chilly);
        assert_eq!(
            clothing_suggestion(32.0, 0.0, 0),
            "🧥 Light jacket and scarf. Maybe a hat!"
        );
    }

    #[test]
    fn boundary_50_stays_in_the_light_jacket_band() {
        assert_eq!(Band::for_temp_f(50.0), Band::Chilly);
        assert_eq!(Band::for_temp_f(50.1), Band::Mild);
    }

    #[test]
    fn boundary_70_stays_in_the_sweater_band() {
        assert_eq!(Band::for_temp_f(70.0), Band::Mild);
        assert_eq!(Band::for_temp_f(70.1), Band::Warm);
        assert_eq!(
            clothing_suggestion(70.0, 0.0, 0),
            "🧶 Hoodie or sweater. Great layering weather."
        );
    }

    #[test]
    fn hot_weather_gets_breathable_clothing() {
        assert_eq!(
            clothing_suggestion(85.0, 0.0, 0),
            "🩳 Breathable clothing like shorts and a t-shirt."
        );
    }

    #[test]
    fn wind_appends_windbreaker() {
        assert_eq!(
            clothing_suggestion(20.0, 15.0, 50),
            "❄️ Heavy coat, gloves, and boots recommended. 💨 Windbreaker recommended."
        );
    }

    #[test]
    fn humidity_appends_light_fabrics() {
        assert_eq!(
            clothing_suggestion(75.0, 0.0, 90),
            "🩳 Breathable clothing like shorts and a t-shirt. 💦 Light fabrics due to humidity."
        );
    }

    #[test]
    fn wind_takes_precedence_over_humidity() {
        let suggestion = clothing_suggestion(75.0, 15.0, 90);
        assert!(suggestion.contains("Windbreaker"));
        assert!(!suggestion.contains("humidity"));
    }

    #[test]
    fn modifier_thresholds_are_strict() {
        // Exactly 10 mph / 80% do not trigger the modifiers.
        assert_eq!(
            clothing_suggestion(60.0, 10.0, 80),
            "🧶 Hoodie or sweater. Great layering weather."
        );
    }

    #[test]
    fn every_suggestion_has_exactly_one_band_phrase() {
        for temp in [-40.0, 0.0, 31.9, 32.0, 40.0, 50.0, 50.1, 60.0, 70.0, 70.1, 100.0] {
            for (wind, humidity) in [(0.0, 0u8), (20.0, 0), (0.0, 95), (20.0, 95)] {
                let suggestion = clothing_suggestion(temp, wind, humidity);
                assert!(!suggestion.is_empty());

                let bands = BAND_PHRASES
                    .iter()
                    .filter(|phrase| suggestion.contains(**phrase))
                    .count();
                assert_eq!(bands, 1, "temp {temp}: {suggestion}");
            }
        }
    }

    #[test]
    fn daily_suggestion_uses_the_high_low_midpoint() {
        let summary = DaySummary {
            max_temp_f: 60.0,
            min_temp_f: 40.0,
            avg_temp_f: 52.0,
            max_wind_mph: 12.0,
            avg_humidity_pct: 55,
            condition_text: "Partly cloudy".to_string(),
        };

        // Midpoint 50 lands in the light-jacket band; peak wind adds the windbreaker.
        assert_eq!(
            daily_suggestion(&summary),
            "🧥 Light jacket and scarf. Maybe a hat! 💨 Windbreaker recommended."
        );
    }
}
