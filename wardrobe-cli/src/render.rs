//! Plain-text rendering of the two app screens.

use chrono::NaiveDateTime;

use wardrobe_core::advice;
use wardrobe_core::condition::condition_glyph;
use wardrobe_core::forecast;
use wardrobe_core::model::ForecastResult;

/// Current conditions, up to six upcoming-hour tiles, and the clothing
/// suggestion. `now` comes from the caller so the hour selection stays
/// deterministic.
pub fn now_screen(result: &ForecastResult, now: NaiveDateTime) {
    let current = &result.current;

    println!("{}", result.location_name);
    println!("{:.1}°F", current.temperature_f);
    println!();

    if let Some(today) = result.days.first() {
        let tiles: Vec<String> = forecast::upcoming_hours(today, now, 6)
            .iter()
            .map(|hour| {
                format!(
                    "{} {} {}°",
                    forecast::hour_label(hour.timestamp),
                    condition_glyph(&hour.condition_text),
                    hour.temperature_f as i64,
                )
            })
            .collect();

        if !tiles.is_empty() {
            println!("{}", tiles.join("   "));
            println!();
        }
    }

    println!(
        "💨 Wind: {} mph   💧 Humidity: {}%   ☁ {}",
        current.wind_mph, current.humidity_pct, current.condition_text
    );
    println!();
    println!("Clothing suggestion:");
    println!(
        "  {}",
        advice::clothing_suggestion(current.temperature_f, current.wind_mph, current.humidity_pct)
    );
}

/// One card per forecast day: date header, condition, high/low, wind,
/// humidity, and the day's clothing suggestion.
pub fn forecast_screen(result: &ForecastResult) {
    if result.days.is_empty() {
        println!("No forecast data for {} yet.", result.location_name);
        return;
    }

    println!("{}-Day Forecast for {}", result.days.len(), result.location_name);
    println!();

    for day in &result.days {
        let summary = &day.summary;

        println!("{}", forecast::day_header(day.date));
        println!("  {} {}", condition_glyph(&summary.condition_text), summary.condition_text);
        println!(
            "  High: {}°F | Low: {}°F",
            summary.max_temp_f as i64, summary.min_temp_f as i64
        );
        println!("  💨 Wind: {} mph", summary.max_wind_mph);
        println!("  💧 Humidity: {}%", summary.avg_humidity_pct);
        println!("  {}", advice::daily_suggestion(summary));
        println!();
    }
}
