use std::error::Error as _;

use skycast_core::{RenderModel, ViewState};

/// Print the current view state. The view starts at `Loading` and is
/// printed again once the pipeline settles.
pub fn render_state(state: &ViewState) {
    match state {
        ViewState::Loading => {
            println!("Locating you and fetching the 5-day forecast...");
        }
        ViewState::Denied => {
            println!();
            println!("Location permission was denied.");
            println!("skycast cannot show a forecast without your location.");
        }
        ViewState::Error(err) => {
            println!();
            println!("Could not load the forecast: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                println!("  caused by: {cause}");
                source = cause.source();
            }
        }
        ViewState::Loaded(model) => render_forecast(model),
    }
}

/// Blocking acknowledgment of the terminal denial notice; the caller exits
/// the process afterwards.
pub fn acknowledge_denial() {
    let _ = inquire::Text::new("Press Enter to exit.").prompt();
}

fn render_forecast(model: &RenderModel) {
    println!();
    println!("  {}", model.location_name);
    println!();

    // One card per day, the terminal rendition of the paged list.
    for day in &model.days {
        println!("  {}  {}", day.date_label, day.hour_label);
        println!(
            "  {}  {}°   {}",
            icon_glyph(day.icon_key),
            day.temp_label,
            day.description
        );
        println!("  ────────────────────────────");
    }
}

fn icon_glyph(key: &str) -> &'static str {
    match key {
        "day-sunny" => "☀",
        "cloudy" => "☁",
        "rain" => "🌧",
        "rains" => "🌦",
        "lightning" => "⚡",
        "snow" => "❄",
        "fog" => "🌫",
        _ => "·",
    }
}
