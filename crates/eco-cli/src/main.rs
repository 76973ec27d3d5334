//! Fetch an eco report from a running server and print it.

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "eco-report", about = "Fetch a city eco report")]
struct Args {
    /// Base URL of the eco-report server
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,

    /// City registry key (unknown keys fall back to the default city)
    #[arg(long, default_value = "hyderabad")]
    city: String,

    /// Range token: 7days, 15days or 30days
    #[arg(long, default_value = "7days")]
    range: String,

    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(format!(
            "{}/api/eco-report",
            args.server.trim_end_matches('/')
        ))
        .query(&[("city", args.city.as_str()), ("range", args.range.as_str())])
        .send()
        .context("request failed")?;

    let status = response.status();
    let body: serde_json::Value = response.json().context("invalid JSON response")?;

    if !status.is_success() {
        let detail = body["error"].as_str().unwrap_or("unknown error");
        bail!("server returned {}: {}", status, detail);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_summary(&body);
    Ok(())
}

fn print_summary(report: &serde_json::Value) {
    let city = report["city"].as_str().unwrap_or("?");
    let window = report["timeWindow"]["label"].as_str().unwrap_or("?");
    println!("{} ({})", city, window);

    match report["airQuality"]["pollutants"]["aqi"].as_i64() {
        Some(aqi) => println!("  AQI: {}", aqi),
        None => println!("  AQI: unavailable"),
    }
    if let Some(pm25) = report["airQuality"]["pollutants"]["pm25"].as_f64() {
        println!("  PM2.5: {} ug/m3", pm25);
    }
    if let Some(points) = report["airQuality"]["monthlyInsights"]["dataPoints"].as_u64() {
        println!("  Trend days: {}", points);
    }

    let corridors = report["traffic"]["corridors"].as_array();
    match corridors.and_then(|list| list.first()) {
        Some(worst) => println!(
            "  Worst corridor: {} ({}% congestion)",
            worst["name"].as_str().unwrap_or("?"),
            worst["congestionPercent"]
        ),
        None => println!("  Traffic: no data"),
    }

    let recommendations = &report["insights"]["recommendations"];
    let count: usize = ["trafficManagement", "urbanPlanning", "pollutionControl", "citizenAwareness"]
        .iter()
        .filter_map(|key| recommendations[*key].as_array())
        .map(|list| list.len())
        .sum();
    println!("  Recommendations: {}", count);
}
