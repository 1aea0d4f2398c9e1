use avbrief::briefing::fetch_briefing;
use avbrief::domain::Icao;
use avbrief::geo::distance_between;
use avbrief::minima::AirportTable;
use avbrief::noaa::{NoaaClient, NoaaConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: avbrief ICAO [ICAO ...]");
        eprintln!();
        eprintln!("Set AVBRIEF_DATA to an airport reference file to enable");
        eprintln!("minima lookup and (with exactly two airports) distance.");
        std::process::exit(2);
    }

    let mut airports = Vec::new();
    for arg in &args {
        match Icao::parse(arg) {
            Ok(icao) => airports.push(icao),
            Err(e) => {
                eprintln!("{arg}: {e}");
                std::process::exit(2);
            }
        }
    }

    // Load the reference table if one was configured
    let table = match std::env::var("AVBRIEF_DATA") {
        Ok(path) => {
            let table =
                AirportTable::load(&path).expect("Failed to load airport reference data");
            println!("Loaded {} airports from {}", table.len(), path);
            Some(table)
        }
        Err(_) => None,
    };

    let client = NoaaClient::new(NoaaConfig::new()).expect("Failed to create NOAA client");

    for icao in &airports {
        println!();
        println!("=== {icao} ===");

        if let Some(record) = table.as_ref().and_then(|t| t.get(icao)) {
            println!(
                "{} ({:.6}, {:.6})  alternate minima {} ft / {} m",
                record.name,
                record.latitude,
                record.longitude,
                record.alternate.ceiling_ft,
                record.alternate.visibility_m
            );
        }

        let briefing = fetch_briefing(&client, icao).await;

        match briefing.forecast {
            Ok(forecast) => println!("{forecast}"),
            Err(e) => eprintln!("forecast unavailable: {e}"),
        }
        match briefing.observation {
            Ok(metar) => println!("{metar}"),
            Err(e) => eprintln!("observation unavailable: {e}"),
        }
    }

    // With exactly two airports and a reference table, report the leg distance
    if let (Some(table), [from, to]) = (&table, airports.as_slice()) {
        println!();
        match distance_between(from, to, table) {
            Ok(nm) => println!("{from} -> {to}: {nm:.1} NM"),
            Err(e) => eprintln!("distance unavailable: {e}"),
        }
    }
}
