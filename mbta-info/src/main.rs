use mbta_info::mbta::{MbtaClient, MbtaConfig};
use mbta_info::summary::{SubwayInfo, render_error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key = std::env::var("MBTA_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MBTA_API_KEY not set. Requests are rate-limited without a key.");
        String::new()
    });

    let client = match MbtaClient::new(MbtaConfig::new(&api_key)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            return;
        }
    };
    let info = SubwayInfo::new(client);

    match info.route_names().await {
        Ok(names) => println!("Subway routes: {names}"),
        Err(e) => println!("{}", render_error(&e)),
    }

    println!();
    match info.aggregate_info().await {
        Ok(report) => println!("{report}"),
        Err(e) => println!("{}", render_error(&e)),
    }

    // Optional trip request: two positional arguments, start and end,
    // each a stop name or id.
    let mut args = std::env::args().skip(1);
    if let (Some(start), Some(end)) = (args.next(), args.next()) {
        println!();
        match info.trip_summary(&start, &end).await {
            Ok(summary) => println!("{summary}"),
            Err(e) => println!("{}", render_error(&e)),
        }
    }
}
