use notimatch::{MatchingEngine, Rule};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = MatchingEngine::new();

    // Rules must arrive sorted by priority, highest first.
    let rules = vec![
        Rule::keyword("order and cancelled", "❌").with_id(1).with_priority(10),
        Rule::template("arriving in {minutes} min", "🍔 {minutes}m")
            .with_id(2)
            .with_priority(9),
        Rule::regex(r"ETA: (\d+):(\d+)", "{h}:{m}")
            .with_id(3)
            .with_variables(["h", "m"]),
        Rule::keyword("delivered or arrived", "📦").with_id(4).with_priority(1),
    ];

    for text in [
        "Your order is arriving in 15 min",
        "Driver ETA: 10:30",
        "Your order was cancelled",
        "Your package has arrived",
        "Weekly newsletter",
    ] {
        match engine.find_match(text, &rules) {
            Some((rule, outcome)) => println!("{text:?} -> rule {}: {}", rule.id, outcome.display_text()),
            None => println!("{text:?} -> no match"),
        }
    }

    let broken = Rule::regex("ETA: (\\d+", "{var1}");
    if let Err(err) = engine.validate(&broken) {
        println!("rule would never match: {err}");
    }
}
