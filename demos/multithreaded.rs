use std::sync::Arc;
use std::thread;

use notimatch::{MatchingEngine, Rule};

fn main() {
    let ruleset = Arc::new(MatchingEngine::new().compile(vec![
        Rule::template("arriving in {minutes} min", "🍔 {minutes}m")
            .with_id(1)
            .with_priority(9),
        Rule::regex(r"ETA: (\d+):(\d+)", "{var1}:{var2}").with_id(2),
        Rule::keyword("delivered or arrived", "📦").with_id(3),
    ]));
    println!("{ruleset}");

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || {
                let text = match i {
                    0 => "Order arriving in 15 min".to_owned(),
                    1 => format!("ETA: 10:{}", 10 * i),
                    2 => "Your package has arrived".to_owned(),
                    _ => "Nothing here".to_owned(),
                };
                let report = rs.find_match_detailed(&text);
                println!("Thread {i}: {text:?} -> {report}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
