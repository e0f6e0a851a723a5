use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use notimatch::{MatchingEngine, Rule, RuleSet};

const TEXTS: [&str; 4] = [
    "Order arriving in 15 min",
    "Driver ETA: 10:30",
    "Your package has arrived",
    "Flash sale, 50% off today",
];

fn build_shared_ruleset() -> Arc<RuleSet> {
    let mut rules = Vec::new();
    for i in 0..20 {
        rules.push(Rule::keyword(format!("coupon{i} and not expired"), "🏷").with_priority(10));
    }
    rules.push(Rule::template("arriving in {minutes} min", "🍔 {minutes}m").with_priority(9));
    rules.push(Rule::regex(r"ETA: (\d+):(\d+)", "{h}:{m}").with_variables(["h", "m"]).with_priority(5));
    rules.push(Rule::keyword("delivered or arrived", "📦").with_priority(1));
    for (id, rule) in rules.iter_mut().enumerate() {
        rule.id = id as u64 + 1;
    }
    Arc::new(MatchingEngine::new().compile(rules))
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let ruleset = build_shared_ruleset();

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let rs = Arc::clone(&ruleset);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for i in 0..per_thread {
                                let text = TEXTS[(i as usize + t) % TEXTS.len()];
                                let _ = rs.find_match(text);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
