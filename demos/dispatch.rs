use notimatch::{
    DisplayRequest, Dispatcher, InMemoryRuleStore, MatchingEngine, Notification, Renderer, Rule,
};
use tracing_subscriber::EnvFilter;

/// Prints what a display would show.
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, request: &DisplayRequest) {
        println!(
            "[rule {}] {} (for {:?}, after {:?})",
            request.rule_id, request.text, request.duration, request.delay
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = InMemoryRuleStore::new();
    store.insert(
        Rule::template("arriving in {minutes} min", "🍔 {minutes}m")
            .with_source("com.food.app")
            .with_priority(9)
            .with_timing(15, 0),
    );
    let promo = store.insert(
        Rule::keyword("% off", "🏷 deal")
            .with_source("com.food.app")
            .with_priority(2),
    );
    store.insert(
        Rule::keyword("delivered or arrived", "📦")
            .with_source("com.parcel.app")
            .with_timing(10, 3),
    );

    let mut dispatcher = Dispatcher::new(MatchingEngine::new(), store, ConsoleRenderer);

    let notifications = [
        Notification::new("com.food.app", "Your order is arriving in 12 min").with_title("Burger Place"),
        Notification::new("com.food.app", "Today only: 30% off").with_source_name("Food"),
        Notification::new("com.parcel.app", "Your parcel has arrived"),
        Notification::new("com.parcel.app", ""),
        Notification::new("com.chat.app", "arriving in 5 min"),
    ];
    for notification in &notifications {
        if dispatcher.dispatch(notification).is_none() {
            println!("[{}] nothing to show", notification.source);
        }
    }

    dispatcher.source_mut().set_enabled(promo, false);
    println!("promotions disabled");
    dispatcher.dispatch(&notifications[1]);
}
