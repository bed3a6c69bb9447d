use markaz_client::feed::{FeedAggregator, RecentActivity};
use markaz_client::services::{AuthClient, DashboardClient, InteractionsClient, UsersClient};
use markaz_client::{Config, HttpClient, Session, SessionStore};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "markaz_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using backend at {}", config.base_url);

    // Anonymous session by default; set MARKAZ_ACCESS_TOKEN to exercise
    // authenticated endpoints
    let store = match std::env::var("MARKAZ_ACCESS_TOKEN") {
        Ok(token) => SessionStore::with_token(token),
        Err(_) => SessionStore::new(),
    };
    let http = HttpClient::new(&config, store.clone());

    // Resolve the current user, if any
    let session = Session::new(
        store,
        AuthClient::new(http.clone()),
        UsersClient::new(http.clone()),
    );
    match session.resolve().await {
        Some(user) => tracing::info!("Logged in as {}", user.username),
        None => tracing::info!("Browsing anonymously"),
    }

    // Client-side merged feed
    let aggregator = FeedAggregator::new(http.clone());
    let feed = aggregator.latest(2).await?;
    println!("Latest activity ({} items):", feed.len());
    for item in &feed {
        println!("  [{}] #{}", item.kind(), item.id());
    }

    // Server-side pre-merged cards
    let dashboard = DashboardClient::new(http.clone());
    let cards = dashboard.latest(20).await?;
    println!("Dashboard cards ({}):", cards.len());
    for card in &cards {
        println!("  [{}] {} by {}", card.kind, card.title, card.creator_username);
    }

    // Recently viewed items, best-effort
    if session.is_authenticated() {
        let interactions = InteractionsClient::new(http);
        let mut recent = RecentActivity::new();
        recent.seed(interactions.recent_items(10).await.unwrap_or_default());
        println!("Recently viewed ({} items):", recent.len());
        for item in recent.items() {
            println!("  [{}] #{}", item.kind(), item.id());
        }
    }

    Ok(())
}
