use anyhow::Result;
use newsreel::{
    config::Config, feed::GoogleNewsFeed, fetcher::HttpFetcher, pipeline::run_once,
    store::PgArticleStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(config.database_url())
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = PgArticleStore::new(pool);
    let feed = GoogleNewsFeed::new(config.feed_lang());
    let fetcher = HttpFetcher;

    run_once(&config, &feed, &fetcher, &store).await?;
    Ok(())
}
