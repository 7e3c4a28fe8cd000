use std::sync::Arc;

use incilab::{ApiClient, Environment, Error};
use incilab_common::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let default_filter = "debug";

    let http_filter = "hyper_util=warn,reqwest=warn,rustls=warn";

    let env_filter = EnvFilter::new(format!("{},{}", default_filter, http_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Environment comes from INCILAB_ENV; in development the client talks
    // to a backend on localhost:8080
    let client = ApiClient::new(Environment::from_env(), Arc::new(MemoryStore::new())).await?;

    let brands = client.brand_list(1, 10, None).await?;
    println!("Brands: {:#?}", brands.data);

    let hot = client.hot_products(5).await?;
    println!("Hot products: {:#?}", hot.data);

    let results = client.search_ingredients("niacinamide").await?;
    println!("Ingredients: {:#?}", results.data);

    Ok(())
}
