//! Fetch the category list and print it as an indented tree.
//!
//! ```sh
//! LMS_API_BASE_URL=http://localhost:5000 \
//! LMS_ADMIN_USER=admin LMS_ADMIN_PASSWORD=secret \
//! cargo run -p lms-client --example category_browser
//! ```

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use lms_client::api::{CategoryApi, CategorySource};
use lms_client::{ClientConfig, Session};
use shared::category_tree::{CategoryIndex, build_forest, rows};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let identifier = std::env::var("LMS_ADMIN_USER").context("LMS_ADMIN_USER not set")?;
    let password = std::env::var("LMS_ADMIN_PASSWORD").context("LMS_ADMIN_PASSWORD not set")?;

    let config = ClientConfig::from_env();
    let mut session = Session::new(&config);
    let user = session.login(&identifier, &password).await?;
    println!("logged in as {} ({})\n", user.full_name, user.role);

    let api = CategoryApi::new(session.http());
    let categories = api.fetch_all().await?;
    let index = CategoryIndex::new(&categories);
    let forest = build_forest(&categories);

    for (node, depth) in rows(&forest) {
        let marker = if node.is_leaf() { "-" } else { "+" };
        println!(
            "{}{} {}  [{}]",
            "  ".repeat(depth),
            marker,
            node.name(),
            index.path_of(&node.category),
        );
    }

    Ok(())
}
