// helm-console/examples/console_session.rs
// Loads a permission session against a running service and prints the
// navigation tree the sidebar would render.

use std::sync::Arc;

use helm_client::ClientConfig;
use helm_console::{NavigationView, PermissionSessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("HELM_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let token = std::env::var("HELM_API_TOKEN").ok();

    let mut config = ClientConfig::new(&base_url);
    if let Some(token) = token {
        config = config.with_token(token);
    }

    let store = PermissionSessionStore::new(Arc::new(config.build_http_client()));

    if let Err(err) = store.initialize().await {
        tracing::error!("Failed to load permission session: {}", err);
        return Ok(());
    }

    tracing::info!(
        plan = store.plan_name().as_deref().unwrap_or("unknown"),
        "session loaded"
    );

    match NavigationView::build(&store) {
        NavigationView::Ready(modules) => {
            for module in modules {
                println!("{} ({})", module.name, module.code);
                for item in module.items {
                    println!("  - {}  [{}]", item.name, item.permission_key);
                }
            }
        }
        NavigationView::NoAccess => {
            println!("No accessible menus; contact your administrator.");
        }
        NavigationView::Failed(err) => {
            println!("Failed to load permissions: {}", err);
        }
        NavigationView::Loading => unreachable!("initialize() resolved"),
    }

    Ok(())
}
