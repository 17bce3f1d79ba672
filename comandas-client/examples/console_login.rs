//! Console demo against a running Comandas BFF.
//!
//! ```sh
//! COMANDAS_BASE_URL=http://localhost:5000/api \
//!     cargo run --example console_login -- @admin senha123
//! ```

use comandas_client::{
    AuthController, ClientConfig, Customer, ListFlow, Navigator, ResourceClient, Route,
    SessionStore,
};
use tracing_subscriber::EnvFilter;

struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(?route, "navigate");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let identifier = args.next().unwrap_or_else(|| "@admin".to_string());
    let secret = args.next().unwrap_or_else(|| "admin".to_string());

    let config = ClientConfig::from_env();
    let http = config.build_http_client()?;

    let store = SessionStore::new();
    let auth = AuthController::new(http.clone(), store.clone(), LogNavigator);
    let session = auth.login(&identifier, &secret).await?;
    println!(
        "Logado como {} ({})",
        session.display_name, session.group_label
    );

    let customers = ListFlow::new(ResourceClient::<Customer>::new(http))
        .load()
        .await?;
    println!("{} cliente(s):", customers.len());
    for customer in &customers {
        println!(
            "{:>4}  {}  {}",
            customer.id.unwrap_or_default(),
            customer.nome,
            customer.telefone
        );
    }
    Ok(())
}
