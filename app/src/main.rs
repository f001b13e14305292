use std::sync::Arc;

use settings::Settings;

use crate::household::HouseholdService;

mod adapter;
mod consumption;
mod core;
mod household;
mod savings;
mod settings;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings.monitoring.init().expect("Error initializing monitoring");

    let store = settings.household.new_store();
    tracing::info!("Using household snapshot {}", store.path().display());

    let household = Arc::new(HouseholdService::load(store).await);
    let advisor = Arc::new(
        settings
            .advisor
            .new_advisor()
            .expect("Error initializing savings advisor"),
    );

    tracing::info!("Starting HTTP server");

    if let Err(e) = settings
        .http_server
        .run_server(move || vec![adapter::api::new_routes(household.clone(), advisor.clone())])
        .await
    {
        tracing::error!("HTTP server execution failed: {:?}", e);
    }
}
