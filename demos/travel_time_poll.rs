//! Travel-time polling demo.
//!
//! Creates the shared hub client, polls a routing endpoint until Ctrl+C,
//! then emits the hub close event and shows that the handle is gone.
//!
//! ```sh
//! cargo run --example travel_time_poll -- https://router.example.com/route
//! ```

use std::time::Duration;

use hub_http::{create_client, CipherPolicy, ClientOptions, HubRuntime};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    hub_http::observability::init_logging("info");

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/json".to_string());

    let runtime = HubRuntime::new();
    let shared = create_client(&runtime, CipherPolicy::Default, ClientOptions::default())?;

    let mut ticker = tokio::time::interval(Duration::from_secs(15));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match shared.get(&url)?.send().await {
                    Ok(response) => {
                        let status = response.status();
                        let body: serde_json::Value = response.json().await.unwrap_or_default();
                        tracing::info!(%status, fields = body.as_object().map_or(0, |o| o.len()), "poll complete");
                    }
                    Err(e) => tracing::warn!(error = %e, "poll failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    runtime.close();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(shared.is_closed());
    tracing::info!("shared client torn down, bye");
    Ok(())
}
