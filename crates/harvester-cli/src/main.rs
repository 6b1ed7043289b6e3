use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use harvester_core::app::{OrchestratorBuilder, TaskQuery};
use harvester_core::config::BackendConfig;
use harvester_core::domain::ScrapeRequest;
use harvester_core::impls::{HttpDispatcher, InMemoryTaskStore};

/// Drives one scrape task end to end against a configured backend.
///
/// Without a reachable backend the task still runs the full lifecycle and
/// ends `failed` with a transport error - useful as a smoke check of the
/// orchestrator itself.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // (A) Backend config: environment first, local dev defaults otherwise
    let config = BackendConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "no backend configured; using local defaults");
        BackendConfig::new("http://127.0.0.1:8089/influencer/scrape-process", "dev")
            .with_timeout(Duration::from_secs(10))
    });

    // (B) Wire the orchestrator: in-memory store + HTTP dispatcher
    let dispatcher = HttpDispatcher::new(config).expect("http client init");
    let orchestrator = OrchestratorBuilder::new()
        .store(InMemoryTaskStore::shared())
        .dispatcher(Arc::new(dispatcher))
        .build()
        .expect("orchestrator wiring");

    // (C) Create one demo task (2 TikTok handles + 1 YouTube channel)
    let request = ScrapeRequest {
        tiktok_users: vec!["alice".to_string(), "bob".to_string()],
        instagram_users: vec![],
        youtube_users: vec!["https://youtube.com/@chan_a".to_string()],
        max_items_per_user: 5,
    };
    let created = orchestrator
        .manager
        .create(request)
        .await
        .expect("task creation");
    println!("{}", created.message);
    println!("created: {} status={:?}", created.task.id, created.task.status);

    // (D) 完了をポーリングで待つ（completed / failed のどちらか）
    loop {
        let page = orchestrator
            .query
            .list(&TaskQuery::default())
            .await
            .expect("task listing");
        let view = page
            .items
            .iter()
            .find(|v| v.task_id == created.task.id)
            .expect("created task is listed");

        if view.status.is_terminal() {
            println!(
                "final view:\n{}",
                serde_json::to_string_pretty(view).expect("view serializes")
            );
            break;
        }
        sleep(Duration::from_millis(500)).await;
    }
}
