//! Demo driver for the shipping approval workflow.
//!
//! Runs three scenarios end to end:
//! 1. a small order that auto-approves,
//! 2. a large order that suspends and is approved by a "human",
//! 3. a large order that suspends and is rejected.
//!
//! Configuration comes from the environment:
//! - `HARBOR_APPROVAL_THRESHOLD`: container count above which approval is
//!   required (default 5).
//! - `HARBOR_REMOTE_URL`: when set, submission checks this URL first and
//!   short-circuits if the remote side is down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use harbor_core::domain::{ExecutionOutcome, ShippingRequest, TaskId};
use harbor_core::executor::Executor;
use harbor_core::gate::{ApprovalGate, ContainerThresholdRule, LARGE_ORDER_THRESHOLD};
use harbor_core::impls::{InMemoryEventLog, TemplateCompletion};
use harbor_core::ports::{EventLog, ServiceProbe, SystemClock, TaskStore, UlidGenerator};
use harbor_core::store::InMemoryTaskStore;

/// HTTP health probe for the optional remote dependency.
struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ServiceProbe for HttpProbe {
    async fn check_available(&self, url: &str) -> bool {
        match self
            .client
            .get(url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!(url, "connected to remote service");
                true
            }
            Ok(response) => {
                tracing::error!(url, status = %response.status(), "remote service returned error");
                false
            }
            Err(e) => {
                tracing::error!(url, error = %e, "failed to reach remote service");
                false
            }
        }
    }
}

fn threshold_from_env() -> u32 {
    std::env::var("HARBOR_APPROVAL_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LARGE_ORDER_THRESHOLD)
}

async fn run_scenario(
    executor: &Executor,
    events: &InMemoryEventLog,
    task_id: &str,
    containers: u32,
    destination: &str,
    approve: bool,
) {
    println!("{}", "=".repeat(60));
    println!("User > Ship {containers} containers to {destination}");

    let outcome = executor
        .submit(
            TaskId::new(task_id),
            ShippingRequest::single(containers, destination),
        )
        .await;

    let outcome = match outcome {
        ExecutionOutcome::Pending {
            correlation_id,
            hint,
        } => {
            println!("Workflow PAUSED for approval.");
            println!("  {hint}");
            println!(
                "Human decision: {}",
                if approve { "APPROVE" } else { "REJECT" }
            );
            executor.resume(correlation_id, approve).await
        }
        other => other,
    };

    match outcome {
        ExecutionOutcome::Done(result) => {
            println!("Agent > {}", result.summary);
            for placed in &result.results {
                println!(
                    "  {}",
                    serde_json::to_string(placed).expect("order results serialize")
                );
            }
        }
        ExecutionOutcome::Pending { .. } => {
            println!("Still pending (unexpected for this demo)");
        }
        ExecutionOutcome::Failed(e) => {
            println!("Workflow failed: {e}");
        }
    }

    println!("Session log ({} events):", events.events(task_id).await.len());
    for event in events.events(task_id).await {
        println!("  {}", serde_json::to_string(&event).expect("events serialize"));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Arc::new(InMemoryTaskStore::new());
    let events = Arc::new(InMemoryEventLog::new());
    let gate = ApprovalGate::new(
        Arc::new(ContainerThresholdRule::new(threshold_from_env())),
        Arc::new(UlidGenerator::new(SystemClock)),
    );

    let mut executor = Executor::new(
        Arc::clone(&store) as Arc<dyn TaskStore>,
        gate,
        Arc::new(TemplateCompletion),
        Arc::clone(&events) as Arc<dyn EventLog>,
    );

    if let Ok(url) = std::env::var("HARBOR_REMOTE_URL") {
        executor = executor.with_preflight(Arc::new(HttpProbe::new()), url);
    }

    // Demo 1: small order, auto-approved.
    run_scenario(&executor, &events, "order-1", 3, "Singapore", true).await;

    // Demo 2: large order, approved by a human.
    run_scenario(&executor, &events, "order-2", 10, "Rotterdam", true).await;

    // Demo 3: large order, rejected.
    run_scenario(&executor, &events, "order-3", 8, "Los Angeles", false).await;

    println!("{}", "=".repeat(60));
}
