//! `roomlens-client` -- command-line demo of the capture -> analyze flow.
//!
//! Picks an image from disk (the "gallery"), runs it through the
//! downscale/encode pipeline, submits it to a running RoomLens backend,
//! and renders the three scenario cards as text.
//!
//! # Usage
//!
//! ```text
//! roomlens-client <image-path>
//! ```
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 |
//! |----------------|----------|-------------------------|
//! | `API_BASE_URL` | no       | `http://localhost:3000` |

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomlens_client::api::ApiClient;
use roomlens_client::capture::{CaptureController, CaptureEvent};
use roomlens_client::orchestrator::{AnalysisState, Orchestrator};
use roomlens_client::picker::FilePicker;
use roomlens_core::analysis::AnalyzeRoomResponse;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomlens_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let image_path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: roomlens-client <image-path>");
        std::process::exit(2);
    });

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    tracing::info!(image = %image_path, api = %base_url, "Starting analysis flow");

    // Capture: pick from "gallery", downscale, encode.
    let picker = Arc::new(FilePicker::new(&image_path));
    let mut controller = CaptureController::new();
    controller.tap(picker);

    let captured = match controller.finish().await {
        Some(CaptureEvent::Captured(image)) => image,
        Some(CaptureEvent::Cancelled) => {
            // Silent outcome by contract.
            return;
        }
        Some(CaptureEvent::PermissionDenied(msg)) | Some(CaptureEvent::Failed(msg)) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
        None => unreachable!("tap always fills the slot"),
    };

    // Analyze: one request, loading until the call settles.
    let api = Arc::new(ApiClient::new(base_url));
    let mut orchestrator = Orchestrator::new(api);
    orchestrator.submit(captured.base64);

    println!("Analyzing your room...");
    match orchestrator.resolve().await {
        AnalysisState::Result(response) => render(response),
        AnalysisState::Error(msg) => {
            eprintln!("Analysis failed: {msg}");
            std::process::exit(1);
        }
        _ => unreachable!("resolve always settles an in-flight request"),
    }
}

fn render(response: &AnalyzeRoomResponse) {
    println!();
    println!("Detected room: {}", response.room_type);
    println!();

    for scenario in &response.scenarios {
        println!("=== {} ===", scenario.name);
        println!(
            "  ${:.0} - ${:.0}",
            scenario.total_cost_min, scenario.total_cost_max
        );
        println!("  Materials:        ${:.0}", scenario.materials_cost);
        println!("  Labor:            ${:.0}", scenario.labor_cost);
        println!("  Timeline:         {}", scenario.time_estimate);
        println!("  Permits:          {}", scenario.permit_likelihood);
        println!("  Value impact:     {:.0}%", scenario.value_impact);
        println!("  ROI:              {}", scenario.roi_rating);
        println!("  {}", scenario.description);
        println!();
    }

    println!("{}", response.disclaimer);
}
