//! End-to-end wiring demo: seeded mock backend, event subscription, a full
//! browse/upload/delete session printed to stdout.
//!
//! ```sh
//! MOCK_LATENCY_SCALE=0.1 cargo run --example portfolio_session
//! ```

use std::sync::Arc;

use anyhow::Result;
use estate_events::{EventBus, Notice};
use estate_gateway::mock::{LatencyProfile, MockGateway};
use estate_gateway::models::document::FileUpload;
use estate_gateway::models::property::{CreateProperty, UpdateProperty};
use estate_store::PropertyStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_store=info,estate_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Wiring ---
    let gateway = Arc::new(MockGateway::seeded(LatencyProfile::from_env()));
    let bus = Arc::new(EventBus::default());
    let store = Arc::new(PropertyStore::new(gateway, bus.clone()));

    // A stand-in for the presentation layer: print every notice.
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match Notice::from_event(&event) {
                Some(notice) => println!("  [{:?}] {}: {}", notice.severity, notice.title, notice.body),
                None => println!("  (event) {}", event.kind),
            }
        }
    });

    // --- Browse the portfolio ---
    let properties = store.fetch_all().await?;
    println!("Portfolio ({} properties):", properties.len());
    for property in &properties {
        println!(
            "  {} — {} ({} documents)",
            property.title,
            property.price,
            property.documents.len()
        );
    }

    // --- Open a detail view and work with documents ---
    let villa = properties[1].clone();
    let open = store.open_detail(villa.id).expect("villa is listed");
    println!("\nOpened: {} at {}", open.title, open.address);

    let docs = store.documents(villa.id);
    let uploaded = docs
        .upload(vec![FileUpload::new(
            "Renovation_Quote.pdf",
            "application/pdf",
            b"%PDF-1.4 quote".to_vec(),
        )])
        .await?;
    println!(
        "Uploaded {} -> {}",
        uploaded[0].file_name, uploaded[0].file_url
    );

    let snapshot = store.selected().expect("detail still open");
    println!("Detail view now shows {} documents", snapshot.documents.len());

    docs.delete(uploaded[0].id).await?;

    // --- Create and update a listing ---
    let created = store
        .create(CreateProperty {
            title: "Lakeside Bungalow".into(),
            address: "14 Shore Dr, Madison, WI 53703".into(),
            price: "$389,000".into(),
            bedrooms: 2,
            bathrooms: 1,
            square_feet: 1100,
            image_url: "https://example.com/bungalow.jpg".into(),
        })
        .await?;

    store
        .update(
            created.id,
            UpdateProperty {
                price: Some("$379,000".into()),
                ..Default::default()
            },
        )
        .await?;

    store.close_detail();
    println!("\nFinal list has {} properties", store.properties().len());

    Ok(())
}
