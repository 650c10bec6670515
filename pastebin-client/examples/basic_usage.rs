//! Basic usage example for the pastebin client
//!
//! This example demonstrates how to:
//! - Create blocking and async clients
//! - Fetch the public archive and raw paste text
//! - List recent pastes through the scraping API
//! - Create a paste with a developer key
//!
//! Set `PASTEBIN_DEV_KEY` to also try the developer API. The scraping API only
//! answers to whitelisted IPs; other callers get a decode error there.
//! Run with `RUST_LOG=pastebin_client=debug` to see each request.

use pastebin_client::{AsyncPastebin, Expiration, NewPaste, Pastebin, RecentPastes, Visibility};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example 1: Blocking client with a custom timeout
    println!("=== Example 1: Blocking Client ===");
    let client = Pastebin::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;

    let archive = client.get_archive()?;
    println!("✓ Archive lists {} pastes", archive.len());

    if let Some(id) = archive.first().and_then(|url| url.rsplit('/').next()) {
        let text = client.get_raw_paste(id)?;
        println!("✓ First archived paste is {} bytes", text.len());
    }

    // Example 2: Scraping API
    println!("\n=== Example 2: Recent Pastes ===");
    match client.get_recent_pastes(&RecentPastes::new().limit(5)) {
        Ok(pastes) => {
            for paste in &pastes {
                println!(
                    "{} {:?} ({} bytes)",
                    paste.key().unwrap_or("<no key>"),
                    paste.title(),
                    paste.size().unwrap_or(0)
                );
            }
        }
        Err(e) => println!("✗ Scraping API unavailable: {}", e),
    }

    // Example 3: Developer API
    if let Ok(dev_key) = std::env::var("PASTEBIN_DEV_KEY") {
        println!("\n=== Example 3: Create Paste ===");
        let client = Pastebin::with_dev_key(dev_key)?;
        let paste = NewPaste::new("fn main() { println!(\"hello\"); }")
            .with_name("hello.rs")
            .with_format("rust")
            .with_visibility(Visibility::Unlisted)
            .with_expiration(Expiration::TenMinutes);
        match client.create_paste(&paste) {
            Ok(url) => println!("✓ Created {}", url),
            Err(e) => println!("✗ Failed to create paste: {}", e),
        }
    }

    // Example 4: Async client
    println!("\n=== Example 4: Async Client ===");
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = AsyncPastebin::new()?;
        let archive = client.get_archive().await?;
        println!("✓ Async archive lists {} pastes", archive.len());
        Ok::<_, pastebin_client::PastebinError>(())
    })?;

    Ok(())
}
