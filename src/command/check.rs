//! The five-step credential check pipeline.
//!
//! Each step gates the next; the first failure aborts the run. Narration
//! goes to stdout so the user can see exactly which check failed.

use std::path::Path;

use tracing::debug;

use crate::api::GeminiClient;
use crate::config;
use crate::error::{CheckError, CREDENTIAL_KEY};

/// Model used for the live round-trip, chosen for low cost and latency.
pub const TEST_MODEL: &str = "gemini-2.5-flash";

/// Fixed prompt sent on the live check.
pub const TEST_PROMPT: &str = "Say \"Hello! API is working!\"";

/// Run all five checks in order, stopping at the first failure.
pub async fn run_check(config_path: &Path) -> Result<(), CheckError> {
    println!("{}", "=".repeat(60));
    println!("GEMINI API KEY CHECK");
    println!("{}", "=".repeat(60));

    println!("\n[1/5] Checking if config.yaml exists...");
    println!("   Looking for config at: {}", config_path.display());
    let raw = config::read_config(config_path)?;
    println!("✅ config.yaml found");

    println!("\n[2/5] Parsing config.yaml...");
    let document = config::parse_config(&raw)?;
    println!("✅ YAML parsed successfully");

    println!("\n[3/5] Checking for {}...", CREDENTIAL_KEY);
    let api_key = document.credential()?;
    println!("✅ API key found: {}", config::mask_key(&api_key));

    println!("\n[4/5] Initializing the HTTP client...");
    let client = GeminiClient::new(api_key)?;
    println!("✅ HTTP client ready");

    println!("\n[5/5] Testing API call with your key...");
    println!("   Sending test request to the Gemini API...");
    debug!("model: {}", TEST_MODEL);
    let reply = client.generate_content(TEST_MODEL, TEST_PROMPT).await?;
    println!("✅ API call successful");
    println!("   Response: {}", reply.trim());

    println!("\n{}", "=".repeat(60));
    println!("✅ ALL CHECKS PASSED");
    println!("{}", "=".repeat(60));
    println!("\nYour Gemini API key is working correctly.");

    Ok(())
}

/// Print the diagnostic and remedy for a failed check.
pub fn report_failure(err: &CheckError) {
    println!("❌ {}: {}", err.label(), err);

    if let CheckError::ConfigNotFound { cwd, .. } = err {
        println!("   Current working directory: {}", cwd.display());
    }

    println!("\n💡 {}", err.remedy());
}
