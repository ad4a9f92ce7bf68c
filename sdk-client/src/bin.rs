use clap::Parser;
use fhevm_sdk_client::*;

// CLI
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    println!("Starting FHEVM SDK client");

    let config = CmdConfig::parse();
    if config.logs {
        setup_logging(&config.log_dir, "fhevm-sdk-client.log");
    }

    let results = execute_cmd(&config).await?;
    for (label, payload) in results {
        println!("{label} - {}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}
