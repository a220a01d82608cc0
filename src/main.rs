use nail_atelier::{
    logger::{self, LoggerConfig},
    studio_links, GeminiClient, GeminiConfig, GenerationRequestController, GenerationState,
    Submission,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::from_env())?;
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = GeminiConfig::from_env();
    logger::log_config_info(&config);

    println!();
    for link in studio_links() {
        match &link.description {
            Some(description) => println!("  {:<18} {}  ({})", link.label, link.url, description),
            None => println!("  {:<18} {}", link.label, link.url),
        }
    }
    println!();

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        log::info!("Usage: atelier <describe your mood or outfit>");
        return Ok(());
    }

    let client = GeminiClient::new(config)?;
    let controller = GenerationRequestController::new(client.image().clone());

    match controller.submit(&prompt).await {
        Submission::Succeeded => {
            if let GenerationState::Success(payload) = controller.state() {
                let filename = format!("atelier_{}.png", chrono::Utc::now().timestamp());
                fs::write(&filename, payload.decode()?)?;
                log::info!("💾 Concept art saved to: {}", filename);
                log::info!("Capture this image and share it with Miral for your booking.");
            }
        }
        Submission::Failed => {
            if let Some(message) = controller.state().error_message() {
                log::warn!("{}", message);
            }
            let suggestion = client.text().suggest(&prompt).await;
            log::info!("💡 Suggestion: {}", suggestion);
        }
        Submission::Ignored | Submission::Busy => {}
    }

    Ok(())
}
