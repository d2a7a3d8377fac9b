use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub webhook_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            webhook_url: std::env::var("WEBHOOK_URL")
                .or_else(|_| std::env::var("N8N_WEBHOOK_URL"))
                .map_err(|_| anyhow::anyhow!("WEBHOOK_URL is not configured"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("WEBHOOK_URL is not configured");
                    }
                    let parsed = Url::parse(&url)
                        .map_err(|e| anyhow::anyhow!("WEBHOOK_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("WEBHOOK_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without credentials embedded in the URL)
        tracing::info!("Configuration loaded successfully");
        if let Ok(parsed) = Url::parse(&config.webhook_url) {
            tracing::debug!(
                "Webhook host: {}",
                parsed.host_str().unwrap_or("<unknown>")
            );
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
