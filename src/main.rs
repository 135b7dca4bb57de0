use config::{Config, Environment, File, FileFormat};

use chatai_site::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = Config::builder()
        .add_source(File::new("config.yaml", FileFormat::Yaml).required(false))
        .add_source(Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = settings
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    chatai_site::run(server_config).await
}
