use std::sync::Arc;

use log::info;
use r_kubelet::{
    docker::engine::DockerEngine,
    logging,
    worker::types::{Config, NodeServer},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    info!(socket = config.docker_socket.as_str(); "starting r_kubelet");
    let engine = DockerEngine::connect(&config.docker_socket, config.engine_timeout_secs)?;

    let server = NodeServer::new(Arc::new(engine), &config.address, &config.port);
    server.start_server().await?;

    Ok(())
}
