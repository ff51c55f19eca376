use axum::{Json, Router, extract::State as AxumState, routing::get};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::types::{NodeServer, WorkerResult};
use crate::container::types::{Container, Image};
use crate::docker::{
    convert::{to_runtime_containers, to_runtime_images},
    engine::ContainerEngine,
    naming::KubeletNameParser,
};

impl<E: ContainerEngine> NodeServer<E> {
    pub fn new(engine: Arc<E>, address: &str, port: &str) -> Self {
        Self {
            engine,
            parser: KubeletNameParser,
            address: address.to_string(),
            port: port.to_string(),
        }
    }

    async fn get_containers(
        AxumState(server): AxumState<Arc<NodeServer<E>>>,
    ) -> WorkerResult<Json<Vec<Container>>> {
        let entries = server.engine.list_containers().await?;
        Ok(Json(to_runtime_containers(&entries, &server.parser)))
    }

    async fn get_images(
        AxumState(server): AxumState<Arc<NodeServer<E>>>,
    ) -> WorkerResult<Json<Vec<Image>>> {
        let entries = server.engine.list_images().await?;
        Ok(Json(to_runtime_images(&entries)))
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/containers", get(NodeServer::<E>::get_containers))
            .route("/images", get(NodeServer::<E>::get_images))
            .with_state(Arc::new(self))
    }

    pub async fn start_server(self) -> WorkerResult<()> {
        let bind = format!("{}:{}", self.address, self.port);
        let app = self.router();

        let listener = TcpListener::bind(&bind).await?;
        info!(address = bind.as_str(); "node server listening");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
