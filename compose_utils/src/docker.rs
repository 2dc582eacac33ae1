use async_trait::async_trait;
use docker_api::models::PortBinding as EnginePortBinding;
use docker_api::opts::ContainerListOpts;
use docker_api::Docker;

use crate::error::Result;
use crate::port::{PortBinding, PortMap};

#[async_trait]
pub trait ContainerSource: Send + Sync {
    /// One name per container, stopped ones included.
    async fn container_names(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: ContainerSource + ?Sized> ContainerSource for std::sync::Arc<T> {
    async fn container_names(&self) -> Result<Vec<String>> {
        (**self).container_names().await
    }
}

pub struct DockerEngine {
    docker: Docker,
}

impl DockerEngine {
    pub fn new(uri: impl AsRef<str>) -> Result<Self> {
        let docker = Docker::new(uri.as_ref())?;
        Ok(Self { docker })
    }

    pub async fn running_ports(&self, container: &str) -> Result<Option<PortMap>> {
        let details = self.docker.containers().get(container).inspect().await?;

        let ports = details
            .network_settings
            .as_ref()
            .and_then(|settings| settings.ports.as_ref());

        let Some(ports) = ports else {
            return Ok(None);
        };

        Ok(Some(port_map_from_engine(ports)))
    }
}

fn port_map_from_engine<'a, B>(ports: impl IntoIterator<Item = (&'a String, &'a B)>) -> PortMap
where
    B: Clone + Into<Option<Vec<EnginePortBinding>>> + 'a,
{
    ports
        .into_iter()
        .map(|(key, bindings)| {
            let bindings: Option<Vec<EnginePortBinding>> = bindings.clone().into();
            let bindings = bindings.map(|bindings| {
                bindings
                    .into_iter()
                    .map(|binding| PortBinding {
                        host_ip: binding.host_ip,
                        host_port: binding.host_port,
                    })
                    .collect()
            });
            (key.clone(), bindings)
        })
        .collect()
}

#[async_trait]
impl ContainerSource for DockerEngine {
    async fn container_names(&self) -> Result<Vec<String>> {
        let opts = ContainerListOpts::builder().all(true).build();
        let containers = self.docker.containers().list(&opts).await?;

        log::debug!("Engine reported {} containers", containers.len());

        Ok(containers
            .into_iter()
            .filter_map(|summary| summary.names.and_then(|mut names| names.pop()))
            .collect())
    }
}
