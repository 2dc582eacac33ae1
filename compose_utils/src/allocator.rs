use tokio::sync::Mutex;

use crate::docker::ContainerSource;
use crate::error::Result;
use crate::leading_integer;

const ID_SEPARATOR: char = '_';

/// `/myapp_web_3` -> 3. A last segment that does not start with a digit is 0.
pub fn trailing_id(name: &str) -> u64 {
    name.rsplit(ID_SEPARATOR)
        .next()
        .map(leading_integer)
        .unwrap_or(0)
}

pub struct IdAllocator<S> {
    source: S,
    current: Mutex<Option<u64>>,
}

impl<S: ContainerSource> IdAllocator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: Mutex::new(None),
        }
    }

    /// The engine is only queried the first time; later calls return the
    /// last id handed out.
    pub async fn initialize(&self) -> Result<u64> {
        let mut current = self.current.lock().await;
        self.ensure_seeded(&mut current).await
    }

    pub async fn next_id(&self) -> Result<u64> {
        let mut current = self.current.lock().await;
        let next = self.ensure_seeded(&mut current).await? + 1;
        *current = Some(next);
        Ok(next)
    }

    pub async fn current(&self) -> Option<u64> {
        *self.current.lock().await
    }

    async fn ensure_seeded(&self, current: &mut Option<u64>) -> Result<u64> {
        if let Some(id) = *current {
            return Ok(id);
        }

        let names = self.source.container_names().await?;
        let seed = names.iter().map(|name| trailing_id(name)).max().unwrap_or(0);
        log::info!(
            "Seeded container ids at {} from {} existing containers",
            seed,
            names.len()
        );

        *current = Some(seed);
        Ok(seed)
    }
}
