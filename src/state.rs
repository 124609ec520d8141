//! Application state: the published corpus snapshot and the loaded config.
//!
//! The corpus is immutable once published. Requests clone the inner `Arc`
//! and generate without holding the lock; a reload builds a fresh corpus and
//! swaps the pointer, so in-flight batches keep their snapshot.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::provider::{CorpusError, MovieCorpus};

#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<RwLock<Arc<MovieCorpus>>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, corpus: MovieCorpus) -> Self {
        Self {
            corpus: Arc::new(RwLock::new(Arc::new(corpus))),
            config,
        }
    }

    /// Current corpus snapshot.
    pub async fn snapshot(&self) -> Arc<MovieCorpus> {
        self.corpus.read().await.clone()
    }

    /// Re-read the corpus file and publish it. On failure the previous
    /// snapshot keeps being served.
    #[instrument(level = "info", skip(self), fields(path = %self.config.corpus.path))]
    pub async fn reload(&self) -> Result<usize, CorpusError> {
        match MovieCorpus::load(&self.config.corpus.path, &self.config.corpus) {
            Ok(fresh) => {
                let movies = fresh.len();
                *self.corpus.write().await = Arc::new(fresh);
                info!(target: "corpus", movies, "Corpus snapshot swapped");
                Ok(movies)
            }
            Err(e) => {
                error!(target: "corpus", error = %e, "Corpus reload failed; keeping previous snapshot");
                Err(e)
            }
        }
    }
}
