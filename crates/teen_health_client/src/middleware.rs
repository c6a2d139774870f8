//! Middleware layer for cross-cutting concerns around guidance generation.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::{GuidanceClient, GuidanceContext, GuidanceRecord};

/// Wraps any [`GuidanceClient`] and logs how long each generation took.
#[derive(Clone)]
pub struct LoggingGuidance<C: GuidanceClient> {
    inner: Arc<C>,
}

impl<C: GuidanceClient> LoggingGuidance<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: GuidanceClient> GuidanceClient for LoggingGuidance<C> {
    async fn generate(&self, ctx: &GuidanceContext) -> GuidanceRecord {
        let start = Instant::now();
        debug!(
            age = ctx.measurement.age,
            category = %ctx.bmi.category,
            "Starting guidance generation"
        );
        let record = self.inner.generate(ctx).await;
        debug!("Guidance generation finished in {:?}", start.elapsed());
        record
    }

    fn is_configured(&self) -> bool {
        self.inner.is_configured()
    }
}
