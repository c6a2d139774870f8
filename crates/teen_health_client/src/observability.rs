use serde::Serialize;

use crate::GuidanceClient;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub ready: bool,
    /// False means every request is answered from the fallback table.
    pub ai_configured: bool,
}

impl Health {
    pub fn readiness(client: &dyn GuidanceClient) -> Self {
        Self {
            ready: true,
            ai_configured: client.is_configured(),
        }
    }
}
