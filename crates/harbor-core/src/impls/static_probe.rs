//! Fixed-answer service probe for dev and tests.

use async_trait::async_trait;

use crate::ports::ServiceProbe;

/// Probe that always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe {
    available: bool,
}

impl StaticProbe {
    pub fn up() -> Self {
        Self { available: true }
    }

    pub fn down() -> Self {
        Self { available: false }
    }
}

#[async_trait]
impl ServiceProbe for StaticProbe {
    async fn check_available(&self, _url: &str) -> bool {
        self.available
    }
}
