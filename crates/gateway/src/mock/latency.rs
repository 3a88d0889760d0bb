use std::time::Duration;

/// Simulated backend latency, one duration per gateway operation.
///
/// The defaults match a plausible remote backend; tests use
/// [`LatencyProfile::zero`] so suites finish instantly.
#[derive(Debug, Clone)]
pub struct LatencyProfile {
    pub list_properties: Duration,
    pub get_property: Duration,
    pub create_property: Duration,
    pub update_property: Duration,
    pub delete_property: Duration,
    pub upload_documents: Duration,
    pub get_documents: Duration,
    pub delete_document: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_properties: Duration::from_millis(800),
            get_property: Duration::from_millis(500),
            create_property: Duration::from_millis(1000),
            update_property: Duration::from_millis(800),
            delete_property: Duration::from_millis(600),
            upload_documents: Duration::from_millis(1500),
            get_documents: Duration::from_millis(400),
            delete_document: Duration::from_millis(500),
        }
    }
}

impl LatencyProfile {
    /// No artificial latency at all.
    pub fn zero() -> Self {
        Self {
            list_properties: Duration::ZERO,
            get_property: Duration::ZERO,
            create_property: Duration::ZERO,
            update_property: Duration::ZERO,
            delete_property: Duration::ZERO,
            upload_documents: Duration::ZERO,
            get_documents: Duration::ZERO,
            delete_document: Duration::ZERO,
        }
    }

    /// Load the profile from the environment.
    ///
    /// | Env Var              | Default |
    /// |----------------------|---------|
    /// | `MOCK_LATENCY_SCALE` | `1.0`   |
    ///
    /// The scale multiplies every default duration; `0` disables latency.
    pub fn from_env() -> Self {
        let scale: f64 = std::env::var("MOCK_LATENCY_SCALE")
            .unwrap_or_else(|_| "1.0".into())
            .parse()
            .expect("MOCK_LATENCY_SCALE must be a valid f64");
        Self::default().scaled(scale)
    }

    /// Multiply every duration by the given factor.
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |d: Duration| d.mul_f64(factor);
        Self {
            list_properties: scale(self.list_properties),
            get_property: scale(self.get_property),
            create_property: scale(self.create_property),
            update_property: scale(self.update_property),
            delete_property: scale(self.delete_property),
            upload_documents: scale(self.upload_documents),
            get_documents: scale(self.get_documents),
            delete_document: scale(self.delete_document),
        }
    }
}
