use crate::domain::{BrandProfile, StrategyDocument};

/// Export collaborator - renders a strategy document plus the original
/// intake into a downloadable file (PDF in the shipped implementation).
pub trait RoadmapExporter: Send + Sync {
    fn export(
        &self,
        document: &StrategyDocument,
        brand: &BrandProfile,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Export failures surface as one generic error.
#[derive(Debug, thiserror::Error)]
#[error("Export failed: {0}")]
pub struct ExportError(pub String);
