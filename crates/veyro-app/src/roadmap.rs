//! Roadmap session - the intake → generate → display → export flow
//! around the external generation and export collaborators.

use std::sync::Arc;

use veyro_core::domain::{BrandProfile, StrategyDocument};
use veyro_core::ports::{ExportError, GeneratorError, RoadmapExporter, RoadmapGenerator};
use veyro_shared::BrandFormData;

/// Errors surfaced by the roadmap flow. Intake problems are caught before
/// any collaborator call; everything else is terminal for the action that
/// raised it.
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// One user's pass through the strategy flow: holds the generated
/// document and the form that produced it until the user starts over.
pub struct RoadmapSession {
    generator: Arc<dyn RoadmapGenerator>,
    exporter: Arc<dyn RoadmapExporter>,
    document: Option<StrategyDocument>,
    form: Option<BrandFormData>,
}

impl RoadmapSession {
    pub fn new(generator: Arc<dyn RoadmapGenerator>, exporter: Arc<dyn RoadmapExporter>) -> Self {
        Self {
            generator,
            exporter,
            document: None,
            form: None,
        }
    }

    /// Validate the intake form and run one generation call. The form is
    /// kept alongside the document so export can reuse it.
    pub async fn generate(&mut self, form: BrandFormData) -> Result<(), RoadmapError> {
        if form.api_key.trim().is_empty() {
            return Err(RoadmapError::Validation(
                "Please enter your API key".to_string(),
            ));
        }
        if form.industry == "Other" && form.custom_industry.trim().is_empty() {
            return Err(RoadmapError::Validation(
                "Please specify your industry/category".to_string(),
            ));
        }

        let profile = brand_profile(&form);
        let document = self.generator.generate(&profile).await?;

        tracing::info!(modules = document.modules.len(), "Roadmap generated");
        self.document = Some(document);
        self.form = Some(form);
        Ok(())
    }

    pub fn document(&self) -> Option<&StrategyDocument> {
        self.document.as_ref()
    }

    /// Back to the intake state, dropping the current document and form.
    pub fn reset(&mut self) {
        self.document = None;
        self.form = None;
    }

    /// Render the held document to a downloadable file.
    pub fn export(&self) -> Result<Vec<u8>, RoadmapError> {
        let (document, form) = match (&self.document, &self.form) {
            (Some(document), Some(form)) => (document, form),
            _ => {
                return Err(RoadmapError::Validation(
                    "No roadmap to export".to_string(),
                ));
            }
        };

        Ok(self.exporter.export(document, &brand_profile(form))?)
    }
}

fn brand_profile(form: &BrandFormData) -> BrandProfile {
    BrandProfile {
        brand_name: form.brand_name.clone(),
        industry: form.resolved_industry().to_string(),
        target_audience: form.target_audience.clone(),
        goals: form.goals.clone(),
        experience: non_empty(&form.experience),
        additional_context: non_empty(&form.additional_context),
        api_key: form.api_key.trim().to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use veyro_core::domain::StrategyModule;

    struct StubGenerator {
        calls: AtomicUsize,
        fail_with: Option<fn() -> GeneratorError>,
    }

    impl StubGenerator {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(err: fn() -> GeneratorError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: Some(err),
            }
        }
    }

    #[async_trait]
    impl RoadmapGenerator for StubGenerator {
        async fn generate(
            &self,
            brand: &BrandProfile,
        ) -> Result<StrategyDocument, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.fail_with {
                return Err(err());
            }
            Ok(StrategyDocument {
                modules: vec![StrategyModule {
                    title: "Audience and Platform Strategy".to_string(),
                    content: format!("<p>{}</p>", brand.industry),
                }],
            })
        }
    }

    struct StubExporter;

    impl RoadmapExporter for StubExporter {
        fn export(
            &self,
            document: &StrategyDocument,
            _brand: &BrandProfile,
        ) -> Result<Vec<u8>, ExportError> {
            Ok(document.modules[0].content.clone().into_bytes())
        }
    }

    fn form() -> BrandFormData {
        BrandFormData {
            brand_name: "Veyro".to_string(),
            industry: "Technology/SaaS".to_string(),
            target_audience: "founders".to_string(),
            goals: "grow".to_string(),
            api_key: "AIzaTestKey".to_string(),
            ..Default::default()
        }
    }

    fn session(generator: StubGenerator) -> (RoadmapSession, Arc<StubGenerator>) {
        let generator = Arc::new(generator);
        (
            RoadmapSession::new(generator.clone(), Arc::new(StubExporter)),
            generator,
        )
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_the_provider_call() {
        let (mut session, generator) = session(StubGenerator::ok());
        let mut form = form();
        form.api_key = "  ".to_string();

        let err = session.generate(form).await.unwrap_err();

        assert!(matches!(err, RoadmapError::Validation(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(session.document().is_none());
    }

    #[tokio::test]
    async fn other_industry_requires_custom_text() {
        let (mut session, generator) = session(StubGenerator::ok());
        let mut form = form();
        form.industry = "Other".to_string();
        form.custom_industry = String::new();

        let err = session.generate(form).await.unwrap_err();

        assert!(matches!(err, RoadmapError::Validation(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generate_resolves_industry_and_holds_the_document() {
        let (mut session, _) = session(StubGenerator::ok());
        let mut form = form();
        form.industry = "Other".to_string();
        form.custom_industry = "Model railways".to_string();

        session.generate(form).await.unwrap();

        let document = session.document().unwrap();
        assert!(document.modules[0].content.contains("Model railways"));

        let bytes = session.export().unwrap();
        assert!(!bytes.is_empty());

        session.reset();
        assert!(session.document().is_none());
        assert!(matches!(
            session.export(),
            Err(RoadmapError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn provider_errors_pass_through_untouched() {
        let (mut session, _) = session(StubGenerator::failing(|| GeneratorError::QuotaExceeded));

        let err = session.generate(form()).await.unwrap_err();

        assert!(matches!(
            err,
            RoadmapError::Generator(GeneratorError::QuotaExceeded)
        ));
        assert!(session.document().is_none());
    }
}
