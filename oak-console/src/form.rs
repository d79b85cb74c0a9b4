//! Config form controller.
//!
//! One draft per configuration section, edited exclusively through
//! [`FormAction`] so every side effect (base URL defaults, chunk-size
//! derivation, test invalidation) lives in a single reducer instead of
//! being scattered across event handlers. Numeric fields are kept as the
//! user typed them; coercion to the wire format happens once, in
//! [`ConfigForm::build_save_payload`].

use crate::api_client::ApiClient;
use oak_api::types::{
    ConfigResponse, ConfigSection, DiscoverModelsRequest, DiscoveredModel, EmbeddingSettingsWire,
    SummarizationSettingsWire, TestConfigRequest, UpdateConfigRequest,
};
use oak_core::{
    coerce_positive, derive_chunk_size, validate_embedding, validate_summarization,
    EmbeddingConfig, Provider, SummarizationConfig, SummarizationValidation, TestOutcome,
    ValidationMode, ValidationResult,
};

/// Editable embedding fields, as entered. Numeric fields are raw strings;
/// blank or unparseable text coerces to null on save, never to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbeddingDraft {
    pub provider: Option<Provider>,
    pub base_url: String,
    pub model: String,
    pub dimensions: String,
    pub context_window: String,
    pub chunk_size: String,
}

/// Editable summarization fields, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarizationDraft {
    pub enabled: bool,
    pub provider: Option<Provider>,
    pub base_url: String,
    pub model: String,
    pub context_window: String,
}

/// An edit to the config form. Section-specific numeric fields
/// (dimensions, chunk size) only exist on the embedding block.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetProvider {
        section: ConfigSection,
        provider: Provider,
    },
    SetBaseUrl {
        section: ConfigSection,
        value: String,
    },
    SetModel {
        section: ConfigSection,
        value: String,
    },
    SetDimensions {
        value: String,
    },
    SetContextWindow {
        section: ConfigSection,
        value: String,
    },
    SetChunkSize {
        value: String,
    },
    SetSummarizationEnabled {
        enabled: bool,
    },
    /// Pick a model from the discovered list. Only values the discovery
    /// actually reported are copied; nothing is guessed.
    SelectModel {
        section: ConfigSection,
        model: DiscoveredModel,
    },
    SetDiscoveredModels {
        section: ConfigSection,
        models: Vec<DiscoveredModel>,
    },
    RecordTestResult {
        section: ConfigSection,
        outcome: TestOutcome,
    },
    /// Rebaseline after a successful save.
    MarkSaved,
}

/// Draft state for both configuration sections plus everything needed to
/// decide whether a save is allowed.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    mode: ValidationMode,
    embedding: EmbeddingDraft,
    summarization: SummarizationDraft,
    embedding_test: Option<TestOutcome>,
    summarization_test: Option<TestOutcome>,
    embedding_models: Vec<DiscoveredModel>,
    summarization_models: Vec<DiscoveredModel>,
    baseline_embedding: EmbeddingDraft,
    baseline_summarization: SummarizationDraft,
}

impl ConfigForm {
    /// Build a form from the daemon's current configuration.
    pub fn from_server(config: &ConfigResponse, mode: ValidationMode) -> Self {
        let embedding = embedding_draft_from_wire(&config.embedding);
        let summarization = summarization_draft_from_wire(&config.summarization);
        Self {
            mode,
            embedding_test: config.embedding.last_test.clone(),
            summarization_test: config.summarization.last_test.clone(),
            embedding_models: Vec::new(),
            summarization_models: Vec::new(),
            baseline_embedding: embedding.clone(),
            baseline_summarization: summarization.clone(),
            embedding,
            summarization,
        }
    }

    pub fn embedding(&self) -> &EmbeddingDraft {
        &self.embedding
    }

    pub fn summarization(&self) -> &SummarizationDraft {
        &self.summarization
    }

    pub fn discovered_models(&self, section: ConfigSection) -> &[DiscoveredModel] {
        match section {
            ConfigSection::Embedding => &self.embedding_models,
            ConfigSection::Summarization => &self.summarization_models,
        }
    }

    pub fn last_test(&self, section: ConfigSection) -> Option<&TestOutcome> {
        match section {
            ConfigSection::Embedding => self.embedding_test.as_ref(),
            ConfigSection::Summarization => self.summarization_test.as_ref(),
        }
    }

    /// Apply one edit, with its side effects.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetProvider { section, provider } => {
                match section {
                    ConfigSection::Embedding => {
                        self.embedding.provider = Some(provider);
                        self.embedding.base_url = provider.default_base_url().to_string();
                        self.embedding.model.clear();
                    }
                    ConfigSection::Summarization => {
                        self.summarization.provider = Some(provider);
                        self.summarization.base_url = provider.default_base_url().to_string();
                        self.summarization.model.clear();
                    }
                }
                self.invalidate(section);
            }
            FormAction::SetBaseUrl { section, value } => {
                match section {
                    ConfigSection::Embedding => self.embedding.base_url = value,
                    ConfigSection::Summarization => self.summarization.base_url = value,
                }
                self.invalidate(section);
            }
            FormAction::SetModel { section, value } => {
                match section {
                    ConfigSection::Embedding => self.embedding.model = value,
                    ConfigSection::Summarization => self.summarization.model = value,
                }
                self.invalidate(section);
            }
            FormAction::SetDimensions { value } => {
                self.embedding.dimensions = value;
            }
            FormAction::SetContextWindow { section, value } => {
                match section {
                    ConfigSection::Embedding => {
                        // Any flow that changes the context window rederives
                        // the recommended chunk size, provided the new value
                        // parses.
                        if let Some(window) = coerce_positive(&value) {
                            self.embedding.chunk_size = derive_chunk_size(window).to_string();
                        }
                        self.embedding.context_window = value;
                    }
                    ConfigSection::Summarization => {
                        self.summarization.context_window = value;
                    }
                }
            }
            FormAction::SetChunkSize { value } => {
                self.embedding.chunk_size = value;
            }
            FormAction::SetSummarizationEnabled { enabled } => {
                self.summarization.enabled = enabled;
            }
            FormAction::SelectModel { section, model } => {
                // Picking from the discovered list changes the model, so the
                // old test result is stale; the list itself stays.
                match section {
                    ConfigSection::Embedding => {
                        self.embedding.model = model.name;
                        self.embedding_test = None;
                        if let Some(dimensions) = model.dimensions {
                            self.embedding.dimensions = dimensions.to_string();
                        }
                        if let Some(window) = model.context_window {
                            self.embedding.context_window = window.to_string();
                            self.embedding.chunk_size = derive_chunk_size(window).to_string();
                        }
                    }
                    ConfigSection::Summarization => {
                        self.summarization.model = model.name;
                        self.summarization_test = None;
                        if let Some(window) = model.context_window {
                            self.summarization.context_window = window.to_string();
                        }
                    }
                }
            }
            FormAction::SetDiscoveredModels { section, models } => match section {
                ConfigSection::Embedding => self.embedding_models = models,
                ConfigSection::Summarization => self.summarization_models = models,
            },
            FormAction::RecordTestResult { section, outcome } => {
                if outcome.success {
                    match section {
                        ConfigSection::Embedding => {
                            if let Some(dimensions) = outcome.dimensions {
                                self.embedding.dimensions = dimensions.to_string();
                            }
                            if let Some(window) = outcome.context_window {
                                self.embedding.context_window = window.to_string();
                                self.embedding.chunk_size = derive_chunk_size(window).to_string();
                            }
                        }
                        ConfigSection::Summarization => {
                            if let Some(window) = outcome.context_window {
                                self.summarization.context_window = window.to_string();
                            }
                        }
                    }
                }
                match section {
                    ConfigSection::Embedding => self.embedding_test = Some(outcome),
                    ConfigSection::Summarization => self.summarization_test = Some(outcome),
                }
            }
            FormAction::MarkSaved => {
                self.baseline_embedding = self.embedding.clone();
                self.baseline_summarization = self.summarization.clone();
            }
        }
    }

    /// Replace the drafts with fresh server state, unless the user holds
    /// unsaved edits; a dirty form wins over a background refresh.
    /// Returns whether the refresh was applied.
    pub fn refresh_from_server(&mut self, config: &ConfigResponse) -> bool {
        if self.is_dirty() {
            tracing::warn!("suppressing config refresh: form has unsaved edits");
            return false;
        }
        *self = Self::from_server(config, self.mode);
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.embedding != self.baseline_embedding
            || self.summarization != self.baseline_summarization
    }

    /// Current embedding block as the validators see it.
    pub fn embedding_config(&self) -> EmbeddingConfig {
        EmbeddingConfig {
            provider: self.embedding.provider,
            base_url: self.embedding.base_url.clone(),
            model: self.embedding.model.clone(),
            dimensions: coerce_positive(&self.embedding.dimensions),
            context_window: coerce_positive(&self.embedding.context_window),
            chunk_size: coerce_positive(&self.embedding.chunk_size),
            last_test: self.embedding_test.clone(),
        }
    }

    /// Current summarization block as the validators see it.
    pub fn summarization_config(&self) -> SummarizationConfig {
        SummarizationConfig {
            enabled: self.summarization.enabled,
            provider: self.summarization.provider,
            base_url: self.summarization.base_url.clone(),
            model: self.summarization.model.clone(),
            context_window: coerce_positive(&self.summarization.context_window),
            last_test: self.summarization_test.clone(),
        }
    }

    /// Recomputed from scratch on every call; never cached.
    pub fn embedding_validation(&self) -> ValidationResult {
        validate_embedding(&self.embedding_config(), self.mode)
    }

    pub fn summarization_validation(&self) -> SummarizationValidation {
        validate_summarization(&self.summarization_config(), self.mode)
    }

    /// A save is offered only for a dirty form that validates on both
    /// sections. Warnings never block.
    pub fn can_save(&self) -> bool {
        self.is_dirty()
            && self.embedding_validation().is_valid()
            && self.summarization_validation().is_valid()
    }

    /// Wire payload for `PUT /config`. Blank or unparseable numeric input
    /// becomes null, never zero.
    pub fn build_save_payload(&self) -> UpdateConfigRequest {
        UpdateConfigRequest {
            embedding: EmbeddingSettingsWire {
                provider: self.embedding.provider,
                base_url: Some(self.embedding.base_url.clone()),
                model: Some(self.embedding.model.clone()),
                dimensions: coerce_positive(&self.embedding.dimensions),
                context_tokens: coerce_positive(&self.embedding.context_window),
                max_chunk_chars: coerce_positive(&self.embedding.chunk_size),
                last_test: None,
            },
            summarization: SummarizationSettingsWire {
                enabled: self.summarization.enabled,
                provider: self.summarization.provider,
                base_url: Some(self.summarization.base_url.clone()),
                model: Some(self.summarization.model.clone()),
                context_tokens: coerce_positive(&self.summarization.context_window),
                last_test: None,
            },
        }
    }

    /// Request for Test & Detect on a section, when its connection fields
    /// are filled in.
    pub fn test_request(&self, section: ConfigSection) -> Option<TestConfigRequest> {
        match section {
            ConfigSection::Embedding => Some(TestConfigRequest {
                provider: self.embedding.provider?,
                base_url: non_empty(&self.embedding.base_url)?,
                model: non_empty(&self.embedding.model)?,
            }),
            ConfigSection::Summarization => Some(TestConfigRequest {
                provider: self.summarization.provider?,
                base_url: non_empty(&self.summarization.base_url)?,
                model: non_empty(&self.summarization.model)?,
            }),
        }
    }

    fn discovery_request(&self, section: ConfigSection) -> Option<DiscoverModelsRequest> {
        let (provider, base_url) = match section {
            ConfigSection::Embedding => (self.embedding.provider, &self.embedding.base_url),
            ConfigSection::Summarization => {
                (self.summarization.provider, &self.summarization.base_url)
            }
        };
        Some(DiscoverModelsRequest {
            provider: provider?,
            base_url: non_empty(base_url)?,
        })
    }

    /// Best-effort model discovery for both sections, run once on page
    /// load. Failures are logged and swallowed so the user can retry from
    /// the form; nothing here blocks.
    pub async fn run_initial_discovery(&mut self, client: &ApiClient) {
        for section in [ConfigSection::Embedding, ConfigSection::Summarization] {
            let Some(request) = self.discovery_request(section) else {
                continue;
            };
            match client.discover_models(section, &request).await {
                Ok(response) if response.success => {
                    self.apply(FormAction::SetDiscoveredModels {
                        section,
                        models: response.models,
                    });
                }
                Ok(response) => {
                    tracing::debug!(
                        section = %section,
                        error = response.error.as_deref().unwrap_or("unknown"),
                        "initial model discovery reported failure"
                    );
                }
                Err(err) => {
                    tracing::debug!(section = %section, error = %err, "initial model discovery failed");
                }
            }
        }
    }

    /// Clear the section's test result and discovered model list; called
    /// for every connection-field change.
    fn invalidate(&mut self, section: ConfigSection) {
        match section {
            ConfigSection::Embedding => {
                self.embedding_test = None;
                self.embedding_models.clear();
            }
            ConfigSection::Summarization => {
                self.summarization_test = None;
                self.summarization_models.clear();
            }
        }
    }
}

fn embedding_draft_from_wire(wire: &EmbeddingSettingsWire) -> EmbeddingDraft {
    EmbeddingDraft {
        provider: wire.provider,
        base_url: wire.base_url.clone().unwrap_or_default(),
        model: wire.model.clone().unwrap_or_default(),
        dimensions: number_to_field(wire.dimensions),
        context_window: number_to_field(wire.context_tokens),
        chunk_size: number_to_field(wire.max_chunk_chars),
    }
}

fn summarization_draft_from_wire(wire: &SummarizationSettingsWire) -> SummarizationDraft {
    SummarizationDraft {
        enabled: wire.enabled,
        provider: wire.provider,
        base_url: wire.base_url.clone().unwrap_or_default(),
        model: wire.model.clone().unwrap_or_default(),
        context_window: number_to_field(wire.context_tokens),
    }
}

fn number_to_field(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
