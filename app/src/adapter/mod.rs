pub mod api;
mod file_store;
mod llm;
mod template;

use serde::Deserialize;

use crate::savings::{SavingsAdvisor, SavingsRequest, SavingsSuggestion, SuggestionGenerator};

pub use file_store::JsonFileStore;
pub use llm::{LlmConfig, LlmGenerator};
pub use template::TemplateGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Template,
    Llm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorSettings {
    pub generator: GeneratorKind,
    pub llm: Option<LlmConfig>,
}

impl AdvisorSettings {
    pub fn new_advisor(&self) -> anyhow::Result<SavingsAdvisor<Generator>> {
        let generator = match self.generator {
            GeneratorKind::Template => Generator::Template(TemplateGenerator),
            GeneratorKind::Llm => {
                let config = self
                    .llm
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("advisor.llm settings are required for the llm generator"))?;
                Generator::Llm(LlmGenerator::new(config)?)
            }
        };

        tracing::info!("Savings suggestions phrased by {:?} generator", self.generator);
        Ok(SavingsAdvisor::new(generator))
    }
}

pub enum Generator {
    Template(TemplateGenerator),
    Llm(LlmGenerator),
}

impl SuggestionGenerator for Generator {
    async fn generate(&self, request: &SavingsRequest) -> anyhow::Result<SavingsSuggestion> {
        match self {
            Generator::Template(g) => g.generate(request).await,
            Generator::Llm(g) => g.generate(request).await,
        }
    }
}
