//! Application state and composition.

use std::sync::Arc;

use axismundi_domain::{KeyLocalizer, Localizer, RuleSetRegistry};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::json::{CatalogLocalizer, JsonActorRepository};
use crate::infrastructure::ports::{ActorRepo, RepoError};
use crate::use_cases;

/// Main application state.
///
/// Holds the shared repository and every use case container.
pub struct App {
    pub repo: Arc<dyn ActorRepo>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub derive: use_cases::DeriveUseCases,
    pub sheet: use_cases::SheetUseCases,
    pub skills: use_cases::SkillUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repo: Arc<dyn ActorRepo>,
        localizer: Arc<dyn Localizer>,
        seed_default_skills: bool,
    ) -> Self {
        let registry = Arc::new(RuleSetRegistry::new());

        let derive = use_cases::DeriveUseCases::new(repo.clone(), registry.clone());
        let sheet = use_cases::SheetUseCases::new(
            repo.clone(),
            use_cases::SheetBuilder::new(registry.clone(), localizer),
        );
        let skills = use_cases::SkillUseCases::new(repo.clone(), registry, seed_default_skills);

        Self {
            repo,
            use_cases: UseCases {
                derive,
                sheet,
                skills,
            },
        }
    }

    /// Wire the JSON file repository and label catalog named by `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let repo: Arc<dyn ActorRepo> = Arc::new(JsonActorRepository::new(&config.data_dir));
        let localizer: Arc<dyn Localizer> = match &config.locale_file {
            Some(path) => Arc::new(CatalogLocalizer::load(path)?),
            None => {
                tracing::debug!("No label catalog configured, sheets show label keys");
                Arc::new(KeyLocalizer)
            }
        };
        tracing::info!(
            data_dir = %config.data_dir.display(),
            seed_default_skills = config.seed_default_skills,
            "Engine configured"
        );
        Ok(Self::new(repo, localizer, config.seed_default_skills))
    }
}
