use std::sync::Arc;

use kamus_config::Config;
use kamus_core::LookupService;
use kamus_dictionary::DictionaryProvider;

pub struct AppState {
    pub config: Config,
    pub service: LookupService,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn DictionaryProvider>) -> Self {
        Self {
            config,
            service: LookupService::new(provider),
        }
    }
}
