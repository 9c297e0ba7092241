use std::sync::Arc;

use lexis_config::Config;
use lexis_lang_igala::IgalaProcessor;
use lexis_translator::{BackTranslator, DictionaryTranslator};
use tokio::sync::RwLock;

use crate::history::QualityHistory;

/// Shared application state, passed to all route handlers via axum `State`.
///
/// Everything except `history` is read-only after start-up.
pub struct AppState {
    pub config: Config,
    pub processor: Arc<IgalaProcessor>,
    pub translator: DictionaryTranslator,
    pub back_translator: BackTranslator<DictionaryTranslator>,
    pub history: RwLock<QualityHistory>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let processor = IgalaProcessor::with_additional_dicts(
            config.dictionary.embedded,
            &config.dictionary.additional_paths,
        );
        Self::with_processor(config, processor)
    }

    pub fn with_processor(config: Config, processor: IgalaProcessor) -> Arc<Self> {
        let translator = DictionaryTranslator::new(processor.dictionary());
        let history = QualityHistory::new(config.history.max_records_per_user);

        Arc::new(Self {
            back_translator: BackTranslator::new(translator.clone()),
            translator,
            processor: Arc::new(processor),
            history: RwLock::new(history),
            config,
        })
    }
}
