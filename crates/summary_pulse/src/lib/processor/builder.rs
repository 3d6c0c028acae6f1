use std::{sync::Arc, time::Duration};

use summary_datastore::DataStore;

use crate::{
    llm::completer::{Completer, LlmSettings},
    normalizer::{Normalizer, DEFAULT_CHAR_BUDGET},
    processor::DEFAULT_COMPLETION_TIMEOUT,
    yt::{CaptionFetcher, CaptionLocator},
    SummaryProcessor,
};

pub struct SummaryProcessorBuilder<D = (), L = (), F = (), C = ()> {
    store: D,
    locator: L,
    fetcher: F,
    completer: C,
    settings: LlmSettings,
    char_budget: usize,
    completion_timeout: Duration,
}

impl SummaryProcessorBuilder {
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            store: (),
            locator: (),
            fetcher: (),
            completer: (),
            settings,
            char_budget: DEFAULT_CHAR_BUDGET,
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }
}

impl<D, L, F, C> SummaryProcessorBuilder<D, L, F, C> {
    pub fn store<D2: DataStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> SummaryProcessorBuilder<D2, L, F, C> {
        SummaryProcessorBuilder {
            store,
            locator: self.locator,
            fetcher: self.fetcher,
            completer: self.completer,
            settings: self.settings,
            char_budget: self.char_budget,
            completion_timeout: self.completion_timeout,
        }
    }

    pub fn locator<L2: CaptionLocator + Send + Sync + 'static>(
        self,
        locator: L2,
    ) -> SummaryProcessorBuilder<D, L2, F, C> {
        SummaryProcessorBuilder {
            store: self.store,
            locator,
            fetcher: self.fetcher,
            completer: self.completer,
            settings: self.settings,
            char_budget: self.char_budget,
            completion_timeout: self.completion_timeout,
        }
    }

    pub fn fetcher<F2: CaptionFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> SummaryProcessorBuilder<D, L, F2, C> {
        SummaryProcessorBuilder {
            store: self.store,
            locator: self.locator,
            fetcher,
            completer: self.completer,
            settings: self.settings,
            char_budget: self.char_budget,
            completion_timeout: self.completion_timeout,
        }
    }

    pub fn completer<C2: Completer + Send + Sync + 'static>(
        self,
        completer: C2,
    ) -> SummaryProcessorBuilder<D, L, F, C2> {
        SummaryProcessorBuilder {
            store: self.store,
            locator: self.locator,
            fetcher: self.fetcher,
            completer,
            settings: self.settings,
            char_budget: self.char_budget,
            completion_timeout: self.completion_timeout,
        }
    }

    pub fn char_budget(mut self, char_budget: usize) -> Self {
        self.char_budget = char_budget;
        self
    }

    pub fn completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }
}

impl<D, L, F, C> SummaryProcessorBuilder<D, L, F, C>
where
    D: DataStore + Send + Sync + 'static,
    L: CaptionLocator + Send + Sync + 'static,
    F: CaptionFetcher + Send + Sync + 'static,
    C: Completer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryProcessor<D, L, F, C> {
        SummaryProcessor {
            store: self.store,
            locator: self.locator,
            fetcher: self.fetcher,
            completer: Arc::new(self.completer),
            settings: self.settings,
            normalizer: Normalizer::new(self.char_budget),
            completion_timeout: self.completion_timeout,
        }
    }
}
