//! Startup wiring: config + source data -> Angie

use crate::application::errors::BotError;
use crate::application::messaging::{Angie, KeywordAnalyzer};
use crate::application::services::{assemble_tree, DocsService, EventsService, VersionsService};
use crate::infrastructure::config::Config;
use crate::infrastructure::sources::SourceData;

pub fn build_angie(config: &Config, data: SourceData) -> Result<Angie, BotError> {
    config.validate()?;

    let docs = DocsService::with_base_url(data.docs, config.sources.docs_base_url.clone());
    let events = EventsService::new(data.events);
    let versions = VersionsService::for_repository(config.sources.repository.clone(), data.tags);
    tracing::info!(
        "Command data: {} docs, {} events, {} tags",
        docs.len(),
        events.events().len(),
        versions.len()
    );

    let tree = assemble_tree(&[&docs, &events, &versions]);

    let mut builder = Angie::builder(config.bot.name.clone())
        .with_mode(config.bot.mode)
        .with_tree(tree)
        .with_maintainers(config.bot.maintainers.clone())
        .with_listen_all(config.bot.listen_all);

    for analyzer in &config.analyzers {
        builder = builder.with_analyzer(KeywordAnalyzer::new(
            analyzer.name.clone(),
            &analyzer.pattern,
            analyzer.reply.clone(),
        )?);
    }

    builder.build()
}
