//! Entity command implementation

use std::io::Write;

use anyhow::Result;
use clap::Args;
use nlpcli_core::analysis::collect_entities;
use nlpcli_core::provider::{require, Capability};

use super::{Session, NOTHING_TO_PROCESS};
use crate::output::{Console, EntityTable};

/// Arguments for the entity command
#[derive(Debug, Clone, Default, Args)]
pub struct EntityArgs {
    /// Hide start/end character offsets
    #[arg(long)]
    pub no_positions: bool,
}

impl EntityArgs {
    /// Print a table of all named entities in sentence order
    pub fn execute<W: Write>(&self, session: &Session<'_>, console: &mut Console<W>) -> Result<()> {
        // A missing capability is reported even for empty input
        require(session.provider, Capability::Entities)?;

        if session.ctx.is_empty() {
            return console.notice(NOTHING_TO_PROCESS);
        }

        let progress = session.progress("entity");
        let mentions = collect_entities(session.ctx, session.provider, || progress.tick());
        progress.finish();
        let mentions = mentions?;

        if mentions.is_empty() {
            return console.notice("No named entities found.");
        }

        let table = EntityTable::new(session.config.entity.show_positions && !self.no_positions);
        for line in table.header() {
            console.plain(&line)?;
        }
        for mention in &mentions {
            console.plain(&table.format(mention))?;
        }
        log::info!("Found {} entities", mentions.len());
        Ok(())
    }
}
