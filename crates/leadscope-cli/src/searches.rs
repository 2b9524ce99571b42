//! Saved-search command handlers.

use clap::Subcommand;
use leadscope_core::{AppConfig, SavedSearch, SearchStore, YamlSearchStore};
use uuid::Uuid;

use crate::{load_leads, LeadsInput};

/// Sub-commands available under `searches`.
#[derive(Debug, Subcommand)]
pub(crate) enum SearchesCommands {
    /// List saved searches, most recent first
    List,
    /// Save the search that produced a leads file
    Save {
        /// Display name for the saved search
        #[arg(long)]
        name: String,
        #[command(flatten)]
        input: LeadsInput,
    },
    /// Delete a saved search by id
    Delete {
        id: Uuid,
    },
}

/// Dispatch a `searches` sub-command against the configured store.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or the leads
/// file for `save` cannot be loaded.
pub(crate) fn run_searches(config: &AppConfig, command: SearchesCommands) -> anyhow::Result<()> {
    let store = YamlSearchStore::new(&config.searches_path);
    run_with_store(&store, command)
}

fn run_with_store(store: &dyn SearchStore, command: SearchesCommands) -> anyhow::Result<()> {
    match command {
        SearchesCommands::List => {
            let searches = store.list()?;
            if searches.is_empty() {
                println!("no saved searches");
                return Ok(());
            }
            println!("{:<38}{:<18}{:<8}{:<26}LOCATION", "ID", "SAVED", "LEADS", "NAME");
            for search in searches {
                println!(
                    "{:<38}{:<18}{:<8}{:<26}{}{}",
                    search.id,
                    search.saved_at.format("%Y-%m-%d %H:%M"),
                    search.lead_count,
                    search.name,
                    search.location,
                    search
                        .business_type
                        .as_deref()
                        .map(|t| format!(" ({t})"))
                        .unwrap_or_default()
                );
            }
        }
        SearchesCommands::Save { name, input } => {
            let leads = load_leads(&input.leads)?;
            let search = SavedSearch::new(name, &input.search(), leads.len());
            store.save(&search)?;
            tracing::info!(id = %search.id, leads = search.lead_count, "saved search");
            println!("saved search {}", search.id);
        }
        SearchesCommands::Delete { id } => {
            if store.delete(id)? {
                println!("deleted search {id}");
            } else {
                anyhow::bail!("saved search {id} not found");
            }
        }
    }

    Ok(())
}
