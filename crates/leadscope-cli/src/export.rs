//! File-backed export collaborator and the `export` command.

use std::path::{Path, PathBuf};

use chrono::Utc;
use leadscope_core::{
    AppConfig, BusinessLead, ExportArtifact, ExportError, LeadExporter, LeadKey, Notice,
    NoticeLevel, Notifier,
};
use leadscope_quality::{export_leads, LeadFilter, SelectionManager, Tier};

use crate::{load_leads, scoring_policy, FilterArgs, LeadsInput};

/// Writes leads as a pretty-printed JSON array into a directory.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileExporter {
    dir: PathBuf,
}

impl JsonFileExporter {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Final path for `filename`, keeping only its last component so an
    /// export can never escape the export directory.
    fn target(&self, filename: Option<&str>) -> PathBuf {
        let name = filename
            .and_then(|f| Path::new(f).file_name())
            .map_or_else(
                || format!("leads-{}.json", Utc::now().format("%Y%m%d-%H%M%S")),
                |f| f.to_string_lossy().into_owned(),
            );
        self.dir.join(name)
    }
}

impl LeadExporter for JsonFileExporter {
    fn export(
        &self,
        leads: &[&BusinessLead],
        filename: Option<&str>,
    ) -> Result<ExportArtifact, ExportError> {
        let path = self.target(filename);
        let body =
            serde_json::to_string_pretty(leads).map_err(|e| ExportError::Encode(e.to_string()))?;

        std::fs::create_dir_all(&self.dir).map_err(|e| ExportError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        std::fs::write(&path, body).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(ExportArtifact {
            path,
            lead_count: leads.len(),
        })
    }
}

/// Prints notices to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
        }
    }
}

/// Resolve a full key or unique key prefix against the displayed rows.
fn resolve_key(rows: &[&BusinessLead], wanted: &str) -> anyhow::Result<LeadKey> {
    let wanted = wanted.trim().to_lowercase();
    let mut matches: Vec<LeadKey> = rows
        .iter()
        .map(|lead| lead.key())
        .filter(|key| !wanted.is_empty() && key.as_str().starts_with(&wanted))
        .collect();
    matches.sort();
    matches.dedup();

    match matches.len() {
        0 => anyhow::bail!("no displayed lead has key '{wanted}'"),
        1 => Ok(matches.remove(0)),
        n => anyhow::bail!("key prefix '{wanted}' is ambiguous ({n} leads)"),
    }
}

/// Export the selected (or all displayed) leads of a tiered view.
///
/// # Errors
///
/// Returns an error if the leads cannot be loaded, a selection key does not
/// resolve to exactly one displayed lead, or the export fails.
pub(crate) fn run_export(
    config: &AppConfig,
    input: &LeadsInput,
    filter: &FilterArgs,
    only_tier: Option<Tier>,
    select: &[String],
    filename: Option<&str>,
) -> anyhow::Result<()> {
    let leads = load_leads(&input.leads)?;
    let filter = LeadFilter::from(filter);
    let visible: Vec<BusinessLead> = leads.into_iter().filter(|l| filter.matches(l)).collect();
    let grouped = scoring_policy(config)?.group(&visible, &input.search());

    let rows: Vec<&BusinessLead> = grouped
        .iter()
        .filter(|scored| only_tier.is_none_or(|t| t == scored.quality.tier))
        .map(|scored| scored.lead)
        .collect();

    let mut selection = SelectionManager::new();
    for wanted in select {
        selection.select_all([resolve_key(&rows, wanted)?]);
    }

    let exporter = JsonFileExporter::new(&config.export_dir);
    export_leads(
        &selection,
        rows.iter().copied(),
        &exporter,
        &TerminalNotifier,
        filename,
    )?;

    Ok(())
}
