//! The bulk export action behind the "Export" buttons.

use leadscope_core::{BusinessLead, ExportArtifact, ExportError, LeadExporter, Notice, Notifier};

use crate::selection::SelectionManager;

/// Export the selected rows of a view, or every displayed row when nothing
/// is selected, and report the outcome through `notifier`.
///
/// # Errors
///
/// Returns [`ExportError::NoLeads`] when there is nothing to export, or the
/// exporter's own error.
pub fn export_leads<'a, I>(
    selection: &SelectionManager,
    rows: I,
    exporter: &dyn LeadExporter,
    notifier: &dyn Notifier,
    filename: Option<&str>,
) -> Result<ExportArtifact, ExportError>
where
    I: IntoIterator<Item = &'a BusinessLead>,
{
    let leads = selection.resolve(rows);

    if leads.is_empty() {
        notifier.notify(Notice::error("No leads to export"));
        return Err(ExportError::NoLeads);
    }

    tracing::info!(
        count = leads.len(),
        selected = selection.len(),
        "exporting leads"
    );

    match exporter.export(&leads, filename) {
        Ok(artifact) => {
            notifier.notify(Notice::info(format!(
                "Exported {} leads to {}",
                artifact.lead_count,
                artifact.path.display()
            )));
            Ok(artifact)
        }
        Err(e) => {
            tracing::warn!(error = %e, "lead export failed");
            notifier.notify(Notice::error(format!("Export failed: {e}")));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use leadscope_core::NoticeLevel;

    use super::*;

    #[derive(Default)]
    struct RecordingExporter {
        exported: RefCell<Vec<Vec<String>>>,
        fail: bool,
    }

    impl LeadExporter for RecordingExporter {
        fn export(
            &self,
            leads: &[&BusinessLead],
            filename: Option<&str>,
        ) -> Result<ExportArtifact, ExportError> {
            if self.fail {
                return Err(ExportError::Encode("disk full".to_string()));
            }
            self.exported
                .borrow_mut()
                .push(leads.iter().map(|l| l.name.clone()).collect());
            Ok(ExportArtifact {
                path: PathBuf::from(filename.unwrap_or("leads.json")),
                lead_count: leads.len(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn rows() -> Vec<BusinessLead> {
        vec![
            BusinessLead::named("Alpha"),
            BusinessLead::named("Bravo"),
            BusinessLead::named("Charlie"),
        ]
    }

    #[test]
    fn exports_selected_rows_in_display_order() {
        let rows = rows();
        let mut selection = SelectionManager::new();
        selection.toggle(rows[2].key());
        selection.toggle(rows[0].key());
        let exporter = RecordingExporter::default();
        let notifier = RecordingNotifier::default();

        let artifact =
            export_leads(&selection, &rows, &exporter, &notifier, Some("picked.json")).unwrap();

        assert_eq!(artifact.lead_count, 2);
        assert_eq!(artifact.path, PathBuf::from("picked.json"));
        assert_eq!(exporter.exported.borrow()[0], vec!["Alpha", "Charlie"]);
        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert!(notices[0].message.contains("Exported 2 leads"));
    }

    #[test]
    fn empty_selection_exports_everything() {
        let rows = rows();
        let exporter = RecordingExporter::default();
        let notifier = RecordingNotifier::default();

        let artifact =
            export_leads(&SelectionManager::new(), &rows, &exporter, &notifier, None).unwrap();

        assert_eq!(artifact.lead_count, 3);
    }

    #[test]
    fn nothing_displayed_is_an_error() {
        let exporter = RecordingExporter::default();
        let notifier = RecordingNotifier::default();
        let nothing: Vec<BusinessLead> = Vec::new();

        let result = export_leads(&SelectionManager::new(), &nothing, &exporter, &notifier, None);

        assert!(matches!(result, Err(ExportError::NoLeads)));
        assert!(exporter.exported.borrow().is_empty());
        assert_eq!(notifier.notices.borrow()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn exporter_failure_is_reported() {
        let rows = rows();
        let exporter = RecordingExporter {
            fail: true,
            ..RecordingExporter::default()
        };
        let notifier = RecordingNotifier::default();

        let result = export_leads(&SelectionManager::new(), &rows, &exporter, &notifier, None);

        assert!(matches!(result, Err(ExportError::Encode(_))));
        let notices = notifier.notices.borrow();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(notices[0].message.contains("disk full"));
    }
}
