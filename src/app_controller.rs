use log::debug;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document::Document;
use crate::errors::MergeError;
use crate::file_utils::FileManager;
use crate::merge::MergePlan;
use crate::reporter::{LogReporter, Notice, Reporter};
use crate::writer;

// @module: Application controller for subtitle merging

/// Counts describing a finished merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub base_styles: usize,
    pub appended_styles: usize,
    pub renamed_styles: usize,
    pub base_events: usize,
    pub appended_events: usize,
    pub rewritten_events: usize,
}

impl MergeSummary {
    fn from_plan(plan: &MergePlan, output: &Path) -> Self {
        MergeSummary {
            output: output.to_path_buf(),
            base_styles: plan.styles.base_styles.len(),
            appended_styles: plan.styles.appended_styles.len(),
            renamed_styles: plan.renames().len(),
            base_events: plan.events.base_events.len(),
            appended_events: plan.events.appended_events.len(),
            rewritten_events: plan.events.rewritten,
        }
    }
}

/// Main application controller for subtitle merging
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Merge `second` into `first` and write the configured output, reporting through `log`
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(&self, first: P1, second: P2) -> Result<MergeSummary, MergeError> {
        self.run_with_reporter(first, second, &mut LogReporter)
    }

    /// Same as [`Controller::run`] with an explicit notice sink
    pub fn run_with_reporter<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        first: P1,
        second: P2,
        reporter: &mut dyn Reporter,
    ) -> Result<MergeSummary, MergeError> {
        let first = first.as_ref();
        let second = second.as_ref();

        // Both inputs must exist before anything is parsed
        for path in [first, second] {
            if !FileManager::file_exists(path) {
                return Err(MergeError::FileNotFound { path: path.to_path_buf() });
            }
        }

        reporter.notice(Notice::ParsingStarted);
        let first_doc = Document::parse(&FileManager::read_subtitle(first)?);
        let second_doc = Document::parse(&FileManager::read_subtitle(second)?);
        debug!(
            "Parsed {} section(s) from {:?} and {} from {:?}",
            first_doc.len(),
            first,
            second_doc.len(),
            second
        );

        let plan = MergePlan::build(
            &first_doc,
            &first.display().to_string(),
            &second_doc,
            &second.display().to_string(),
            reporter,
        )?;

        let output = self.config.output.as_path();
        writer::write_merged(&plan, output, reporter)?;

        let summary = MergeSummary::from_plan(&plan, output);
        debug!(
            "Styles: {} + {} ({} renamed), events: {} + {} ({} rewritten)",
            summary.base_styles,
            summary.appended_styles,
            summary.renamed_styles,
            summary.base_events,
            summary.appended_events,
            summary.rewritten_events
        );

        Ok(summary)
    }
}
