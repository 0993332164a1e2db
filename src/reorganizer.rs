use std::fmt;

use action::{create_output_directory, determine_task};
use context::ReorganizeContext;
use error::*;
use mapping::Mapping;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReorganizeSummary {
    pub directories_created: usize,
    pub files_moved: usize,
    pub files_skipped: usize,
    pub files_overwritten: usize,
}

impl fmt::Display for ReorganizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} director{} created, {} file(s) moved ({} overwritten), {} file(s) not found",
               self.directories_created,
               if self.directories_created == 1 { "y" } else { "ies" },
               self.files_moved,
               self.files_overwritten,
               self.files_skipped)
    }
}

/// Moves every listed file that is present in the base directory into its
/// folder, creating folders first, in mapping order. Stops at the first
/// filesystem error.
pub fn reorganize(mapping: &Mapping, file_context: &ReorganizeContext) -> Result<ReorganizeSummary> {
    let mut summary = ReorganizeSummary::default();
    for entry in mapping.entries() {
        trace!("Processing folder {}", entry.folder().to_string_lossy());
        let (output_directory, created) =
            create_output_directory(&file_context.base_dir, entry.folder(), file_context.dry_run)?;
        if created {
            summary.directories_created += 1;
        }

        for file_name in entry.files() {
            match determine_task(file_name, &output_directory, file_context) {
                Some(task) => {
                    if task.execute(file_context)? {
                        summary.files_overwritten += 1;
                    }
                    summary.files_moved += 1;
                }
                None => summary.files_skipped += 1
            }
        }
    }

    Ok(summary)
}
