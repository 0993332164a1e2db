use std::path::{Path, PathBuf};

/// Where the project's loose files belong, relative to the base directory.
const PROJECT_STRUCTURE: &[(&str, &[&str])] = &[
    ("models", &["best_rf_model (1).pkl", "best_rf_model.pkl"]),
    ("data", &["Cleaned_Combined_Clubs_finals.xlsx"]),
    ("static/css", &["bestrf.css"]),
    ("static/js", &["script.js"]),
    ("templates", &["about_us.html", "contact.html", "draft.html", "index.html", "project.html"]),
    ("notebooks", &["besttrain.ipynb"]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct FolderMapping {
    folder: PathBuf,
    files: Vec<String>
}

impl FolderMapping {
    pub fn new(folder: PathBuf, files: Vec<String>) -> FolderMapping {
        FolderMapping { folder, files }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    entries: Vec<FolderMapping>
}

impl Mapping {
    pub fn new(entries: Vec<FolderMapping>) -> Mapping {
        Mapping { entries }
    }

    pub fn from_table(table: &[(&str, &[&str])]) -> Mapping {
        let entries = table
            .iter()
            .map(|&(folder, files)| {
                FolderMapping::new(PathBuf::from(folder),
                                   files.iter().map(|file| file.to_string()).collect())
            })
            .collect();
        Mapping::new(entries)
    }

    pub fn entries(&self) -> &[FolderMapping] {
        &self.entries
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.files.len()).sum()
    }
}

pub fn project_mapping() -> Mapping {
    Mapping::from_table(PROJECT_STRUCTURE)
}
