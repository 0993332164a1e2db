use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ReorganizeContext {
    pub base_dir: PathBuf,
    pub dry_run: bool
}
