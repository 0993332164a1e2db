use super::*;
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

pub fn create_test_file(test_dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let test_file = test_dir.join(file_name);
    let mut file = File::create(&test_file).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    assert_eq!(test_file.is_file(), true);
    test_file
}

pub fn read_test_file(test_file: &Path) -> String {
    let mut contents = String::new();
    File::open(test_file).unwrap().read_to_string(&mut contents).unwrap();
    contents
}

pub fn test_context(base_dir: &Path, dry_run: bool) -> ReorganizeContext {
    ReorganizeContext {
        base_dir: base_dir.to_path_buf(),
        dry_run: dry_run
    }
}

pub fn with_default_test_directory<F>(test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_dir_name = "./test_output/output".to_owned() + &random_string();
    with_test_directory(&PathBuf::from(test_dir_name), test_method);
}

pub fn with_test_directory<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    // Make sure test directory exists and is empty
    if test_dir.is_dir() {
        fs::remove_dir_all(test_dir).unwrap();
    }
    fs::create_dir_all(test_dir).unwrap();
    assert_eq!(test_dir.is_dir(), true);

    test_method(test_dir);

    // Clean up
    fs::remove_dir_all(test_dir).unwrap();
}

pub fn random_string() -> String {
    let random_number = ::rand::random::<u32>();
    println!("Using random number: {:?}", random_number);
    random_number.to_string()
}
