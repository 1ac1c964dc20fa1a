/// Absolute path of a file below `test-resources/`, usable wherever a literal is expected.
#[macro_export]
macro_rules! test_resource_path {
    ($fname:expr) => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/test-resources/", $fname)
    };
}

/// Same as [`test_resource_path!`] for names only known at runtime, e.g. `rstest` cases.
#[cfg(test)]
pub fn test_resource(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/test-resources")).join(name)
}
