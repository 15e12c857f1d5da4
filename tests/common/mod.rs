use std::{
    fs,
    path::{Path, PathBuf},
    sync::Once
};
use tempfile::{tempdir, TempDir};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Creates an empty scratch directory, removed again when the handle is dropped.
pub fn scratch_dir() -> TempDir {
    tempdir().expect("Failed to create scratch directory")
}

pub fn write_results(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write result file");
    path
}

pub const SEASON_ONE: &str = "\
# team one\tteam two\twins
Anna,Ben\tCarl,Dora\t3,1
Anna,Carl\tBen,Dora\t2,2

Ben,Carl\tAnna,Dora\t0,2
";

pub const SEASON_TWO: &str = "\
Anna,Dora\tBen,Carl\t1,0
Emil\tFrida\t2,1
";
