use std::env;
use std::path::PathBuf;

/// Default database file name inside the Tasklight directory
pub const DATABASE_FILE: &str = "tasklight.db";

/// Get the path to the Tasklight directory (~/.tasklight)
pub fn tasklight_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".tasklight")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".tasklight")
    }
}

/// Get the path to the SQLite database file (~/.tasklight/tasklight.db)
pub fn database_file() -> PathBuf {
    tasklight_dir().join(DATABASE_FILE)
}
