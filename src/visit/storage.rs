use std::fs;
use std::io;
use std::path::PathBuf;

const DATA_DIR: &str = "larder";
const MARKER_FILE: &str = "visited";
const VISITED_VALUE: &str = "true";

pub fn marker_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR).join(MARKER_FILE))
}

/// Persisted "has visited before" flag
///
/// The flag is a one-line file holding `true`. Anything else, including a
/// missing or unreadable file, counts as a first visit.
#[derive(Debug, Clone)]
pub struct VisitTracker {
    path: Option<PathBuf>,
}

impl VisitTracker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn from_default_location() -> Self {
        Self::new(marker_path())
    }

    pub fn is_first_visit(&self) -> bool {
        let Some(path) = &self.path else {
            return true;
        };

        match fs::read_to_string(path) {
            Ok(contents) => contents.trim() != VISITED_VALUE,
            Err(_) => true,
        }
    }

    pub fn mark_visited(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine visit marker path",
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, VISITED_VALUE)
    }

    /// Forget the flag so the next check counts as a first visit
    pub fn reset(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        match fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Read the flag once and set it if it was absent
    ///
    /// Returns true when onboarding should be shown. A failed write is only
    /// logged; the user will simply be welcomed again next launch.
    pub fn check_and_mark(&self) -> bool {
        let first_visit = self.is_first_visit();

        if first_visit && let Err(e) = self.mark_visited() {
            log::error!("Failed to persist visit marker {:?}: {}", self.path, e);
        }

        first_visit
    }
}
