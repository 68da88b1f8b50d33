use indicatif::ProgressBar;
use std::time::Duration;

use super::data::truncate_chars;

/// Number of body characters echoed to the operator for each response.
pub const PREVIEW_LIMIT: usize = 200;

/// Spinner shown while a request is in flight.
pub struct ProgressDisplay {
    spinner: ProgressBar,
}

impl ProgressDisplay {
    /// Starts a spinner for the given URL.
    pub fn start(url: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Fetching {}...", url));
        spinner.enable_steady_tick(Duration::from_millis(100));
        ProgressDisplay { spinner }
    }

    /// Stops the spinner and clears it, so the result lines that follow are not interleaved.
    pub fn stop(self) {
        self.spinner.disable_steady_tick();
        self.spinner.finish_and_clear();
    }
}

/// The body preview printed after each response, e.g. `{"status":"ok"}...`.
pub fn response_preview(body: &str) -> String {
    format!("{}...", truncate_chars(body, PREVIEW_LIMIT))
}
