//! Single-spinner helper shown while a blocking fetch is in flight.

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with a message. Hidden when `quiet` is true.
pub(crate) fn start(msg: String, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
