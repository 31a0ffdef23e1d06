use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// Start a crawl phase over `actors` frontier actors
    pub fn start_phase(&mut self, label: &str, actors: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} {} ({} {})",
            style("🎬").cyan(),
            style(label).bold(),
            style(actors).yellow(),
            pluralize("actor", actors)
        );
        let pb = self.create_progress_bar(actors as u64, label);
        self.current_bar = Some(pb);
    }

    pub fn expanding_actor(&self, actor_id: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Fetching credits for {actor_id}"));
        }
    }

    pub fn actor_done(&self) {
        if let Some(ref pb) = self.current_bar {
            pb.inc(1);
        }
    }

    pub fn finish_phase(&mut self, label: &str, added: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "  {} {}: {} new {}",
            style("✓").green(),
            label,
            style(added).yellow().bold(),
            pluralize("actor", added)
        );
    }
}
