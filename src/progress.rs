pub use indicatif::ProgressBar;
pub use indicatif::ProgressStyle;

/// Progress bar counting scanned subject sequences.
pub fn subjects(count: usize) -> ProgressBar {
    let template = "  scanning {wide_bar} {pos}/{len} subjects [{elapsed} elapsed; {eta} left]";

    let progress = ProgressBar::new(count as u64);
    progress.set_draw_delta(usize::max(1, count / 1000) as u64);
    progress.set_style(ProgressStyle::default_bar().template(template));

    progress
}

pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}
