use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Step-by-step spinner for interactive runs; a no-op when quiet or
/// when stderr is not a terminal.
pub struct Progress {
    bar: Option<ProgressBar>,
    interactive: bool,
    step: u8,
    total_steps: u8,
    start: Instant,
    step_start: Instant,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            interactive,
            step: 0,
            total_steps,
            start: now,
            step_start: now,
        }
    }

    pub fn step(&mut self, description: &str) {
        if !self.interactive {
            return;
        }

        self.clear_bar();
        self.step += 1;
        self.step_start = Instant::now();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            self.step, self.total_steps, description
        ));

        self.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[String]) {
        if !self.interactive {
            return;
        }

        self.clear_bar();

        let elapsed = self.step_start.elapsed();
        let mut stderr = io::stderr().lock();

        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            elapsed.as_secs_f64()
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
        }
    }

    pub fn finish(mut self) {
        if !self.interactive {
            return;
        }

        self.clear_bar();

        let elapsed = self.start.elapsed();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m Figure complete {:>34}",
            format!("Total: {:.2}s", elapsed.as_secs_f64())
        );
        let _ = writeln!(stderr);
    }

    fn clear_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
