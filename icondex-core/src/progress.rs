//! Textual progress reporting for the two pipeline phases

use std::io::Write;

use anyhow::Result;

const BAR_WIDTH: usize = 40;
const REPORT_EVERY: usize = 50;

/// Render one progress line (without the leading carriage return).
pub fn render_bar(done: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (BAR_WIDTH * done.min(total)) / total
    };
    let pct = if total == 0 {
        0.0
    } else {
        done as f64 * 100.0 / total as f64
    };

    format!(
        "Progress: |{}{}| {done}/{total} ({pct:.1}%)",
        "█".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
    )
}

/// Reports every 50 items and once more at the last one.
pub struct Progress<W: Write> {
    total: usize,
    done: usize,
    out: W,
}

impl<W: Write> Progress<W> {
    pub fn new(total: usize, out: W) -> Self {
        Self {
            total,
            done: 0,
            out,
        }
    }

    pub fn done(&self) -> usize {
        self.done
    }

    /// Mark one more item finished.
    pub fn tick(&mut self) -> Result<()> {
        self.done += 1;
        if self.done % REPORT_EVERY == 0 || self.done == self.total {
            write!(self.out, "\r{}", render_bar(self.done, self.total))?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_partial_bar() {
        let line = render_bar(50, 200);
        assert_eq!(
            line,
            format!("Progress: |{}{}| 50/200 (25.0%)", "█".repeat(10), "-".repeat(30))
        );
    }

    #[test]
    fn renders_complete_bar() {
        assert_eq!(
            render_bar(3, 3),
            format!("Progress: |{}| 3/3 (100.0%)", "█".repeat(40))
        );
    }

    #[test]
    fn reports_on_cadence_and_completion() {
        let mut progress = Progress::new(120, Vec::new());
        for _ in 0..120 {
            progress.tick().expect("tick");
        }
        let text = String::from_utf8(progress.into_inner()).expect("utf8");
        let reports: Vec<&str> = text.split('\r').filter(|s| !s.is_empty()).collect();

        assert_eq!(reports.len(), 3);
        assert!(reports[0].contains(" 50/120 "));
        assert!(reports[1].contains(" 100/120 "));
        assert!(reports[2].ends_with("120/120 (100.0%)"));
    }

    #[test]
    fn silent_until_something_finishes() {
        let progress = Progress::new(0, Vec::new());
        assert!(progress.into_inner().is_empty());
    }
}
