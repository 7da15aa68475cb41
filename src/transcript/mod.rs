//! Terminal transcript simulator
//!
//! Replays a fixed list of lines into the terminal overlay, one line per
//! cadence tick, then marks the run complete one tick after the last line.
//!
//! Time is the application clock in seconds, sampled once per frame and
//! passed to [`Transcript::tick`]. There is a single schedule slot: calling
//! [`Transcript::play`] while a replay is running replaces it, so lines from
//! two scripts can never interleave.

pub mod scripts;

use std::collections::VecDeque;

use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Line Classification
// ─────────────────────────────────────────────────────────────────────────────

/// How a transcript line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Success,
    Error,
    Info,
    Plain,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with('>') {
            LineKind::Command
        } else if line.contains("[SUCCESS]") {
            LineKind::Success
        } else if line.contains("[ERROR]") {
            LineKind::Error
        } else if line.contains("[INFO]") {
            LineKind::Info
        } else {
            LineKind::Plain
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transcript
// ─────────────────────────────────────────────────────────────────────────────

/// Pending replay: lines not yet shown and when the next one is due.
#[derive(Debug, Clone, PartialEq)]
struct Schedule {
    remaining: VecDeque<String>,
    next_at: f64,
}

/// State of the terminal overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    open: bool,
    shown: Vec<String>,
    link: Option<String>,
    complete: bool,
    /// Seconds between lines
    cadence: f64,
    schedule: Option<Schedule>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(500)
    }
}

impl Transcript {
    pub fn new(cadence_ms: u64) -> Self {
        Self {
            open: false,
            shown: Vec::new(),
            link: None,
            complete: false,
            cadence: cadence_ms as f64 / 1000.0,
            schedule: None,
        }
    }

    /// Start a replay, cancelling any replay in progress.
    pub fn play<I, S>(&mut self, lines: I, link: Option<String>, now: f64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let remaining: VecDeque<String> = lines.into_iter().map(Into::into).collect();
        if self.schedule.is_some() {
            debug!("Replacing running transcript");
        }
        debug!("Playing transcript of {} lines", remaining.len());

        self.open = true;
        self.shown.clear();
        self.link = link;
        self.complete = false;
        self.schedule = Some(Schedule {
            remaining,
            next_at: now + self.cadence,
        });
    }

    /// Advance the replay to `now`.
    ///
    /// Catches up on every tick that elapsed since the last call. Returns
    /// `true` if anything visible changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;
        while let Some(schedule) = self.schedule.as_mut() {
            if now < schedule.next_at {
                break;
            }
            match schedule.remaining.pop_front() {
                Some(line) => {
                    self.shown.push(line);
                    schedule.next_at += self.cadence;
                }
                None => {
                    self.complete = true;
                    self.schedule = None;
                }
            }
            changed = true;
        }
        changed
    }

    /// Hide the overlay. Shown lines stay until the next `play`.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// When the next tick is due, if a replay is running.
    pub fn next_deadline(&self) -> Option<f64> {
        self.schedule.as_ref().map(|s| s.next_at)
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_resets_state() {
        let mut t = Transcript::new(500);
        t.play(["a"], Some("https://example.com".to_string()), 0.0);
        assert!(t.is_open());
        assert!(t.shown().is_empty());
        assert!(!t.is_complete());
        assert_eq!(t.link(), Some("https://example.com"));
        assert_eq!(t.next_deadline(), Some(0.5));
    }

    #[test]
    fn test_lines_appear_on_cadence() {
        let mut t = Transcript::new(500);
        t.play(["a", "b"], None, 10.0);

        assert!(!t.tick(10.4));
        assert!(t.shown().is_empty());

        assert!(t.tick(10.5));
        assert_eq!(t.shown(), ["a"]);

        t.tick(11.0);
        assert_eq!(t.shown(), ["a", "b"]);
        assert!(!t.is_complete());

        t.tick(11.5);
        assert!(t.is_complete());
        assert!(!t.is_running());
        assert!(t.next_deadline().is_none());
    }

    #[test]
    fn test_tick_catches_up() {
        let mut t = Transcript::new(500);
        t.play(["a", "b", "c"], None, 0.0);
        t.tick(5.0);
        assert_eq!(t.shown(), ["a", "b", "c"]);
        assert!(t.is_complete());
    }

    #[test]
    fn test_empty_script_completes_after_one_tick() {
        let mut t = Transcript::new(500);
        t.play(Vec::<String>::new(), None, 0.0);
        t.tick(0.5);
        assert!(t.is_complete());
        assert!(t.shown().is_empty());
    }

    #[test]
    fn test_replay_does_not_interleave() {
        let mut t = Transcript::new(500);
        t.play(["x", "y", "z"], None, 0.0);
        t.tick(0.5);
        assert_eq!(t.shown(), ["x"]);

        t.play(["a", "b"], Some("https://new".to_string()), 0.7);
        t.tick(10.0);
        assert_eq!(t.shown(), ["a", "b"]);
        assert!(t.is_complete());
        assert_eq!(t.link(), Some("https://new"));
    }

    #[test]
    fn test_dismiss_keeps_shown_lines() {
        let mut t = Transcript::new(500);
        t.play(["a", "b"], None, 0.0);
        t.tick(0.5);
        t.dismiss();
        assert!(!t.is_open());
        assert_eq!(t.shown(), ["a"]);

        // The replay keeps running in the background
        t.tick(2.0);
        assert_eq!(t.shown(), ["a", "b"]);
        assert!(!t.is_open());
    }

    #[test]
    fn test_play_clears_previous_link() {
        let mut t = Transcript::new(500);
        t.play(["a"], Some("https://old".to_string()), 0.0);
        t.play(["b"], None, 0.1);
        assert!(t.link().is_none());
    }

    #[test]
    fn test_custom_cadence() {
        let mut t = Transcript::new(100);
        t.play(["a", "b"], None, 0.0);
        t.tick(0.2);
        assert_eq!(t.shown(), ["a", "b"]);
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(LineKind::classify("> git fetch origin"), LineKind::Command);
        assert_eq!(LineKind::classify("[SUCCESS] Build complete."), LineKind::Success);
        assert_eq!(LineKind::classify("[ERROR] boom"), LineKind::Error);
        assert_eq!(LineKind::classify("[INFO] Shell active."), LineKind::Info);
        assert_eq!(LineKind::classify("#### 100%"), LineKind::Plain);
    }
}
