//! First-run splash screen.
//!
//! Driven by elapsed time from the frame tick, so it needs no timers of its
//! own. The loading bar moves in uneven steps from a fixed table, which keeps
//! the animation lively but reproducible.

use std::time::Duration;

pub const GREETING: &str = "Welcome to codefolio, my portfolio as a code editor.\n\n\
Browse my experience, skills, and projects as TypeScript files, or switch to the Resume view for a traditional resume.";

pub const LOAD_STEP: Duration = Duration::from_millis(100);
pub const PAUSE: Duration = Duration::from_millis(300);
pub const TYPE_STEP: Duration = Duration::from_millis(20);

const INCREMENTS: [f32; 8] = [12.5, 7.0, 18.0, 9.5, 15.0, 5.5, 19.0, 11.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WelcomePhase {
    Loading { progress: f32 },
    /// Bar is full, greeting not started yet.
    Loaded,
    Typing { chars: usize },
    /// Greeting fully typed, prompt not shown yet.
    Typed,
    Prompt,
}

#[derive(Debug, Clone)]
pub struct WelcomeScreen {
    phase: WelcomePhase,
    clock: Duration,
    step: usize,
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeScreen {
    pub fn new() -> Self {
        Self {
            phase: WelcomePhase::Loading { progress: 0.0 },
            clock: Duration::ZERO,
            step: 0,
        }
    }

    pub fn phase(&self) -> WelcomePhase {
        self.phase
    }

    /// Loading bar percentage, 0 to 100.
    pub fn progress(&self) -> f32 {
        match self.phase {
            WelcomePhase::Loading { progress } => progress,
            _ => 100.0,
        }
    }

    pub fn status(&self) -> &'static str {
        let progress = self.progress();
        if progress < 30.0 {
            "Loading modules..."
        } else if progress < 60.0 {
            "Compiling TypeScript..."
        } else if progress < 90.0 {
            "Building portfolio..."
        } else {
            "Ready!"
        }
    }

    /// The part of the greeting typed so far.
    pub fn typed_text(&self) -> &'static str {
        let chars = match self.phase {
            WelcomePhase::Loading { .. } | WelcomePhase::Loaded => 0,
            WelcomePhase::Typing { chars } => chars,
            WelcomePhase::Typed | WelcomePhase::Prompt => usize::MAX,
        };
        match GREETING.char_indices().nth(chars) {
            Some((end, _)) => &GREETING[..end],
            None => GREETING,
        }
    }

    pub fn prompt_visible(&self) -> bool {
        self.phase == WelcomePhase::Prompt
    }

    /// Advance the animation by `elapsed`. Returns whether anything changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = self.phase;
        self.clock += elapsed;
        loop {
            match self.phase {
                WelcomePhase::Loading { progress } => {
                    if self.clock < LOAD_STEP {
                        break;
                    }
                    self.clock -= LOAD_STEP;
                    let next = (progress + INCREMENTS[self.step % INCREMENTS.len()]).min(100.0);
                    self.step += 1;
                    self.phase = if next >= 100.0 {
                        WelcomePhase::Loaded
                    } else {
                        WelcomePhase::Loading { progress: next }
                    };
                }
                WelcomePhase::Loaded => {
                    if self.clock < PAUSE {
                        break;
                    }
                    self.clock -= PAUSE;
                    self.phase = WelcomePhase::Typing { chars: 0 };
                }
                WelcomePhase::Typing { chars } => {
                    if chars >= GREETING.chars().count() {
                        self.phase = WelcomePhase::Typed;
                        continue;
                    }
                    if self.clock < TYPE_STEP {
                        break;
                    }
                    self.clock -= TYPE_STEP;
                    self.phase = WelcomePhase::Typing { chars: chars + 1 };
                }
                WelcomePhase::Typed => {
                    if self.clock < PAUSE {
                        break;
                    }
                    self.clock = Duration::ZERO;
                    self.phase = WelcomePhase::Prompt;
                }
                WelcomePhase::Prompt => {
                    self.clock = Duration::ZERO;
                    break;
                }
            }
        }
        self.phase != before
    }
}
