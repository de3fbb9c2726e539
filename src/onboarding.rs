//! First-run guided tour.
//!
//! Four fixed steps, each pointing at a toolbar control. Every transition
//! goes through a scheduled timer so the tooltip can fade out and back in;
//! scheduling a new transition drops (and so cancels) the pending one, and
//! each timer carries a generation so a message already in the channel is
//! ignored once superseded.
//!
//! ```text
//! show -> Arming -500ms-> Entering -50ms-> Shown
//! advance: Shown -> Exiting -200ms-> Entering(next) -50ms-> Shown
//! dismiss / advance on last: -> Closing -200ms-> Hidden (Ended)
//! ```

use std::time::Duration;

use crate::app::{AppMessage, Scheduler, TaskHandle};

pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const FADE_OUT: Duration = Duration::from_millis(200);
pub const FADE_IN: Duration = Duration::from_millis(50);

/// Toolbar control a step points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourAnchor {
    LanguagePicker,
    ViewModeToggle,
    ThemeToggle,
    SidebarToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub anchor: TourAnchor,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TOUR_STEPS: [TourStep; 4] = [
    TourStep {
        anchor: TourAnchor::LanguagePicker,
        title: "Language Picker",
        subtitle: "Choose your preferred syntax",
        description: "Switch between TypeScript, JavaScript, Python, C++, and Pseudocode to see the portfolio in different languages.",
        icon: "</>",
    },
    TourStep {
        anchor: TourAnchor::ViewModeToggle,
        title: "Recruiter Mode",
        subtitle: "Not into code? No problem!",
        description: "Press this toggle to switch to a clean, traditional resume view.",
        icon: "[=]",
    },
    TourStep {
        anchor: TourAnchor::ThemeToggle,
        title: "Theme Toggle",
        subtitle: "Light or dark?",
        description: "Switch between light and dark themes to suit your preference.",
        icon: "(*)",
    },
    TourStep {
        anchor: TourAnchor::SidebarToggle,
        title: "File Explorer",
        subtitle: "Browse the codebase",
        description: "Toggle the sidebar to explore different files in the portfolio.",
        icon: "[#]",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourPhase {
    #[default]
    Hidden,
    /// Waiting for the UI to settle before the first step appears.
    Arming,
    /// Tooltip mounted, fade-in pending.
    Entering,
    Shown,
    /// Fading out before switching to the next step.
    Exiting,
    /// Fading out before the tour ends.
    Closing,
}

/// Scheduled transition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourTimer {
    Settle,
    AnimateIn,
    Swap,
    Close,
}

/// Result of feeding a timer to the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourUpdate {
    Ignored,
    Changed,
    /// The tour finished; the caller should persist `welcomed`.
    Ended,
}

#[derive(Debug, Default)]
pub struct Onboarding {
    phase: TourPhase,
    step: usize,
    generation: u64,
    pending: Option<TaskHandle>,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the tour at the first step.
    pub fn show(&mut self, scheduler: &mut dyn Scheduler) {
        tracing::info!("onboarding tour armed");
        self.step = 0;
        self.phase = TourPhase::Arming;
        self.schedule(scheduler, SETTLE_DELAY, TourTimer::Settle);
    }

    /// Re-arm the tour from the toolbar. Does not touch `welcomed`.
    pub fn restart(&mut self, scheduler: &mut dyn Scheduler) {
        self.show(scheduler);
    }

    /// Next step, or end the tour when already on the last one.
    pub fn advance(&mut self, scheduler: &mut dyn Scheduler) {
        match self.phase {
            TourPhase::Entering | TourPhase::Shown | TourPhase::Exiting => {}
            _ => return,
        }
        if self.is_last_step() {
            self.dismiss(scheduler);
            return;
        }
        tracing::debug!(step = self.step, "onboarding advance");
        self.phase = TourPhase::Exiting;
        self.schedule(scheduler, FADE_OUT, TourTimer::Swap);
    }

    /// End the tour after the fade-out.
    pub fn dismiss(&mut self, scheduler: &mut dyn Scheduler) {
        if matches!(self.phase, TourPhase::Hidden | TourPhase::Closing) {
            return;
        }
        tracing::debug!(step = self.step, "onboarding dismiss");
        self.phase = TourPhase::Closing;
        self.schedule(scheduler, FADE_OUT, TourTimer::Close);
    }

    pub fn on_timer(&mut self, generation: u64, timer: TourTimer, scheduler: &mut dyn Scheduler) -> TourUpdate {
        if generation != self.generation {
            return TourUpdate::Ignored;
        }
        self.pending = None;
        match (self.phase, timer) {
            (TourPhase::Arming, TourTimer::Settle) => {
                self.phase = TourPhase::Entering;
                self.schedule(scheduler, FADE_IN, TourTimer::AnimateIn);
            }
            (TourPhase::Exiting, TourTimer::Swap) => {
                self.step = (self.step + 1).min(TOUR_STEPS.len() - 1);
                self.phase = TourPhase::Entering;
                self.schedule(scheduler, FADE_IN, TourTimer::AnimateIn);
            }
            (TourPhase::Entering, TourTimer::AnimateIn) => {
                self.phase = TourPhase::Shown;
            }
            (TourPhase::Closing, TourTimer::Close) => {
                self.phase = TourPhase::Hidden;
                tracing::info!("onboarding tour ended");
                return TourUpdate::Ended;
            }
            _ => return TourUpdate::Ignored,
        }
        TourUpdate::Changed
    }

    fn schedule(&mut self, scheduler: &mut dyn Scheduler, delay: Duration, timer: TourTimer) {
        self.generation += 1;
        let message = AppMessage::Onboarding {
            generation: self.generation,
            timer,
        };
        // Replacing the handle drops the previous one, cancelling it.
        self.pending = Some(scheduler.after(delay, message));
    }

    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    /// Whether the tour intercepts input (tooltip on screen or about to be).
    pub fn is_active(&self) -> bool {
        self.phase != TourPhase::Hidden
    }

    /// Whether the tooltip is mounted.
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, TourPhase::Hidden | TourPhase::Arming)
    }

    /// Whether the tooltip is fully faded in.
    pub fn is_animated_in(&self) -> bool {
        self.phase == TourPhase::Shown
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> &'static TourStep {
        &TOUR_STEPS[self.step.min(TOUR_STEPS.len() - 1)]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= TOUR_STEPS.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
