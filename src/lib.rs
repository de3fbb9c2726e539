//! codefolio - a terminal portfolio presented as a code editor
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod content;
pub mod error;
pub mod export;
pub mod highlight;
pub mod history;
pub mod input;
pub mod onboarding;
pub mod preferences;
pub mod resume;
pub mod signals;
pub mod startup;
pub mod storage;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod view_mode;
pub mod viewer;
pub mod welcome;
