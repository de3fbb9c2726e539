//! AppMessage enum for async communication within the application.

use crate::error::HighlightError;
use crate::highlight::HighlightedDocument;
use crate::onboarding::TourTimer;
use crate::viewer::HighlightJob;

/// Messages delivered to the event loop by spawned tasks and timers.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A highlighting task finished for `job`.
    HighlightReady {
        job: HighlightJob,
        result: Result<HighlightedDocument, HighlightError>,
    },
    /// Reveal ticker fired. Ignored unless `generation` is current.
    RevealTick { generation: u64 },
    /// A scheduled onboarding transition is due.
    Onboarding { generation: u64, timer: TourTimer },
}
