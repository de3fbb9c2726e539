//! Panic hook that puts the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Install after `color_eyre::install()` so its report still runs.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        tracing::error!(%location, "codefolio panicked: {}", panic_message(panic_info));
        original_hook(panic_info);
    }));
}

/// The payload of a panic as text, when it is a string.
fn panic_message(info: &panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::{Arc, Mutex};

    #[test]
    #[serial]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }

    #[test]
    #[serial]
    fn test_panic_message_reads_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            sink.lock().unwrap().push(panic_message(info));
        }));

        let _ = panic::catch_unwind(|| panic!("static text"));
        let _ = panic::catch_unwind(|| panic!("formatted {}", 42));
        let _ = panic::catch_unwind(|| std::panic::panic_any(7u8));
        panic::set_hook(original_hook);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["static text", "formatted 42", "non-string panic payload"]
        );
    }
}
