//! Version and usage output.

/// The current version of codefolio, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
codefolio - a portfolio you browse like a code editor

USAGE:
    codefolio [OPTIONS]
    codefolio export <PATH> [--lang <LANG>] [--theme <THEME>] [--out <FILE>]

OPTIONS:
    --file <PATH>      Open this content path first (default /portfolio/about.ts)
    --theme <THEME>    dark or light
    --lang <LANG>      typescript, javascript, python, cpp or pseudocode
    --welcome          Show the welcome screen and tour again
    --no-persist       Do not read or write the preference file
    --prefs <FILE>     Preference file location
    --log <FILTER>     Log filter, e.g. debug or codefolio=trace
    --reset            Forget stored preferences and exit
    -V, --version      Print version
    -h, --help         Print this help

ENVIRONMENT:
    CODEFOLIO_PREFS, CODEFOLIO_NO_PERSIST, CODEFOLIO_LOG
";

pub fn version_line() -> String {
    format!("codefolio {}", VERSION)
}
