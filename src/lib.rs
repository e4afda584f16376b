//! geoconsole library: a terminal link-in-bio card with a location trace.
//!
//! This library provides the two cooperating pieces behind the card's one
//! interactive feature:
//!
//! - [`location`]: resolving the visitor's approximate location, a remote
//!   IP-geolocation lookup with an automatic host-geolocation fallback
//! - [`reveal`]: a typewriter state machine that reveals the result
//!   character by character inside a simulated hacker console
//!
//! # Example
//!
//! ```no_run
//! use geoconsole::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     no_animation: true,
//!     ..Default::default()
//! };
//!
//! let report = run(config).await?;
//! println!("resolved: {}", report.resolved);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod card;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod location;
pub mod reveal;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{GeolocationError, InitializationError, LookupError};
pub use run::{run, RunReport};

// Internal run module (top-level orchestration)
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::card::{map_url, DEFAULT_CARD};
    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::location::{
        resolve_location, HostGeoSource, IpApiSource, ManualFix, ViewState,
    };
    use crate::reveal::{console_script, name_banner, play, RevealAnimator, RevealSink, TerminalSink};

    /// Result of one card session.
    #[derive(Debug, Clone, Copy)]
    pub struct RunReport {
        /// A location was obtained (by either path).
        pub resolved: bool,
        /// The host-geolocation fallback was attempted.
        pub fallback_used: bool,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Renders the card, resolves the visitor's location and plays the
    /// console reveal.
    ///
    /// This is the main entry point for the library. Lookup failures are
    /// non-fatal: they surface as an inline message and the report's
    /// `resolved` flag stays false.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be initialized.
    pub async fn run(config: Config) -> Result<RunReport> {
        let start = std::time::Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        // Ctrl-C tears the animation down; pending timers must not fire
        // against a retired surface
        let cancel = CancellationToken::new();
        {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });
        }

        let mut sink = TerminalSink::new();
        let mut animator = RevealAnimator::new(
            name_banner(DEFAULT_CARD.name),
            Duration::from_millis(config.line_pause_ms),
        );
        if config.no_animation {
            animator.finish();
            sink.render(&animator.frame());
        } else {
            play(&mut animator, &mut sink, &cancel).await;
        }

        // Ctrl-C during the banner retires the whole session: no lookup, no
        // console surface
        if cancel.is_cancelled() {
            return Ok(RunReport {
                resolved: false,
                fallback_used: false,
                elapsed_seconds: start.elapsed().as_secs_f64(),
            });
        }
        println!("{DEFAULT_CARD}");

        let primary = IpApiSource::new(client, config.endpoint.clone());
        let fallback = HostGeoSource::new(config.coords.map(ManualFix::new));

        let mut state = ViewState::default();
        let outcome = resolve_location(&primary, &fallback, &mut state).await;

        if let Some(record) = &state.location {
            let coords = record.coordinates();
            // the console surface opens; the animator is restartable, so the
            // banner instance takes the script as a fresh sequence
            animator.restart(console_script(record));
            let mut sink = TerminalSink::new();
            if config.no_animation {
                animator.finish();
                sink.render(&animator.frame());
            } else {
                play(&mut animator, &mut sink, &cancel).await;
            }
            println!();
            println!("  view on map: {}", map_url(coords));
        } else if let Some(message) = &state.error {
            println!("  {message}");
        }

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "session finished in {elapsed_seconds:.1}s (resolved: {})",
            outcome.resolved
        );

        Ok(RunReport {
            resolved: outcome.resolved,
            fallback_used: outcome.fallback_used,
            elapsed_seconds,
        })
    }
}
