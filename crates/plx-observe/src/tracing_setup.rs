//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! Logs go to stderr so they never interleave with the reply text printed
//! to stdout. The editor owns the terminal while it runs; nothing is logged
//! during an editor handoff because the controller is blocked on it.
//!
//! # Usage
//!
//! ```no_run
//! // Warnings only, structured logging
//! plx_observe::tracing_setup::init_tracing("warn", false).unwrap();
//!
//! // Debug logging plus OpenTelemetry export to stdout
//! plx_observe::tracing_setup::init_tracing("debug", true).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Build the filter: `RUST_LOG` wins when set, otherwise `default_directive`.
fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize the global tracing subscriber.
///
/// - Always installs a `fmt` layer writing to stderr, without targets.
/// - When `enable_otel` is true, additionally bridges tracing spans to
///   OpenTelemetry using a stdout exporter.
/// - `default_directive` (e.g. `"warn"`, `"info,plx=debug"`) applies when
///   `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(
    default_directive: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let env_filter = build_filter(default_directive);

    if enable_otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("llm-plx");
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// Safe to call even when OTel was not enabled (no-op in that case).
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

/// Map CLI verbosity flags to a default filter directive.
pub fn verbosity_directive(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,plx_core=debug,plx_infra=debug",
        _ => "trace",
    }
}
