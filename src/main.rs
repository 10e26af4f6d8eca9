//! ontoglyph CLI entry point

fn main() {
    miette::set_hook(Box::new(|_| Box::new(miette::MietteHandlerOpts::new().unicode(true).build()))).ok();

    // Structured logging on stderr, filtered by RUST_LOG and defaulting to warn so stdout stays clean for `serve`
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    ontoglyph::cli::run();
}
