use clap::Parser;
use xapks::Args;

fn main() {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("APKS_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    match args.run() {
        Ok(dest) => println!("[+] APK extracted: {}", dest.display()),
        Err(err) => {
            if let Some(err) = err.downcast_ref::<apks::Error>() {
                tracing::error!("extraction failed ({:?}): {}", err.kind(), err);
            }
            println!("[!] Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
