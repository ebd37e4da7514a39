//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = placewise_cli::run() {
        eprintln!("placewise: {err}");
        std::process::exit(1);
    }
}
