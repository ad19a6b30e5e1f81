//! Binary entrypoint for icondex

fn main() {
    if let Err(err) = icondex_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
