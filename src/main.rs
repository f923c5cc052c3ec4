//! gitcmd binary entry point.

fn main() {
    if let Err(e) = gitcmd::cli::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
