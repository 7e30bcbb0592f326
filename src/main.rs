use sobel_bands::cli::{parse_args, run};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = parse_args(env::args()).and_then(|args| run(&args));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
