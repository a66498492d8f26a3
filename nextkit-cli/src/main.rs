fn main() {
    std::process::exit(nextkit_cli::cli::run(std::env::args_os()));
}
