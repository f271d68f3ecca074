fn main() {
    shortstack_cli::logging::init();
    let code = shortstack_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
