use std::process::ExitCode;

fn main() -> ExitCode {
    plalz_cli::run()
}
