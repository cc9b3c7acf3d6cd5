use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // The error is logged at error level when it is wrapped.
    match pricewatch::setup::setup_database() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
