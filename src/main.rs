use std::process::ExitCode;

use meetup::runner::run_with_args;

fn main() -> ExitCode {
    match run_with_args() {
        Ok(_) => ExitCode::SUCCESS,
        Err(meetup_error) => {
            eprintln!("meetup failed: {meetup_error}");
            ExitCode::FAILURE
        }
    }
}
