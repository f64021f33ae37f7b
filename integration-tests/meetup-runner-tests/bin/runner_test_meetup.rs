use meetup::runner::run_with_args;

fn main() {
    if let Err(meetup_error) = run_with_args() {
        eprintln!("{meetup_error}");
        std::process::exit(1);
    }
}
