use std::process::ExitCode;

fn main() -> ExitCode {
    projectdesk_lib::run()
}
