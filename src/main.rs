use std::process::ExitCode;

mod audio;
mod config;
mod error;
mod library;
mod runtime;
mod session;
#[cfg(test)]
mod test_util;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
