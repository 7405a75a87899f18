pub mod build;
pub mod check;
pub mod dump;
pub mod error;
pub mod loader;

#[cfg(test)]
mod build_tests;

pub use error::CliError;

/// Print an error and exit with status 1.
pub fn fail(err: CliError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
