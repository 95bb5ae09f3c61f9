#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use funclab::cli::Args;
#[cfg(feature = "native")]
use funclab::commands::{Session, run};
#[cfg(feature = "native")]
use funclab::platform::FileStore;
#[cfg(feature = "native")]
use funclab::{AppConfig, init_logging};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".funclab")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load_or_default(&data_dir);
    let mut session = Session::open(FileStore::in_data_dir(&data_dir), config);

    let mut stdout = std::io::stdout().lock();
    run(args.command, &mut session, &mut stdout)
}

#[cfg(not(feature = "native"))]
fn main() {
    // The web build enters through wasm_bindgen in lib.rs
    panic!("This binary requires the 'native' feature. The web build is a library.");
}
