use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::names::known_names;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Names = cmd {
        let names = known_names(&cfg.data_path())?;

        if names.is_empty() {
            info("No team members have logged hours yet.");
        }

        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
