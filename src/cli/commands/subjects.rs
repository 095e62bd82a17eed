use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subjects = cmd {
        for subject in &cfg.subjects {
            println!("{subject}");
        }
    }

    Ok(())
}
