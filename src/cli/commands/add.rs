use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;

/// Log a new hour entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        date,
        hours,
        subject,
    } = cmd
    {
        AddLogic::apply(cfg, name, date, hours, subject)?;
    }

    Ok(())
}
