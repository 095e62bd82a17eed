use crate::cli::commands::report::{has_data, print_scan_issues};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let run = ReportLogic::run(&cfg.data_path())?;
        print_scan_issues(&run);

        if has_data(&run, cfg) {
            ExportLogic::export(&run.report, *format, file, *force)?;
        }
    }
    Ok(())
}
