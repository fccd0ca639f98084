use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::filters::Filters;

/// Export filtered results to csv or json.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        test_type,
        season,
        name,
        force,
    } = cmd
    {
        let filters = Filters {
            category: category.clone().unwrap_or_default(),
            test_type: test_type.clone().unwrap_or_default(),
            season: season.clone().unwrap_or_default(),
            name: name.clone().unwrap_or_default(),
        };

        ExportLogic::export(cfg, format.clone(), file, &filters, *force)?;
    }
    Ok(())
}
