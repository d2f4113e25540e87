use crate::cli::parser::Commands;
use crate::core::weekday_index;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Weekday { date } = cmd {
        println!("{}", weekday_index(date)?);
    }
    Ok(())
}
