use colored::Colorize;

use crate::error::Result;
use crate::template::template_csv;

pub fn run(path: &str) -> Result<()> {
    std::fs::write(path, template_csv()?)?;
    println!("{} template written to {path}", "ok:".green());
    println!("Fill it with your data, then run `findash show --file {path}`.");
    Ok(())
}
