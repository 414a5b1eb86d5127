use colored::Colorize;

use crate::cli::render;
use crate::error::Result;
use crate::kpi;
use crate::loader::demo_transactions;

pub fn run() -> Result<()> {
    let txns = demo_transactions();
    println!("{}", "Built-in demo dataset".bold());
    println!("{}", render::txn_table(&txns));
    println!("{}", render::kpi_table(&kpi::compute(&txns)));
    Ok(())
}
