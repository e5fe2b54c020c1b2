use crate::catalog::{CATALOG, Category};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::rupiah;

const CATEGORY_ORDER: [Category; 7] = [
    Category::Yellow,
    Category::Orange,
    Category::Red,
    Category::White,
    Category::Blue,
    Category::Purple,
    Category::Operational,
];

/// Print the service catalog grouped by category.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Items = cmd {
        header("SERVICE CATALOG");

        for cat in CATEGORY_ORDER {
            println!("[{}]", cat.label());
            for item in CATALOG.iter().filter(|i| i.category == cat) {
                let premium_tag = if item.is_premium() { "  *premium" } else { "" };
                println!(
                    "  {:<22} {:<20} {}{}",
                    item.id,
                    item.label,
                    rupiah(item.unit_price),
                    premium_tag
                );
            }
            println!();
        }

        println!("Pairs exclude [OPERATIONAL] entries; *premium counts toward the quality tally.");
    }

    Ok(())
}
