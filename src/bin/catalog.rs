// Prints the table of contents for every pattern in the configured locale.
// `catalog zh` or `catalog en` overrides the config file.

use design_patterns::catalog::{self, Locale};
use design_patterns::config::CatalogConfig;
use design_patterns::logging;
use tracing::warn;

fn main() -> design_patterns::Result<()> {
    let config = CatalogConfig::load_default()?;
    logging::init(&config.log_filter);

    let locale = match std::env::args().nth(1).as_deref() {
        Some("zh") => Locale::Zh,
        Some("en") => Locale::En,
        Some(other) => {
            warn!(locale = other, "unknown locale, using configured one");
            config.locale
        }
        None => config.locale,
    };

    print!("{}", catalog::render_index(locale));
    println!("\n{} patterns", catalog::catalog().len());
    Ok(())
}
