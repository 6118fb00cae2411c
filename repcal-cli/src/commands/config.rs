use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use repcal_core::config::RepcalConfig;

pub fn run(config: &RepcalConfig) -> Result<()> {
    let config_path = RepcalConfig::config_path()?;

    println!("{}", "Paths".if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("  Config:            {}", config_path.display());
    println!();
    println!("{}", "Settings".if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("  default_interval:  {}", config.default_interval);
    println!("  output:            {}", config.output);
    println!("  log_level:         {}", config.log_level);

    Ok(())
}
