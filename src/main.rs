use anyhow::Result;
use item_enum_keys::{
    catalog::ALL_BASECLASSES,
    cli::{Cli, Commands},
    generate::{run, GeneratePaths},
};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate {
            catalog,
            locale,
            overrides,
            output,
            dry_run,
        } => {
            let start = Instant::now();

            let generation = run(&GeneratePaths {
                catalog: &catalog,
                locale: &locale,
                overrides: &overrides,
                output: (!dry_run).then_some(output.as_path()),
            })?;

            let summary = &generation.summary;
            let elapsed = start.elapsed();
            if dry_run {
                println!("\nDry run, nothing written");
            } else {
                println!("\nWrote {:?}", output);
            }
            println!(
                "{} keys ({} renamed, {} dropped, {} residual collisions, {} unnamed) in {:.1}s",
                generation.table.len(),
                summary.renamed,
                summary.dropped.len(),
                summary.residual,
                summary.unnamed,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListBaseclasses => {
            println!("Baseclasses:\n");
            for baseclass in ALL_BASECLASSES {
                println!("  {:<24} {}", baseclass.name(), baseclass.id());
            }
        }
    }

    Ok(())
}
