//! Resolve a pipeline specification and print the resulting chain.
//!
//! Useful for checking how a configuration string will be interpreted before
//! wiring it into a remap job:
//!
//! ```text
//! pipeline_info "cressman:3:3,threshold:18:50"
//! pipeline_info --list
//! ```

use anyhow::Result;

use regrid::{default_registry, init_tracing, Config, PipelineBuilder};

fn main() -> Result<()> {
    let (config, args) = Config::load()?;
    init_tracing(&config.log_level);

    if args.list {
        print!("{}", default_registry().help());
        return Ok(());
    }

    config.validate()?;

    let chain = PipelineBuilder::new().build(&config.remap.pipeline);

    println!("Specification: {}", config.remap.pipeline);
    println!("Resolved chain: {}", chain.describe());
    println!(
        "Boundary modes: x={:?}, y={:?}",
        config.remap.boundary_x()?,
        config.remap.boundary_y()?
    );

    Ok(())
}
