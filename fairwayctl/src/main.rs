use clap::{crate_authors, crate_description, crate_version, Parser};
use eyre::Result;
use tracing::{info, trace};

use fairway_common::{init_logging, ConfigFile};
use fairwayctl::{
    export_vessels, list_sources, list_vessels, project_vessel, view_snapshot, Config,
    ListSubCommand, Opts, SubCommand,
};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(NAME, opts.debug, opts.log_dir.clone())?;

    // Defaults are fine when there is no file.
    //
    let cfg = ConfigFile::<Config>::load(opts.config.as_deref())?;

    // Banner
    //
    if opts.verbose > 0 {
        banner()?;
    }

    handle_subcmd(cfg.inner(), &opts.subcmd)
}

pub fn handle_subcmd(cfg: &Config, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `view file`
        //
        SubCommand::View(vopts) => {
            trace!("view");

            println!("{}", view_snapshot(vopts, cfg)?);
        }

        // Handle `export -V vessel file`
        //
        SubCommand::Export(eopts) => {
            trace!("export");

            export_vessels(eopts, cfg)?;
        }

        // Handle `project file vessel`
        //
        SubCommand::Project(popts) => {
            trace!("project");

            println!("{}", project_vessel(popts, cfg)?);
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => match &lopts.cmd {
            ListSubCommand::Sources(fopts) => {
                info!("Listing all sources:");

                println!("{}", list_sources(&fopts.file)?);
            }
            ListSubCommand::Vessels(sopts) => {
                info!("Listing all vessels:");

                println!("{}", list_vessels(sopts, cfg)?);
            }
        },

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("{}", version());
            eprintln!("Modules: ");
            eprintln!("\t{}", fairway_common::version());
            eprintln!("\t{}", fairway_formats::version());
            eprintln!("\t{}", fairway_engine::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
