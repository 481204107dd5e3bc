use crate::report::{
    run_column, run_demo, run_evaluate, run_foundation, run_materials, run_site, ColumnArgs,
    DemoArgs, EvaluateArgs, FoundationArgs, MaterialsArgs, SiteArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gaia_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Gaia",
    about = "Run the Gaia building advisory engine from the command line or as an HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a saved project file and print predictions, suggestions and scores
    Evaluate(EvaluateArgs),
    /// Print orientation, window, roof and foundation guidance for a site
    Site(SiteArgs),
    /// Print the material catalog for a climate and rainfall profile
    Materials(MaterialsArgs),
    /// Preliminary structural sizing lookups
    Recommend {
        #[command(subcommand)]
        command: RecommendCommand,
    },
    /// Evaluate a built-in sample project
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RecommendCommand {
    /// Foundation type for the soil and storey count
    Foundation(FoundationArgs),
    /// Column section for the storey count
    Column(ColumnArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Site(args) => {
            run_site(args);
            Ok(())
        }
        Command::Materials(args) => {
            run_materials(args);
            Ok(())
        }
        Command::Recommend {
            command: RecommendCommand::Foundation(args),
        } => {
            run_foundation(args);
            Ok(())
        }
        Command::Recommend {
            command: RecommendCommand::Column(args),
        } => {
            run_column(args);
            Ok(())
        }
        Command::Demo(args) => {
            run_demo(args);
            Ok(())
        }
    }
}
