use clap::Parser;
use log::LevelFilter;

mod render;
mod template;
mod vpc;

pub type Result<T> = anyhow::Result<T>;

/// Prints one CloudFormation VPC template to stdout per invocation. With no
/// arguments the CIDR is the orchestrator's placeholder token, so substitution
/// can happen after the document is emitted.
#[derive(Parser)]
#[command(name = "tropos-vpc")]
#[command(about = "CloudFormation VPC template generator", long_about = None)]
struct Cli {
    /// CIDR block, or a comma-separated list with --multi.
    #[arg(long, default_value = vpc::CIDR_PLACEHOLDER)]
    cidr: String,

    /// Fan out one VPC (and matching output) per comma-separated CIDR entry.
    #[arg(long)]
    multi: bool,

    /// Value of the Name tag on each VPC.
    #[arg(long, default_value = vpc::DEFAULT_TAG_NAME)]
    tag: String,

    /// Output document format.
    #[arg(long, value_enum, default_value = "json")]
    format: render::Format,

    /// Log build detail to stderr (stdout carries only the document).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .init();

    let template = if cli.multi {
        vpc::multi(&cli.cidr, &cli.tag)?
    } else {
        vpc::single(&cli.cidr, &cli.tag)?
    };

    println!("{}", render::to_document(&template, cli.format)?);
    Ok(())
}
