//! Fields command - show the fixed extraction schema.

use clap::Args;
use console::style;

use apolice_core::policy::Field;

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Also show the regex pattern behind each field
    #[arg(short, long)]
    patterns: bool,
}

pub async fn run(args: FieldsArgs) -> anyhow::Result<()> {
    println!(
        "{} extraction fields (fixed schema, column order):",
        Field::COUNT
    );
    println!();

    for (i, field) in Field::ALL.iter().enumerate() {
        println!("{:>3}. {}", i + 1, style(field.label()).bold());
        if args.patterns {
            println!("     {}", style(field.pattern().as_str()).dim());
        }
    }

    Ok(())
}
