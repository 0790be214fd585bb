use crate::types::{ExportFormat, ViewStyle};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Render an analysis payload as categorized sections",
        long_about = "Render an analysis payload as categorized sections.\n\n\
                      The payload is the JSON returned by the analysis service. \
                      Use '-' to read it from stdin. The payload is kept in the \
                      workspace so that 'export' can re-encode it later."
    )]
    Render {
        /// Payload file, or '-' for stdin
        input: String,

        /// Also write the sections as HTML markup to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Information density of the text view
        #[arg(long, default_value = "standard")]
        view: ViewStyle,

        /// Do not keep the payload for a later export
        #[arg(long)]
        no_store: bool,
    },

    #[command(
        about = "Export the stored (or given) payload as JSON, CSV or Excel",
        long_about = "Export the analysis payload.\n\n\
                      json  - the whole payload, pretty printed\n\
                      csv   - one row per scraped comment\n\
                      excel - same rows as csv, saved as .xls for spreadsheets"
    )]
    Export {
        #[arg(id = "export_format", value_name = "FORMAT")]
        format: ExportFormat,

        /// Payload file to export instead of the stored result ('-' for stdin)
        #[arg(long)]
        input: Option<String>,

        /// Output file (defaults to <output_dir>/<base_name>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(about = "Classify a failure message and print the user-facing notice")]
    Notice {
        /// Failure message reported by the analysis service
        message: Option<String>,

        /// Report a connection failure instead of a service message
        #[arg(long, conflicts_with = "message")]
        network: bool,
    },

    #[command(about = "Show or initialize the workspace configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}
