use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use stego_core::StegoError;

use super::read_stdin;
use crate::cli::resolve_password;
use crate::CliResult;

/// Unveils data from PNG images
///
/// Without an input file the image is read from stdin,
/// without an output file the data is written to stdout.
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password the data was hidden with
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password interactively
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "media source file")]
    pub media: Option<PathBuf>,

    /// Unveiled data will be stored in this file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password = resolve_password(self.password, self.ask_password, false);

        let mut api = stego_core::api::unveil::prepare().using_password(password);
        api = match self.media {
            Some(media) => api.from_secret_file(media),
            None => api.from_secret_bytes(read_stdin()?),
        };

        match self.output_file {
            Some(output_file) => api.into_output_file(output_file).execute().map(|_| ()),
            None => {
                let payload = api.execute()?;

                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(&payload)
                    .and_then(|_| stdout.flush())
                    .map_err(|source| StegoError::WriteError { source })
            }
        }
    }
}
