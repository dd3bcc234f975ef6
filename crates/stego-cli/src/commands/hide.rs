use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use clap::Args;
use stego_core::StegoError;

use super::read_stdin;
use crate::cli::resolve_password;
use crate::CliResult;

/// Hides data in PNG images
///
/// Without a message or data file the data is read from stdin,
/// without an output file the PNG is written to stdout.
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password deciding the order the data is spread over the image
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password interactively
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// Carrier image such as a PNG, used readonly. `-` reads it from stdin
    #[arg(short = 'i', long = "in", value_name = "media file")]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let carrier_from_stdin = self.media.as_os_str() == "-";
        let password = resolve_password(self.password, self.ask_password, true);

        let mut api = stego_core::api::hide::prepare().use_password(password);
        api = match (self.message, self.data_file) {
            (Some(message), _) => api.with_message(&message),
            (None, Some(data_file)) => api.with_file(data_file),
            // stdin cannot carry both
            (None, None) if carrier_from_stdin => return Err(StegoError::MissingMessage),
            (None, None) => api.with_data(read_stdin()?),
        };
        api = if carrier_from_stdin {
            api.with_image_bytes(read_stdin()?)
        } else {
            api.with_image(self.media)
        };

        match self.write_to_file {
            Some(target) => api.with_output(target).execute(),
            None => {
                let mut png = Cursor::new(Vec::new());
                api.execute_to_writer(&mut png)?;

                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(png.get_ref())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| StegoError::WriteError { source })
            }
        }
    }
}
