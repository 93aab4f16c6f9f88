use clap::{Parser, ValueEnum};

use crate::types::{FindOpts, OutputFormat};

struct DefaultArgs;

impl DefaultArgs {
    pub const PATH: &'static str = "/";
}

/// Recursive find for FTP servers.
#[derive(Clone, Parser)]
#[command(name = "ftpfind")]
#[command(about = "Search a remote FTP tree by mtime and path pattern.")]
pub struct Cli {
    /// Remote FTP server name.
    #[arg(value_name = "HOST")]
    pub host: String,

    /// FTP user name. Default: FTPFIND_USER env / .env, else prompt.
    #[arg(long, short)]
    pub user: Option<String>,

    /// FTP password. Default: FTPFIND_PASSWORD env / .env, else prompt.
    #[arg(long, short)]
    pub password: Option<String>,

    /// FTP port.
    #[arg(long, short = 'P', default_value_t = 21, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Searching root path on the server.
    #[arg(long, short = 'd', default_value = DefaultArgs::PATH)]
    pub path: String,

    /// Pattern for regular expression, matched against entry paths.
    #[arg(long, short = 's')]
    pub regexp: Option<String>,

    /// Modification time criterion: YYYY-MM-DD, or <N>y|<N>m|<N>d back from now.
    #[arg(long, short = 't')]
    pub time: Option<String>,

    /// Stop searching after limit reached.
    #[arg(long)]
    pub limit: Option<usize>,

    /// File list format.
    #[arg(long, value_enum, default_value_t = FormatArg::Simple)]
    pub format: FormatArg,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// CLI spelling of [`OutputFormat`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Simple,
    Full,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Simple => OutputFormat::Simple,
            FormatArg::Full => OutputFormat::Full,
        }
    }
}

impl Cli {
    /// Flatten the parsed arguments into the pipeline configuration.
    pub fn find_opts(&self) -> FindOpts {
        FindOpts {
            root: self.path.clone(),
            time: self.time.clone(),
            pattern: self.regexp.clone(),
            limit: self.limit,
            format: self.format.into(),
        }
    }
}
