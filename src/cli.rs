use clap::{Parser, Subcommand};

use crate::share::Platform;

/// Default port for the share link server
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser, Debug)]
#[command(name = "sharekit")]
#[command(version, about = "Share a page on social platforms or copy its link", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the share dialog for one platform
    Share {
        platform: Platform,

        /// Page URL to share
        #[arg(short, long)]
        url: String,

        /// Page title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Print the link instead of opening it
        #[arg(short, long)]
        print: bool,
    },
    /// Print the share links for every platform
    Links {
        #[arg(short, long)]
        url: String,

        #[arg(short, long, default_value = "")]
        title: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Copy the page link to the clipboard
    Copy {
        #[arg(short, long)]
        url: String,
    },
    /// Serve share links over HTTP
    Serve {
        /// Port to run the server on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_share() {
        let cli = Cli::try_parse_from([
            "sharekit",
            "share",
            "whatsapp",
            "--url",
            "https://example.com",
            "--print",
        ])
        .unwrap();

        match cli.command {
            Commands::Share {
                platform,
                url,
                title,
                print,
            } => {
                assert_eq!(platform, Platform::WhatsApp);
                assert_eq!(url, "https://example.com");
                assert_eq!(title, "");
                assert!(print);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_platform() {
        let result = Cli::try_parse_from(["sharekit", "share", "myspace", "--url", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_x_alias() {
        let cli = Cli::try_parse_from(["sharekit", "share", "x", "--url", "https://example.com"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Share {
                platform: Platform::Twitter,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_serve_without_port() {
        let cli = Cli::try_parse_from(["sharekit", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: None }));
    }
}
