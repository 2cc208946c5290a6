use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use crate::{cmd, logging};

#[derive(Parser)]
#[command(
    author = "Telmar",
    version,
    disable_version_flag = true,
    about = "Manage the site configuration of a static blog"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    version: (),

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Write a new paperconf.toml seeded with the built-in defaults
    Init {
        /// Directory where the configuration is written
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,

        /// Site author (defaults to the current user name)
        #[arg(short = 'a', long)]
        author: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Validate the site configuration
    Check {
        /// Configuration file (searched from the current directory upwards by default)
        #[arg(short = 'p', long, env = "PAPERCONF_PATH")]
        path: Option<PathBuf>,

        /// Report issues as warnings without failing
        #[arg(short = 'w', long)]
        warnings: bool,
    },
    /// Display the effective site configuration
    Show {
        /// Configuration file (searched from the current directory upwards by default)
        #[arg(short = 'p', long, env = "PAPERCONF_PATH")]
        path: Option<PathBuf>,
    },
}

pub async fn start() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match cli.command {
        Commands::Init { dir, author, force } => {
            cmd::init(&dir, author, force).await?;
        }
        Commands::Check { path, warnings } => {
            cmd::check(path, warnings).await?;
        }
        Commands::Show { path } => {
            let output = cmd::show(path).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;

    const PATH_ENV: &str = "PAPERCONF_PATH";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn test_check_flags() {
        std::env::remove_var(PATH_ENV);

        let cli = Cli::try_parse_from(["paperconf", "check", "--debug", "-w"]).unwrap();
        assert!(cli.debug);
        let Commands::Check { path, warnings } = cli.command else {
            panic!("expected the check command");
        };
        assert!(warnings);
        assert_eq!(path, None);

        let cli = Cli::try_parse_from(["paperconf", "check", "-p", "site/paperconf.toml"]).unwrap();
        assert!(!cli.debug);
        let Commands::Check { path, warnings } = cli.command else {
            panic!("expected the check command");
        };
        assert!(!warnings);
        assert_eq!(path, Some(PathBuf::from("site/paperconf.toml")));
    }

    #[test]
    #[serial]
    fn test_path_from_env() {
        std::env::set_var(PATH_ENV, "/srv/blog/paperconf.toml");
        let from_env = Cli::try_parse_from(["paperconf", "show"]);
        let from_flag = Cli::try_parse_from(["paperconf", "show", "--path", "other.toml"]);
        std::env::remove_var(PATH_ENV);

        let Commands::Show { path } = from_env.unwrap().command else {
            panic!("expected the show command");
        };
        assert_eq!(path, Some(PathBuf::from("/srv/blog/paperconf.toml")));

        let Commands::Show { path } = from_flag.unwrap().command else {
            panic!("expected the show command");
        };
        assert_eq!(path, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn test_init_flags() {
        let cli = Cli::try_parse_from(["paperconf", "init", "-f", "-a", "Jane", "-d", "blog"])
            .unwrap();
        let Commands::Init { dir, author, force } = cli.command else {
            panic!("expected the init command");
        };
        assert!(force);
        assert_eq!(author.as_deref(), Some("Jane"));
        assert_eq!(dir, PathBuf::from("blog"));

        let cli = Cli::try_parse_from(["paperconf", "init"]).unwrap();
        let Commands::Init { dir, author, force } = cli.command else {
            panic!("expected the init command");
        };
        assert!(!force);
        assert_eq!(author, None);
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["paperconf", "check", "--force"]).is_err());
        assert!(Cli::try_parse_from(["paperconf"]).is_err());
    }
}
