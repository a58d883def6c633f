use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use urivalue::{Profile, UriError, UriValue};

/// Parse, normalize and resolve URIs from the command line.
#[derive(Parser, Debug)]
#[command(name = "urivalue", version, about)]
struct Cli {
    /// Apply URL rules (default ports stripped, query sorted)
    #[arg(long, global = true)]
    url: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the normalized form of each URI
    Normalize {
        /// URIs to normalize
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Print the components of a URI, one per line
    Components {
        /// URI to inspect
        uri: String,
    },
    /// Resolve a reference against a base URI
    Resolve {
        /// Absolute base URI
        base: String,
        /// Reference to resolve
        reference: String,
        /// Treat a reference with the base's own scheme as relative
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = if cli.url {
        run::<urivalue::Web>(&cli.command)
    } else {
        run::<urivalue::Generic>(&cli.command)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<P: Profile>(command: &Command) -> Result<(), UriError> {
    match command {
        Command::Normalize { uris } => {
            for uri in uris {
                println!("{}", UriValue::<P>::parse(uri)?);
            }
        }
        Command::Components { uri } => {
            let uri = UriValue::<P>::parse(uri)?;
            print_component("scheme", Some(uri.scheme()));
            print_component("authority", uri.authority());
            print_component("user info", uri.user_info());
            print_component("host", uri.host());
            print_component("port", uri.port().map(|p| p.to_string()).as_deref());
            print_component("path", Some(uri.path()));
            print_component("query", uri.query());
            print_component("fragment", uri.fragment());
        }
        Command::Resolve {
            base,
            reference,
            lenient,
        } => {
            let resolved = UriValue::<P>::resolve_str(base, reference, !lenient)?;
            println!("{}", resolved);
        }
    }
    Ok(())
}

fn print_component(name: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("{:<10} {:?}", name, value),
        None => println!("{:<10} -", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::parse_from(["urivalue", "--url", "resolve", "http://a/b", "c", "--lenient"]);
        assert!(cli.url);
        match cli.command {
            Command::Resolve { base, reference, lenient } => {
                assert_eq!(base, "http://a/b");
                assert_eq!(reference, "c");
                assert!(lenient);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_run_both_profiles() {
        let command = Command::Normalize {
            uris: vec!["http://e.com:80/".to_string()],
        };
        assert!(run::<urivalue::Generic>(&command).is_ok());
        assert!(run::<urivalue::Web>(&command).is_ok());

        let bad = Command::Components {
            uri: "no scheme".to_string(),
        };
        assert!(matches!(run::<urivalue::Generic>(&bad), Err(UriError::InvalidScheme(_))));
    }
}
