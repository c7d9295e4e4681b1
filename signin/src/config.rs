use clap::Parser;
use std::path::PathBuf;

/// Where to sign in when nothing else is configured.
pub const DEFAULT_SERVER: &str = "https://auth.example.com";

/// A terminal sign-in form
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Authentication server to sign in against. Only the protocol and
    /// domain; the login path is added automatically.
    #[clap(long, env = "SIGNIN_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Where should we write logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("com", "example", "signin")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    // Read off the argument definition instead of parsing, so a
    // `SIGNIN_SERVER` in the environment running the tests can't interfere.
    #[test]
    fn defaults_to_hardcoded_server() {
        let command = Config::command();
        let server = command
            .get_arguments()
            .find(|arg| arg.get_id() == "server")
            .unwrap();

        let defaults: Vec<_> = server
            .get_default_values()
            .iter()
            .map(|value| value.to_str())
            .collect();
        assert_eq!(defaults, vec![Some(DEFAULT_SERVER)]);
        assert_eq!(server.get_env(), Some(OsStr::new("SIGNIN_SERVER")));
    }

    #[test]
    fn server_can_be_overridden() {
        let config =
            Config::try_parse_from(["signin", "--server", "http://localhost:3000"]).unwrap();

        assert_eq!(config.server, "http://localhost:3000");
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config::try_parse_from(["signin", "--data-dir", "/tmp/signin"]).unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/signin"));
    }
}
