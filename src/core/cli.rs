use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub json: bool,
    pub show_config: bool,
    /// `KEY=VALUE` edits applied to the config file before running.
    pub overrides: Vec<(String, String)>,
}

impl CliOptions {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut opts = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    opts.config_path = PathBuf::from(Self::next_value(&mut args, "--config")?);
                }
                "--logs" => {
                    opts.logs_dir = PathBuf::from(Self::next_value(&mut args, "--logs")?);
                }
                "--set" => {
                    let pair = Self::next_value(&mut args, "--set")?;
                    let (key, value) = pair
                        .split_once('=')
                        .ok_or_else(|| format!("Expected KEY=VALUE after --set, got '{pair}'"))?;
                    opts.overrides
                        .push((key.trim().to_string(), value.trim().to_string()));
                }
                "--json" => opts.json = true,
                "--show-config" => opts.show_config = true,
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(opts)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            logs_dir: PathBuf::from("logs"),
            json: false,
            show_config: false,
            overrides: Vec::new(),
        }
    }
}
