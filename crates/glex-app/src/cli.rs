use std::path::PathBuf;

use clap::Parser;

/// glex: a sphere-tessellation demo on a fixed-function style renderer.
#[derive(Parser, Debug)]
#[command(name = "glex", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug` or `glex_renderer=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Render offscreen instead of opening a window.
    #[arg(long)]
    pub headless: bool,

    /// Frames to render in headless mode.
    #[arg(long, default_value_t = 60, requires = "headless")]
    pub frames: u32,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["glex"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.headless);
        assert_eq!(args.frames, 60);
        assert!(!args.print_config);
    }

    #[test]
    fn headless_with_frames() {
        let args =
            Args::try_parse_from(["glex", "--headless", "--frames", "3", "--log-level", "debug"])
                .unwrap();
        assert!(args.headless);
        assert_eq!(args.frames, 3);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn frames_requires_headless() {
        assert!(Args::try_parse_from(["glex", "--frames", "3"]).is_err());
    }

    #[test]
    fn config_path() {
        let args = Args::try_parse_from(["glex", "--config", "/tmp/glex.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/glex.toml")));
    }
}
