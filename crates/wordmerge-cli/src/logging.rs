use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// Map the verbosity count onto a log level.
    ///
    /// ## Arguments
    /// * `default` - the level used when no `-v` flag is given.
    fn level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the global `stderrlog` logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8) -> LogArgs {
        LogArgs {
            quiet: false,
            verbose,
            ts: false,
        }
    }

    #[test]
    fn test_level() {
        assert!(matches!(args(0).level(2), stderrlog::LogLevelNum::Warn));
        assert!(matches!(args(0).level(0), stderrlog::LogLevelNum::Off));
        assert!(matches!(args(1).level(3), stderrlog::LogLevelNum::Error));
        assert!(matches!(args(4).level(2), stderrlog::LogLevelNum::Debug));
        assert!(matches!(args(9).level(2), stderrlog::LogLevelNum::Trace));
    }
}
