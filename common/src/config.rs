/// Default lower bound of the stem-length query, in centimeters.
pub const DEFAULT_MIN_LENGTH: f64 = 35.0;
/// Default upper bound of the stem-length query, in centimeters.
pub const DEFAULT_MAX_LENGTH: f64 = 55.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prints the version banner before any other output.
    pub banner: bool,
    /// Log verbosity requested on the command line.
    ///
    /// `0` keeps the default `warn` level, `1` enables `debug`, anything
    /// higher enables `trace`. `RUST_LOG` takes precedence when set.
    pub verbose: u8,
    /// Inclusive lower bound for stem-length lookups (cm).
    pub min_length: f64,
    /// Inclusive upper bound for stem-length lookups (cm).
    pub max_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: false,
            verbose: 0,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
