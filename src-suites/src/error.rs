use thiserror::Error;

/// Errors raised while building a suite from its textual configuration.
#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("no suite is registered under the name '{0}'")]
    UnknownSuite(String),

    #[error("instance specification '{0}' contains neither 'instances:' nor 'year:'")]
    BadInstanceSpec(String),

    #[error("suite '{suite}' defines no instances for year {year}")]
    UnknownYear { suite: String, year: i64 },

    #[error("the instance specification selected no instances")]
    NoValidInstances,

    #[error("suite options filtered out every entry of the {axis} axis")]
    NoValidItems { axis: &'static str },
}
