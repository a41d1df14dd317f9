use snafu::Snafu;

/// Failure conditions shared by all store operations.
///
/// Every variant carries the path exactly as the caller spelled it, so error
/// messages point at the argument rather than at a normalized form.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FsError {
    #[snafu(display("{path} does not exist"))]
    NotFound { path: String },

    #[snafu(display("path already exists: {path}"))]
    AlreadyExists { path: String },

    #[snafu(display("{path} is a directory"))]
    NotAFile { path: String },

    #[snafu(display("{path} is not a directory"))]
    NotADirectory { path: String },
}

pub type Result<T> = std::result::Result<T, FsError>;
