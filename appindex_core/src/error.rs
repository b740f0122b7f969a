use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum AppIndexError {
	#[error(transparent)]
	#[diagnostic(code(appindex::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(appindex::config_parse),
		help("check that appindex.toml is valid TOML with `sources`, `output` and/or [defaults]")
	)]
	ConfigParse(String),

	#[error("failed to serialize the apps index: {0}")]
	#[diagnostic(code(appindex::serialize))]
	Serialize(#[from] serde_json::Error),

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(
		code(appindex::write_output),
		help("make sure the output directory is writable or change `output` in appindex.toml")
	)]
	WriteOutput { path: String, reason: String },
}

pub type AppIndexResult<T> = Result<T, AppIndexError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
