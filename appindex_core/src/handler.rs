use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::AppIndexError;
use crate::AppIndexResult;
use crate::AppRecord;
use crate::BuildContext;
use crate::BuildSummary;
use crate::build_index;

/// Status code of a successful build.
pub const STATUS_OK: u16 = 200;

/// Status code of a failed build.
pub const STATUS_ERROR: u16 = 500;

/// Response returned to the invoking trigger.
///
/// Serializes as `{ "statusCode": 200, "body": "<json>" }` where `body` is a
/// JSON-encoded [`ResponseBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
	pub status_code: u16,
	pub body: String,
}

/// Decoded form of [`HandlerResponse::body`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
	Success {
		success: bool,
		message: String,
		apps: Vec<AppRecord>,
	},
	Failure {
		success: bool,
		error: String,
	},
}

impl ResponseBody {
	pub fn failure(error: impl ToString) -> Self {
		Self::Failure {
			success: false,
			error: error.to_string(),
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { success: true, .. })
	}
}

impl From<BuildSummary> for ResponseBody {
	fn from(summary: BuildSummary) -> Self {
		Self::Success {
			success: true,
			message: summary.message,
			apps: summary.apps,
		}
	}
}

impl HandlerResponse {
	pub fn is_success(&self) -> bool {
		self.status_code == STATUS_OK
	}

	/// Decode the JSON body.
	pub fn body(&self) -> serde_json::Result<ResponseBody> {
		serde_json::from_str(&self.body)
	}

	fn new(status_code: u16, body: &ResponseBody) -> Self {
		match serde_json::to_string(body) {
			Ok(body) => Self { status_code, body },
			Err(error) => {
				Self {
					status_code: STATUS_ERROR,
					body: serde_json::json!({ "success": false, "error": error.to_string() })
						.to_string(),
				}
			}
		}
	}
}

impl From<AppIndexResult<BuildSummary>> for HandlerResponse {
	fn from(result: AppIndexResult<BuildSummary>) -> Self {
		match result {
			Ok(summary) => Self::new(STATUS_OK, &ResponseBody::from(summary)),
			Err(error) => Self::from(error),
		}
	}
}

impl From<AppIndexError> for HandlerResponse {
	fn from(error: AppIndexError) -> Self {
		tracing::error!(%error, "failed to build apps index");
		Self::new(STATUS_ERROR, &ResponseBody::failure(&error))
	}
}

/// Entry point for a CMS update trigger.
///
/// The event is not inspected. The index is regenerated from the sources in
/// `ctx` and any failure is reported through the response rather than
/// returned.
pub fn handler(event: &serde_json::Value, ctx: &BuildContext) -> HandlerResponse {
	tracing::debug!(%event, "received build event");
	HandlerResponse::from(build_index(ctx))
}

/// Like [`handler`], but resolves the context from `root` first. A config
/// that fails to load is reported as a failed response.
pub fn handle_at(event: &serde_json::Value, root: &Path) -> HandlerResponse {
	match BuildContext::load(root) {
		Ok(ctx) => handler(event, &ctx),
		Err(error) => HandlerResponse::from(error),
	}
}
