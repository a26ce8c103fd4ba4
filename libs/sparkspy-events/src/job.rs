use serde::{Deserialize, Serialize};
use sparkspy_bridge::JavaObject;

use crate::convert::FromJava;
use crate::error::ConvertError;

/// End of a Spark job.
///
/// `job_result` is the string rendering of the enum-like JVM result value
/// ("JobSucceeded", "JobFailed(..)").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEndEvent {
    pub job_id: i64,
    pub time: i64,
    pub job_result: String,
}

impl FromJava for JobEndEvent {
    const TYPE_NAME: &'static str = "JobEndEvent";
    const FIELDS: &'static [&'static str] = &["jobId", "time", "jobResult"];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        Ok(Self {
            job_id: obj
                .call("jobId")
                .and_then(|v| v.into_long("jobId"))
                .map_err(ctx)?,
            time: obj
                .call("time")
                .and_then(|v| v.into_long("time"))
                .map_err(ctx)?,
            job_result: obj
                .call("jobResult")
                .and_then(|v| v.into_object("jobResult"))
                .and_then(|result| result.to_display_string())
                .map_err(ctx)?,
        })
    }
}
