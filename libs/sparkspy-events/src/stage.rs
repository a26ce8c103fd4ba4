use serde::{Deserialize, Serialize};
use sparkspy_bridge::{JavaObject, extract_fields, optional_long, optional_str, take_long, take_str};

use crate::convert::FromJava;
use crate::error::ConvertError;
use crate::metrics::TaskMetrics;

/// A stage as reported at completion time.
///
/// `submission_time` is unset for stages that were never submitted,
/// `completion_time` for stages still running, `failure_reason` for stages
/// that completed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    pub name: String,
    pub num_tasks: i64,
    pub stage_id: i64,
    pub attempt_number: i64,
    pub submission_time: Option<i64>,
    pub completion_time: Option<i64>,
    pub failure_reason: Option<String>,
    pub task_metrics: TaskMetrics,
}

impl FromJava for StageInfo {
    const TYPE_NAME: &'static str = "StageInfo";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "numTasks",
        "stageId",
        "attemptNumber",
        "submissionTime",
        "completionTime",
        "failureReason",
        "taskMetrics",
    ];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields =
            extract_fields(obj, &["name", "numTasks", "stageId", "attemptNumber"], &[])
                .map_err(ctx)?;
        let task_metrics = obj
            .call("taskMetrics")
            .and_then(|v| v.into_object("taskMetrics"))
            .map_err(ctx)?;
        Ok(Self {
            name: take_str(&mut fields, "name").map_err(ctx)?,
            num_tasks: take_long(&mut fields, "numTasks").map_err(ctx)?,
            stage_id: take_long(&mut fields, "stageId").map_err(ctx)?,
            attempt_number: take_long(&mut fields, "attemptNumber").map_err(ctx)?,
            submission_time: optional_long(obj, "submissionTime").map_err(ctx)?,
            completion_time: optional_long(obj, "completionTime").map_err(ctx)?,
            failure_reason: optional_str(obj, "failureReason").map_err(ctx)?,
            task_metrics: TaskMetrics::from_java(task_metrics.as_ref())?,
        })
    }
}

/// Completion of a stage; wraps the reported [`StageInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCompletedEvent {
    pub stage_info: StageInfo,
}

impl FromJava for StageCompletedEvent {
    const TYPE_NAME: &'static str = "StageCompletedEvent";
    const FIELDS: &'static [&'static str] = &["stageInfo"];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let stage_info = obj
            .call("stageInfo")
            .and_then(|v| v.into_object("stageInfo"))
            .map_err(ctx)?;
        Ok(Self { stage_info: StageInfo::from_java(stage_info.as_ref())? })
    }
}
