use serde::{Deserialize, Serialize};
use sparkspy_bridge::{JavaObject, extract_fields, take_long};

use crate::convert::FromJava;
use crate::error::ConvertError;

/// Output side of a task: bytes/records written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMetrics {
    pub bytes_written: i64,
    pub records_written: i64,
}

impl FromJava for OutputMetrics {
    const TYPE_NAME: &'static str = "OutputMetrics";
    const FIELDS: &'static [&'static str] = &["bytesWritten", "recordsWritten"];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields = extract_fields(obj, Self::FIELDS, &[]).map_err(ctx)?;
        Ok(Self {
            bytes_written: take_long(&mut fields, "bytesWritten").map_err(ctx)?,
            records_written: take_long(&mut fields, "recordsWritten").map_err(ctx)?,
        })
    }
}

/// Input side of a task: bytes/records read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMetrics {
    pub bytes_read: i64,
    pub records_read: i64,
}

impl FromJava for InputMetrics {
    const TYPE_NAME: &'static str = "InputMetrics";
    const FIELDS: &'static [&'static str] = &["bytesRead", "recordsRead"];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields = extract_fields(obj, Self::FIELDS, &[]).map_err(ctx)?;
        Ok(Self {
            bytes_read: take_long(&mut fields, "bytesRead").map_err(ctx)?,
            records_read: take_long(&mut fields, "recordsRead").map_err(ctx)?,
        })
    }
}

/// Shuffle fetch counters.
///
/// No longer part of [`TaskMetrics`] (the accessors were dropped upstream);
/// still convertible directly for callers on older library versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleReadMetrics {
    pub fetch_wait_time: i64,
    pub local_blocks_fetched: i64,
    pub local_bytes_read: i64,
    pub records_read: i64,
    pub remote_blocks_fetched: i64,
    pub remote_bytes_read: i64,
    pub remote_bytes_read_to_disk: i64,
    pub total_blocks_fetched: i64,
    pub total_bytes_read: i64,
}

impl FromJava for ShuffleReadMetrics {
    const TYPE_NAME: &'static str = "ShuffleReadMetrics";
    const FIELDS: &'static [&'static str] = &[
        "fetchWaitTime",
        "localBlocksFetched",
        "localBytesRead",
        "recordsRead",
        "remoteBlocksFetched",
        "remoteBytesRead",
        "remoteBytesReadToDisk",
        "totalBlocksFetched",
        "totalBytesRead",
    ];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields = extract_fields(obj, Self::FIELDS, &[]).map_err(ctx)?;
        Ok(Self {
            fetch_wait_time: take_long(&mut fields, "fetchWaitTime").map_err(ctx)?,
            local_blocks_fetched: take_long(&mut fields, "localBlocksFetched").map_err(ctx)?,
            local_bytes_read: take_long(&mut fields, "localBytesRead").map_err(ctx)?,
            records_read: take_long(&mut fields, "recordsRead").map_err(ctx)?,
            remote_blocks_fetched: take_long(&mut fields, "remoteBlocksFetched").map_err(ctx)?,
            remote_bytes_read: take_long(&mut fields, "remoteBytesRead").map_err(ctx)?,
            remote_bytes_read_to_disk: take_long(&mut fields, "remoteBytesReadToDisk")
                .map_err(ctx)?,
            total_blocks_fetched: take_long(&mut fields, "totalBlocksFetched").map_err(ctx)?,
            total_bytes_read: take_long(&mut fields, "totalBytesRead").map_err(ctx)?,
        })
    }
}

/// Shuffle write counters. Same versioning note as [`ShuffleReadMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleWriteMetrics {
    pub bytes_written: i64,
    pub records_written: i64,
    pub write_time: i64,
}

impl FromJava for ShuffleWriteMetrics {
    const TYPE_NAME: &'static str = "ShuffleWriteMetrics";
    const FIELDS: &'static [&'static str] = &["bytesWritten", "recordsWritten", "writeTime"];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields = extract_fields(obj, Self::FIELDS, &[]).map_err(ctx)?;
        Ok(Self {
            bytes_written: take_long(&mut fields, "bytesWritten").map_err(ctx)?,
            records_written: take_long(&mut fields, "recordsWritten").map_err(ctx)?,
            write_time: take_long(&mut fields, "writeTime").map_err(ctx)?,
        })
    }
}

/// Per-task execution counters.
///
/// Scalar fields are read generically; `output_metrics` / `input_metrics`
/// recurse into their own conversions. Shuffle read/write metrics are not
/// part of this schema: Spark 3.4 removed those accessors, and the fields
/// went with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetrics {
    pub executor_deserialize_time: i64,
    pub executor_run_time: i64,
    pub executor_cpu_time: i64,
    pub result_size: i64,
    pub jvm_gc_time: i64,
    pub result_serialization_time: i64,
    pub memory_bytes_spilled: i64,
    pub disk_bytes_spilled: i64,
    pub peak_execution_memory: i64,
    pub output_metrics: OutputMetrics,
    pub input_metrics: InputMetrics,
}

impl FromJava for TaskMetrics {
    const TYPE_NAME: &'static str = "TaskMetrics";
    const FIELDS: &'static [&'static str] = &[
        "executorDeserializeTime",
        "executorRunTime",
        "executorCpuTime",
        "resultSize",
        "jvmGCTime",
        "resultSerializationTime",
        "memoryBytesSpilled",
        "diskBytesSpilled",
        "peakExecutionMemory",
        "outputMetrics",
        "inputMetrics",
    ];

    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        let ctx = |e| ConvertError::new(Self::TYPE_NAME, e);
        let mut fields =
            extract_fields(obj, Self::FIELDS, &["inputMetrics", "outputMetrics"]).map_err(ctx)?;
        let output = obj
            .call("outputMetrics")
            .and_then(|v| v.into_object("outputMetrics"))
            .map_err(ctx)?;
        let input = obj
            .call("inputMetrics")
            .and_then(|v| v.into_object("inputMetrics"))
            .map_err(ctx)?;
        Ok(Self {
            executor_deserialize_time: take_long(&mut fields, "executorDeserializeTime")
                .map_err(ctx)?,
            executor_run_time: take_long(&mut fields, "executorRunTime").map_err(ctx)?,
            executor_cpu_time: take_long(&mut fields, "executorCpuTime").map_err(ctx)?,
            result_size: take_long(&mut fields, "resultSize").map_err(ctx)?,
            jvm_gc_time: take_long(&mut fields, "jvmGCTime").map_err(ctx)?,
            result_serialization_time: take_long(&mut fields, "resultSerializationTime")
                .map_err(ctx)?,
            memory_bytes_spilled: take_long(&mut fields, "memoryBytesSpilled").map_err(ctx)?,
            disk_bytes_spilled: take_long(&mut fields, "diskBytesSpilled").map_err(ctx)?,
            peak_execution_memory: take_long(&mut fields, "peakExecutionMemory").map_err(ctx)?,
            output_metrics: OutputMetrics::from_java(output.as_ref())?,
            input_metrics: InputMetrics::from_java(input.as_ref())?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use sparkspy_bridge::BridgeError;
    use sparkspy_bridge::fake::FakeObject;

    use super::*;

    pub(crate) fn task_metrics_object() -> FakeObject {
        FakeObject::new()
            .with_long("executorDeserializeTime", 12)
            .with_long("executorRunTime", 340)
            .with_long("executorCpuTime", 290)
            .with_long("resultSize", 2048)
            .with_long("jvmGCTime", 15)
            .with_long("resultSerializationTime", 3)
            .with_long("memoryBytesSpilled", 0)
            .with_long("diskBytesSpilled", 0)
            .with_long("peakExecutionMemory", 65536)
            .with_object(
                "outputMetrics",
                FakeObject::new()
                    .with_long("bytesWritten", 1024)
                    .with_long("recordsWritten", 10),
            )
            .with_object(
                "inputMetrics",
                FakeObject::new()
                    .with_long("bytesRead", 4096)
                    .with_long("recordsRead", 40),
            )
    }

    #[test]
    fn leaf_fields_equal_accessor_returns() {
        let obj = FakeObject::new()
            .with_long("bytesRead", 4096)
            .with_long("recordsRead", 40);
        let metrics = InputMetrics::from_java(&obj).unwrap();
        assert_eq!(metrics, InputMetrics { bytes_read: 4096, records_read: 40 });
    }

    #[test]
    fn shuffle_read_converts_all_nine_counters() {
        let mut obj = FakeObject::new();
        for (i, name) in ShuffleReadMetrics::FIELDS.iter().enumerate() {
            obj = obj.with_long(name, i as i64);
        }
        let metrics = ShuffleReadMetrics::from_java(&obj).unwrap();
        assert_eq!(metrics.fetch_wait_time, 0);
        assert_eq!(metrics.remote_bytes_read_to_disk, 6);
        assert_eq!(metrics.total_bytes_read, 8);
    }

    #[test]
    fn shuffle_write_converts() {
        let obj = FakeObject::new()
            .with_long("bytesWritten", 512)
            .with_long("recordsWritten", 4)
            .with_long("writeTime", 77);
        let metrics = ShuffleWriteMetrics::from_java(&obj).unwrap();
        assert_eq!(
            metrics,
            ShuffleWriteMetrics { bytes_written: 512, records_written: 4, write_time: 77 }
        );
    }

    #[test]
    fn nested_fields_equal_independent_conversion() {
        let obj = task_metrics_object();
        let metrics = TaskMetrics::from_java(&obj).unwrap();

        let nested = obj
            .call("inputMetrics")
            .and_then(|v| v.into_object("inputMetrics"))
            .unwrap();
        assert_eq!(metrics.input_metrics, InputMetrics::from_java(nested.as_ref()).unwrap());
        assert_eq!(metrics.output_metrics.bytes_written, 1024);
        assert_eq!(metrics.executor_run_time, 340);
    }

    #[test]
    fn converts_without_shuffle_accessors() {
        // A newer library version no longer exposes shuffleReadMetrics /
        // shuffleWriteMetrics; the schema dropped the fields, so conversion
        // must not touch those accessors at all.
        let obj = task_metrics_object();
        assert!(TaskMetrics::from_java(&obj).is_ok());
    }

    #[test]
    fn nested_failure_propagates_unchanged() {
        let obj = task_metrics_object().with_object(
            "inputMetrics",
            FakeObject::new().with_long("bytesRead", 1),
        );
        let err = TaskMetrics::from_java(&obj).unwrap_err();

        // The error keeps the nested record's context and the bridge kind.
        assert_eq!(err.record, "InputMetrics");
        assert_eq!(err.source, BridgeError::accessor_not_found("recordsRead"));
    }
}
