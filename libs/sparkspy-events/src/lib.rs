pub mod convert;
pub mod error;
pub mod job;
pub mod metrics;
pub mod stage;

pub use convert::FromJava;
pub use error::ConvertError;
pub use job::JobEndEvent;
pub use metrics::{
    InputMetrics, OutputMetrics, ShuffleReadMetrics, ShuffleWriteMetrics, TaskMetrics,
};
pub use stage::{StageCompletedEvent, StageInfo};
