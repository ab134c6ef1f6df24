use serde::{Deserialize, Serialize};

/// Kind of a scheduled interval.
///
/// The generator only emits `Study` and `Break`; `Prayer` and `Review`
/// are reserved for hand-edited schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    Study,
    Break,
    Prayer,
    Review,
}

/// One interval of a daily plan. Immutable once generated.
///
/// Serializes as `{id, startTime, endTime, subject, type}`; the minute
/// offsets stay in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    id: String,
    start_time: String,
    end_time: String,
    subject: String,
    #[serde(rename = "type")]
    block_type: BlockType,
    /// Minutes since midnight; may exceed 24h for plans that run late.
    #[serde(skip)]
    start_minute: u32,
    #[serde(skip)]
    end_minute: u32,
}

impl StudyBlock {
    pub(crate) fn new(
        id: String,
        subject: String,
        block_type: BlockType,
        start_minute: u32,
        end_minute: u32,
    ) -> Self {
        Self {
            id,
            start_time: format_clock(start_minute),
            end_time: format_clock(end_minute),
            subject,
            block_type,
            start_minute,
            end_minute,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn duration_min(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// Render minutes since midnight as a 12-hour clock label, e.g. `8:05 AM`.
///
/// Hours wrap modulo 24; hour 0 renders as 12.
pub fn format_clock(minutes: u32) -> String {
    let h = (minutes / 60) % 24;
    let m = minutes % 60;
    let ampm = if h >= 12 { "PM" } else { "AM" };
    let h12 = match h % 12 {
        0 => 12,
        other => other,
    };
    format!("{h12}:{m:02} {ampm}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_labels() {
        assert_eq!(format_clock(8 * 60), "8:00 AM");
        assert_eq!(format_clock(8 * 60 + 45), "8:45 AM");
        assert_eq!(format_clock(12 * 60), "12:00 PM");
        assert_eq!(format_clock(13 * 60 + 5), "1:05 PM");
        assert_eq!(format_clock(0), "12:00 AM");
        assert_eq!(format_clock(24 * 60 + 30), "12:30 AM");
    }

    #[test]
    fn block_serializes_with_type_field() {
        let block = StudyBlock::new("study-0".into(), "Physics".into(), BlockType::Study, 480, 525);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "Study");
        assert_eq!(json["startTime"], "8:00 AM");
        assert_eq!(json["endTime"], "8:45 AM");
        assert_eq!(block.duration_min(), 45);

        let fields: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(fields.len(), 5);
        for field in ["id", "startTime", "endTime", "subject", "type"] {
            assert!(fields.contains(&field), "missing {field}");
        }
    }
}
