use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{default_present_cutoff, TimelineConfig};
use crate::models::ExperienceRecord;
use crate::timeline::date::{parse_record_date, PRESENT};

/// Start and end labels shown next to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationLabels {
    pub start: String,
    pub end: String,
}

/// Turns record dates into "Month YYYY" labels.
///
/// Dates strictly after `cutoff` are open-ended placeholders and read as
/// "Present".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationFormatter {
    cutoff: NaiveDate,
}

impl Default for DurationFormatter {
    fn default() -> Self {
        Self::new(default_present_cutoff())
    }
}

impl DurationFormatter {
    pub fn new(cutoff: NaiveDate) -> Self {
        Self { cutoff }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.present_cutoff)
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn format_duration(&self, value: Option<&str>) -> String {
        let Some(raw) = value else {
            return String::new();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        if trimmed == PRESENT {
            return PRESENT.to_string();
        }

        match parse_record_date(trimmed) {
            Some(dt) if dt > self.cutoff_start() => PRESENT.to_string(),
            Some(dt) => dt.format("%B %Y").to_string(),
            None => {
                tracing::debug!(value = %trimmed, "unparseable date shown verbatim");
                trimmed.to_string()
            }
        }
    }

    /// A missing or blank end date means the position is ongoing.
    pub fn labels(&self, record: &ExperienceRecord) -> DurationLabels {
        let start = self.format_duration(record.start_date.as_deref());
        let end = match record.end_date.as_deref().map(str::trim) {
            Some(end) if !end.is_empty() => self.format_duration(Some(end)),
            _ => PRESENT.to_string(),
        };
        DurationLabels { start, end }
    }

    fn cutoff_start(&self) -> chrono::NaiveDateTime {
        self.cutoff.and_hms_opt(0, 0, 0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> DurationFormatter {
        DurationFormatter::new(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap())
    }

    #[test]
    fn sentinel_passes_through() {
        assert_eq!(formatter().format_duration(Some("Present")), "Present");
    }

    #[test]
    fn empty_and_absent_are_blank() {
        let f = formatter();
        assert_eq!(f.format_duration(Some("")), "");
        assert_eq!(f.format_duration(Some("   ")), "");
        assert_eq!(f.format_duration(None), "");
    }

    #[test]
    fn formats_month_and_year() {
        let f = formatter();
        assert_eq!(f.format_duration(Some("2023-03-15")), "March 2023");
        assert_eq!(f.format_duration(Some("2019-12-01T00:00:00")), "December 2019");
        assert_eq!(f.format_duration(Some("2020")), "January 2020");
    }

    #[test]
    fn dates_after_cutoff_read_present() {
        let f = formatter();
        assert_eq!(f.format_duration(Some("2025-07-28")), "July 2025");
        assert_eq!(f.format_duration(Some("2025-07-28T09:30:00")), "Present");
        assert_eq!(f.format_duration(Some("2025-07-29")), "Present");
        assert_eq!(f.format_duration(Some("2031-01-01")), "Present");
    }

    #[test]
    fn cutoff_is_injectable() {
        let early = DurationFormatter::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(early.format_duration(Some("2023-03-15")), "Present");
        assert_eq!(early.format_duration(Some("2019-03-15")), "March 2019");
    }

    #[test]
    fn garbage_is_shown_verbatim() {
        assert_eq!(formatter().format_duration(Some(" Summer 2019 ")), "Summer 2019");
    }

    #[test]
    fn labels_default_missing_end_to_present() {
        let record = ExperienceRecord {
            organization: "Acme".into(),
            start_date: Some("2021-06-01".into()),
            ..Default::default()
        };
        assert_eq!(
            formatter().labels(&record),
            DurationLabels {
                start: "June 2021".into(),
                end: "Present".into(),
            }
        );
    }

    #[test]
    fn labels_treat_blank_end_as_present() {
        for end in ["", "   "] {
            let record = ExperienceRecord {
                organization: "Acme".into(),
                start_date: Some("2023-03-15".into()),
                end_date: Some(end.into()),
                ..Default::default()
            };
            let labels = formatter().labels(&record);
            assert_eq!(labels.start, "March 2023");
            assert_eq!(labels.end, "Present", "end_date {end:?}");
        }
    }

    #[test]
    fn labels_format_both_ends() {
        let record = ExperienceRecord {
            organization: "Acme".into(),
            start_date: None,
            end_date: Some("2022-01-01".into()),
            ..Default::default()
        };
        let labels = formatter().labels(&record);
        assert_eq!(labels.start, "");
        assert_eq!(labels.end, "January 2022");
    }
}
