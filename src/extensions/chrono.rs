use chrono::NaiveDate;

pub trait NaiveDateExt {
    /// "Today", "Tomorrow", or the full weekday name, relative to `start`.
    fn plan_label(&self, start: NaiveDate) -> String;
}

impl NaiveDateExt for NaiveDate {
    fn plan_label(&self, start: NaiveDate) -> String {
        match (*self - start).num_days() {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => self.format("%A").to_string(),
        }
    }
}
