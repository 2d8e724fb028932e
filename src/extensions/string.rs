pub trait DashSeparated {
    /// Trimmed copy with `/` date separators turned into `-`.
    fn dash_separated(&self) -> String;
}

impl DashSeparated for str {
    fn dash_separated(&self) -> String {
        self.trim()
            .chars()
            .map(|c| if c == '/' { '-' } else { c })
            .collect()
    }
}
