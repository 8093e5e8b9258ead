//!
//! The results table columns.
//!

///
/// The results table columns.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Contract name.
    Contract,
    /// Method name.
    Method,
    /// The cheapest call.
    Min,
    /// The most expensive call.
    Max,
    /// The average call.
    Avg,
    /// The change of the average call. Only rendered when there is a previous run.
    AvgDelta,
}

impl Column {
    /// The columns carrying data, in rendering order.
    pub const DATA: [Self; 5] = [Self::Contract, Self::Method, Self::Min, Self::Max, Self::Avg];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Contract => "Contract",
            Self::Method => "Method",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Avg => "Avg",
            Self::AvgDelta => "Δ Avg",
        }
    }

    ///
    /// Whether a decoded header names this column.
    ///
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        header == self.header() || (*self == Self::Avg && header == "Average")
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}
