//!
//! Gas reporter method record.
//!

///
/// A single method record of the raw gas report.
///
/// Fields the reporter does not use are kept in `extra`, so the record serializes back unchanged.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Contract name.
    pub contract: String,
    /// Method name.
    pub method: String,
    /// Number of calls made during the benchmark.
    pub number_of_calls: u64,
    /// Gas spent by each measured call.
    pub gas_data: Vec<u64>,
    /// The remaining fields, such as the key and the function signature.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Method {
    ///
    /// Whether the method was never called, so has nothing to report.
    ///
    pub fn is_inert(&self) -> bool {
        self.number_of_calls == 0
    }

    ///
    /// Returns `(min, max, avg)`, or `None` if there is no gas data.
    ///
    /// The average divides by the number of calls rather than the number of measurements,
    /// and is rounded half up.
    ///
    pub fn statistics(&self) -> Option<(u64, u64, u64)> {
        let min = *self.gas_data.iter().min()?;
        let max = *self.gas_data.iter().max()?;
        if self.number_of_calls == 0 {
            return None;
        }

        let sum: u128 = self.gas_data.iter().map(|gas| u128::from(*gas)).sum();
        let calls = u128::from(self.number_of_calls);
        let avg = (sum * 2 + calls) / (calls * 2);
        Some((min, max, u64::try_from(avg).unwrap_or(u64::MAX)))
    }
}
