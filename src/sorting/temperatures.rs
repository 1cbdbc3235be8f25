use std::fmt;

use crate::error::SortError;

/// A temperature with a precision of a tenth of a degree, between -273.0 and 500.0 inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temperature(i16);

impl Temperature {
    /// The coldest representable temperature, in tenths of a degree.
    pub const MIN_TENTHS: i16 = -2730;
    /// The hottest representable temperature, in tenths of a degree.
    pub const MAX_TENTHS: i16 = 5000;

    /// Creates a temperature from a count of tenths of a degree, so `-126` is -12.6 degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::error::SortError;
    /// use bst_set::sorting::Temperature;
    ///
    /// assert_eq!(Temperature::from_tenths(-126).unwrap().to_string(), "-12.6");
    /// assert_eq!(
    ///     Temperature::from_tenths(5001),
    ///     Err(SortError::TemperatureOutOfRange(5001))
    /// );
    /// ```
    pub fn from_tenths(tenths: i32) -> Result<Self, SortError> {
        if (i32::from(Self::MIN_TENTHS)..=i32::from(Self::MAX_TENTHS)).contains(&tenths) {
            // In range, so it fits.
            Ok(Self(tenths as i16))
        } else {
            Err(SortError::TemperatureOutOfRange(tenths))
        }
    }

    /// The temperature in tenths of a degree.
    pub fn tenths(&self) -> i16 {
        self.0
    }

    /// Position of this temperature in a table of counts covering the whole range.
    fn offset(&self) -> usize {
        (self.0 - Self::MIN_TENTHS) as usize
    }
}

/// Formats with exactly one decimal, e.g. `-0.5` or `11.0`.
impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
    }
}

/// Sorts temperatures from coldest to hottest, keeping duplicates.
///
/// This is a counting sort over every representable temperature, so it runs in linear time no
/// matter how many values there are.
pub fn sort_temperatures(temperatures: &mut [Temperature]) {
    let range = (Temperature::MAX_TENTHS - Temperature::MIN_TENTHS) as usize + 1;
    let mut counts = vec![0usize; range];
    for temperature in temperatures.iter() {
        counts[temperature.offset()] += 1;
    }

    let mut slots = temperatures.iter_mut();
    for (offset, count) in counts.into_iter().enumerate() {
        let temperature = Temperature(Temperature::MIN_TENTHS + offset as i16);
        for slot in slots.by_ref().take(count) {
            *slot = temperature;
        }
    }
}
