use std::collections::BTreeMap;
use std::fmt;

/// A person registered at an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resident {
    /// Family name.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Street the person is registered on.
    pub street: String,
    /// House number on `street`.
    pub house: u32,
}

impl Resident {
    /// Creates a resident of `street` `house`.
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        street: impl Into<String>,
        house: u32,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            street: street.into(),
            house,
        }
    }
}

/// Everybody living in one house.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Household {
    /// Street of the house.
    pub street: String,
    /// House number.
    pub house: u32,
    /// `"Surname Name"` of each resident, sorted by surname then name.
    pub residents: Vec<String>,
}

/// Formats as `Street 7 - Surname Name, Surname Name`.
impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.street,
            self.house,
            self.residents.join(", ")
        )
    }
}

/// Groups residents by house. Households are ordered by street name, then by house number.
///
/// # Examples
///
/// ```
/// use bst_set::sorting::{group_addresses, Resident};
///
/// let households = group_addresses([
///     Resident::new("Sidorov", "Petr", "Sadovaya", 5),
///     Resident::new("Petrov", "Ivan", "Zheleznodorozhnaya", 3),
///     Resident::new("Sidorova", "Maria", "Sadovaya", 5),
/// ]);
///
/// let lines: Vec<_> = households.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     lines,
///     [
///         "Sadovaya 5 - Sidorov Petr, Sidorova Maria",
///         "Zheleznodorozhnaya 3 - Petrov Ivan",
///     ]
/// );
/// ```
pub fn group_addresses<I>(residents: I) -> Vec<Household>
where
    I: IntoIterator<Item = Resident>,
{
    let mut streets: BTreeMap<String, BTreeMap<u32, Vec<(String, String)>>> = BTreeMap::new();
    for resident in residents {
        streets
            .entry(resident.street)
            .or_default()
            .entry(resident.house)
            .or_default()
            .push((resident.surname, resident.name));
    }

    streets
        .into_iter()
        .flat_map(|(street, houses)| {
            houses.into_iter().map(move |(house, mut people)| {
                people.sort();
                Household {
                    street: street.clone(),
                    house,
                    residents: people
                        .into_iter()
                        .map(|(surname, name)| format!("{} {}", surname, name))
                        .collect(),
                }
            })
        })
        .collect()
}
