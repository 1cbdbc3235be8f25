use bst_set::sorting::{self, Resident, Temperature, Time};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn times_are_chronological(xs: Vec<(u8, u8, u8)>) -> bool {
    let mut times: Vec<_> = xs
        .into_iter()
        .map(|(h, m, s)| Time::new(h % 24, m % 60, s % 60))
        .collect();
    sorting::sort_times(&mut times);

    // Zero padding makes the text order match the time order.
    times
        .windows(2)
        .all(|pair| pair[0].to_string() <= pair[1].to_string())
}

#[quickcheck]
fn temperatures_are_sorted(xs: Vec<i16>) -> bool {
    let mut temperatures: Vec<_> = xs
        .into_iter()
        .filter_map(|x| Temperature::from_tenths(i32::from(x)).ok())
        .collect();
    sorting::sort_temperatures(&mut temperatures);

    temperatures
        .windows(2)
        .all(|pair| pair[0].tenths() <= pair[1].tenths())
}

#[quickcheck]
fn sequence_moves_most_frequent_to_the_end(xs: Vec<u8>) -> bool {
    let mut values = xs.clone();
    sorting::sort_sequence(&mut values);

    let Some(&last) = values.last() else {
        return xs.is_empty();
    };
    let count = |v: u8| xs.iter().filter(|&&x| x == v).count();
    let moved = count(last);

    // Nothing beats the moved value, and ties only lose to smaller values.
    let best = xs.iter().all(|&x| count(x) < moved || (count(x) == moved && x >= last));
    let rest: Vec<_> = xs.iter().copied().filter(|&x| x != last).collect();

    best && values[..rest.len()] == rest[..] && values[rest.len()..].iter().all(|&x| x == last)
}

#[test]
fn households_are_grouped_per_house() {
    let households = sorting::group_addresses([
        Resident::new("Petrov", "Ivan", "Zheleznodorozhnaya", 3),
        Resident::new("Sidorov", "Petr", "Sadovaya", 5),
        Resident::new("Ivanov", "Aleksey", "Zheleznodorozhnaya", 7),
        Resident::new("Sidorova", "Maria", "Sadovaya", 5),
        Resident::new("Ivanov", "Mikhail", "Zheleznodorozhnaya", 7),
    ]);

    assert_eq!(households.len(), 3);
    assert_eq!(households[2].residents, ["Ivanov Aleksey", "Ivanov Mikhail"]);
}
