use super::*;

/// The built-in word and athlete catalog.
///
/// Classic entries resolve to their own category label. Athlete entries
/// all resolve to "Professional Athlete" and carry a hint of the form
/// `"<league> <position>"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog;

impl Catalog {
    pub fn words() -> impl Iterator<Item = Entry> {
        WORDS.iter().map(Self::word)
    }
    pub fn athletes() -> impl Iterator<Item = Entry> {
        ATHLETES.iter().map(Self::athlete)
    }
    fn word((category, secret, hint): &(Category, &str, &str)) -> Entry {
        Entry::from((*secret, *hint, category.label()))
    }
    fn athlete((league, secret, position): &(League, &str, &str)) -> Entry {
        let hint = format!("{} {}", league, position);
        Entry::from((*secret, hint.as_str(), imp_core::ATHLETE_CATEGORY))
    }
}

impl Pool for Catalog {
    fn candidates(&self, restriction: &Restriction) -> Vec<Entry> {
        match restriction {
            Restriction::Everything => Self::words().collect(),
            Restriction::Category(category) => WORDS
                .iter()
                .filter(|(c, _, _)| c == category)
                .map(Self::word)
                .collect(),
            Restriction::Leagues(leagues) => ATHLETES
                .iter()
                .filter(|(league, _, _)| leagues.contains(league))
                .map(Self::athlete)
                .collect(),
        }
    }
}

#[rustfmt::skip]
const WORDS: &[(Category, &str, &str)] = &[
    (Category::Sports,        "Basketball",        "Hoop"),
    (Category::Sports,        "Tennis",            "Racket"),
    (Category::Sports,        "Golf",              "Hole in one"),
    (Category::Sports,        "Swimming",          "Lanes"),
    (Category::Sports,        "Boxing",            "Gloves"),
    (Category::Sports,        "Skiing",            "Slopes"),
    (Category::Sports,        "Volleyball",        "Net"),
    (Category::Sports,        "Bowling",           "Strike"),
    (Category::Sports,        "Surfing",           "Waves"),
    (Category::Sports,        "Archery",           "Target"),
    (Category::Animals,       "Elephant",          "Trunk"),
    (Category::Animals,       "Penguin",           "Tuxedo"),
    (Category::Animals,       "Giraffe",           "Tall"),
    (Category::Animals,       "Kangaroo",          "Pouch"),
    (Category::Animals,       "Octopus",           "Ink"),
    (Category::Animals,       "Owl",               "Nocturnal"),
    (Category::Animals,       "Shark",             "Fin"),
    (Category::Animals,       "Camel",             "Hump"),
    (Category::Animals,       "Peacock",           "Feathers"),
    (Category::Animals,       "Chameleon",         "Camouflage"),
    (Category::FoodDrink,     "Pizza",             "Slice"),
    (Category::FoodDrink,     "Sushi",             "Chopsticks"),
    (Category::FoodDrink,     "Coffee",            "Morning"),
    (Category::FoodDrink,     "Pancakes",          "Syrup"),
    (Category::FoodDrink,     "Taco",              "Shell"),
    (Category::FoodDrink,     "Popcorn",           "Movies"),
    (Category::FoodDrink,     "Lemonade",          "Sour"),
    (Category::FoodDrink,     "Chocolate",         "Sweet"),
    (Category::FoodDrink,     "Spaghetti",         "Noodles"),
    (Category::FoodDrink,     "Smoothie",          "Blender"),
    (Category::Locations,     "Beach",             "Sand"),
    (Category::Locations,     "Library",           "Quiet"),
    (Category::Locations,     "Airport",           "Departures"),
    (Category::Locations,     "Hospital",          "Emergency"),
    (Category::Locations,     "Casino",            "Jackpot"),
    (Category::Locations,     "Museum",            "Exhibits"),
    (Category::Locations,     "Submarine",         "Underwater"),
    (Category::Locations,     "Zoo",               "Cages"),
    (Category::Locations,     "Space Station",     "Orbit"),
    (Category::Locations,     "Movie Theater",     "Screen"),
    (Category::Objects,       "Umbrella",          "Rain"),
    (Category::Objects,       "Toothbrush",        "Bristles"),
    (Category::Objects,       "Candle",            "Wick"),
    (Category::Objects,       "Ladder",            "Rungs"),
    (Category::Objects,       "Mirror",            "Reflection"),
    (Category::Objects,       "Backpack",          "Straps"),
    (Category::Objects,       "Scissors",          "Cut"),
    (Category::Objects,       "Compass",           "North"),
    (Category::Objects,       "Hammock",           "Swing"),
    (Category::Objects,       "Telescope",         "Stars"),
    (Category::Entertainment, "Roller Coaster",    "Loop"),
    (Category::Entertainment, "Karaoke",           "Microphone"),
    (Category::Entertainment, "Magic Show",        "Rabbit"),
    (Category::Entertainment, "Circus",            "Tent"),
    (Category::Entertainment, "Video Game",        "Controller"),
    (Category::Entertainment, "Concert",           "Encore"),
    (Category::Entertainment, "Board Game",        "Dice"),
    (Category::Entertainment, "Escape Room",       "Puzzle"),
    (Category::Entertainment, "Fireworks",         "Boom"),
    (Category::Entertainment, "Podcast",           "Episode"),
    (Category::Professions,   "Firefighter",       "Hose"),
    (Category::Professions,   "Astronaut",         "Rocket"),
    (Category::Professions,   "Chef",              "Kitchen"),
    (Category::Professions,   "Dentist",           "Teeth"),
    (Category::Professions,   "Pilot",             "Cockpit"),
    (Category::Professions,   "Librarian",         "Books"),
    (Category::Professions,   "Plumber",           "Pipes"),
    (Category::Professions,   "Detective",         "Clues"),
    (Category::Professions,   "Farmer",            "Tractor"),
    (Category::Professions,   "Barber",            "Clippers"),
];

#[rustfmt::skip]
const ATHLETES: &[(League, &str, &str)] = &[
    (League::NFL, "Tom Brady",            "Quarterback"),
    (League::NFL, "Patrick Mahomes",      "Quarterback"),
    (League::NFL, "Travis Kelce",         "Tight End"),
    (League::NFL, "Jerry Rice",           "Wide Receiver"),
    (League::NFL, "Aaron Donald",         "Defensive Tackle"),
    (League::NFL, "Barry Sanders",        "Running Back"),
    (League::NFL, "Justin Tucker",        "Kicker"),
    (League::NFL, "Lawrence Taylor",      "Linebacker"),
    (League::NBA, "LeBron James",         "Forward"),
    (League::NBA, "Stephen Curry",        "Guard"),
    (League::NBA, "Michael Jordan",       "Guard"),
    (League::NBA, "Kevin Durant",         "Forward"),
    (League::NBA, "Shaquille O'Neal",     "Center"),
    (League::NBA, "Nikola Jokic",         "Center"),
    (League::NBA, "Giannis Antetokounmpo","Forward"),
    (League::NBA, "Magic Johnson",        "Guard"),
    (League::MLB, "Shohei Ohtani",        "Pitcher"),
    (League::MLB, "Aaron Judge",          "Outfielder"),
    (League::MLB, "Babe Ruth",            "Outfielder"),
    (League::MLB, "Derek Jeter",          "Shortstop"),
    (League::MLB, "Mike Trout",           "Outfielder"),
    (League::MLB, "Clayton Kershaw",      "Pitcher"),
    (League::MLB, "Mookie Betts",         "Outfielder"),
    (League::MLB, "Jackie Robinson",      "Second Baseman"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashMap;
    use std::collections::HashSet;

    #[test]
    fn every_category_is_stocked() {
        for category in Category::all() {
            assert!(!Catalog.candidates(&Restriction::from(*category)).is_empty());
        }
        for league in League::all() {
            assert!(!Catalog.candidates(&Restriction::from_iter([*league])).is_empty());
        }
    }

    #[test]
    fn secrets_are_unique() {
        let secrets = Catalog::words()
            .chain(Catalog::athletes())
            .map(|e| e.secret().to_string())
            .collect::<HashSet<_>>();
        assert_eq!(secrets.len(), WORDS.len() + ATHLETES.len());
    }

    #[test]
    fn everything_means_every_word_and_no_athletes() {
        let all = Catalog.candidates(&Restriction::Everything);
        assert_eq!(all.len(), WORDS.len());
        assert!(all.iter().all(|e| e.category() != imp_core::ATHLETE_CATEGORY));
    }

    #[test]
    fn league_restriction_is_honored() {
        let restriction = Restriction::from_iter([League::NBA, League::MLB]);
        let candidates = Catalog.candidates(&restriction);
        assert!(!candidates.is_empty());
        for entry in candidates {
            assert_eq!(entry.category(), imp_core::ATHLETE_CATEGORY);
            assert!(entry.hint().starts_with("NBA") || entry.hint().starts_with("MLB"));
        }
    }

    #[test]
    fn catalog_agrees_with_slice_pool() {
        let entries = Catalog::words().chain(Catalog::athletes()).collect::<Vec<_>>();
        let restrictions = [
            Restriction::Everything,
            Restriction::from(Category::Locations),
            Restriction::sports(),
            Restriction::from_iter([League::NFL]),
        ];
        for restriction in restrictions.iter() {
            assert_eq!(
                Catalog.candidates(restriction),
                entries.as_slice().candidates(restriction)
            );
        }
    }

    #[test]
    fn sampling_is_uniform_over_category() {
        let ref mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let restriction = Restriction::from(Category::Animals);
        let n = Catalog.candidates(&restriction).len();
        let trials = 20_000;
        let mut counts = HashMap::<String, usize>::new();
        for _ in 0..trials {
            let entry = Catalog.sample(&restriction, rng).unwrap();
            *counts.entry(entry.secret().to_string()).or_default() += 1;
        }
        assert_eq!(counts.len(), n);
        let expected = 1. / n as f64;
        for (_, count) in counts {
            let observed = count as f64 / trials as f64;
            assert!((observed - expected).abs() < 0.02);
        }
    }
}
